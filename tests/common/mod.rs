//! Shared test utilities for blammo integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every helper that builds a log pins its clock with
//! [`blammo::FixedClock`] so rendered lines are deterministic.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

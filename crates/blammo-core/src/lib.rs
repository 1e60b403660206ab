//! blammo-core — the data structures and line rendering behind blammo.
//!
//! This crate holds everything below the `Log` facade: the persistent
//! [`Path`] and [`Tags`] chains, the [`Event`] record, the [`Clock`] and
//! [`EventWriter`] capabilities, the canonical [`LineWriter`], and the
//! [`LineCodec`] that reads canonical lines back.
//!
//! # Architecture
//!
//! ```text
//! SafeName ──► Path ──┐
//!                     ├──► Event ──► LineWriter ──► sink
//!             Tags ───┘        └───► LineCodec
//! ```
//!
//! Path, Tags and Event are immutable and shared by reference counting, so
//! they are freely sent across threads. The only shared mutable state is the
//! sink owned by each [`LineWriter`].

pub mod clock;
pub mod codec;
pub mod config;
pub mod error;
pub mod line;
pub mod path;
pub mod pool;
pub mod safe_name;
pub mod tags;
pub mod types;
pub mod writer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{Codec, LineCodec};
pub use error::CodecError;
pub use line::LineWriter;
pub use path::Path;
pub use safe_name::{is_safe_name, make_safe_name};
pub use tags::{TagValue, Tags};
pub use types::{Event, Level};
pub use writer::{EventWriter, NullWriter};

//! blammo-sinks — byte sinks for blammo line writers.
//!
//! A sink is any `std::io::Write + Send`. This crate provides the ones a
//! logger usually needs and [`open`] to build one from a
//! [`SinkConfig`](blammo_core::config::SinkConfig).

pub mod file;
pub mod memory;

use std::io::{self, Write};

use blammo_core::config::{SinkConfig, SinkKind};

pub use file::open_append;
pub use memory::SharedBuffer;

/// A type-erased sink.
pub type BoxedSink = Box<dyn Write + Send>;

/// Opens the sink described by `config`.
pub fn open(config: &SinkConfig) -> io::Result<BoxedSink> {
    match config.kind {
        SinkKind::Stdout => Ok(Box::new(io::stdout())),
        SinkKind::Stderr => Ok(Box::new(io::stderr())),
        SinkKind::File => {
            let path = config.path.as_deref().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "file sink requires a path")
            })?;
            Ok(Box::new(open_append(path)?))
        }
    }
}

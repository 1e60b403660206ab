//! blammo — hierarchical structured event logging.
//!
//! A [`Log`] turns log calls into immutable [`Event`] records and hands them
//! to a writer, usually a [`LineWriter`] that renders one canonical line per
//! event:
//!
//! ```text
//! 2020-01-13T12:26:47Z d [root/kid/fart] [alert+zombo-dot-com] this is a message
//! ```
//!
//! # Architecture
//!
//! ```text
//! Log ──► Event ──► EventWriter (LineWriter) ──► sink (blammo-sinks)
//!  │
//!  ├── Path  (child)
//!  └── Tags  (tag, tag_int, tag_string, tag_float)
//! ```
//!
//! The data structures and writers live in `blammo-core`; this crate adds
//! the facade, the formatting macros and the `blammo` command-line tool.

pub mod log;

pub use blammo_core::{
    config, is_safe_name, make_safe_name, Clock, Codec, CodecError, Event, EventWriter,
    FixedClock, Level, LineCodec, LineWriter, NullWriter, Path, SystemClock, TagValue, Tags,
};
pub use blammo_sinks as sinks;
pub use log::{Log, LogBuilder};

/// Emits a formatted event at an explicit level.
///
/// ```
/// # let log = blammo::Log::new("app");
/// blammo::log!(log, blammo::Level::Warn, "disk at {}%", 91);
/// ```
#[macro_export]
macro_rules! log {
    ($log:expr, $level:expr, $($arg:tt)+) => {
        $log.log_args($level, ::std::format_args!($($arg)+))
    };
}

/// Emits a formatted debug event. Arguments are not formatted when debug
/// is disabled.
#[macro_export]
macro_rules! debug {
    ($log:expr, $($arg:tt)+) => {
        $crate::log!($log, $crate::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($log:expr, $($arg:tt)+) => {
        $crate::log!($log, $crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($log:expr, $($arg:tt)+) => {
        $crate::log!($log, $crate::Level::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($log:expr, $($arg:tt)+) => {
        $crate::log!($log, $crate::Level::Error, $($arg)+)
    };
}

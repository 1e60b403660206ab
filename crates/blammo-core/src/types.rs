//! Core types for blammo-core.
//!
//! This module defines the [`Event`] record every log call produces and its
//! severity [`Level`].

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::path::Path;
use crate::tags::Tags;

/// Event severity. Levels are totally ordered, `Debug` lowest.
///
/// Nothing in the event or writer layers filters on level; a logger simply
/// has no writer for a level it does not emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Verbose information about implementation details.
    #[default]
    Debug,
    /// Expected behavior; usage and normal operation.
    Info,
    /// Events off the happy path, usually failures of *other* systems.
    Warn,
    /// Failures the application could not handle.
    Error,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    /// The single-character code used in the canonical line format.
    pub fn code(self) -> char {
        match self {
            Level::Debug => 'd',
            Level::Info => 'i',
            Level::Warn => 'w',
            Level::Error => 'e',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'd' => Some(Level::Debug),
            'i' => Some(Level::Info),
            'w' => Some(Level::Warn),
            'e' => Some(Level::Error),
            _ => None,
        }
    }

    /// Parses a level name as typed on a command line or in config.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "d" | "debug" => Some(Level::Debug),
            "i" | "info" => Some(Level::Info),
            "w" | "warn" | "warning" => Some(Level::Warn),
            "e" | "error" => Some(Level::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Debug => write!(f, "DEBUG"),
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// A single log record.
///
/// An event is built inside a log call, handed by reference to exactly one
/// writer, then dropped. It shares the logger's [`Path`] and [`Tags`] rather
/// than copying them, and borrows its text when the message needed no
/// formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<'a> {
    /// When the event occurred.
    pub time: DateTime<Utc>,
    pub level: Level,
    /// Where in the system the event occurred.
    pub path: Option<Path>,
    /// Extra key/value metadata.
    pub tags: Option<Tags>,
    /// The message. May be empty.
    pub text: Cow<'a, str>,
}

impl Event<'_> {
    /// The zero timestamp, `0001-01-01T00:00:00Z`.
    pub fn zero_time() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|t| t.and_utc())
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Detaches the event from any borrowed text.
    pub fn into_owned(self) -> Event<'static> {
        Event {
            time: self.time,
            level: self.level,
            path: self.path,
            tags: self.tags,
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

impl Default for Event<'_> {
    fn default() -> Self {
        Self {
            time: Self::zero_time(),
            level: Level::Debug,
            path: None,
            tags: None,
            text: Cow::Borrowed(""),
        }
    }
}

//! Test builders — ergonomic constructors for events and captured logs.
//!
//! These are designed for readability in assertions, not production use.
//! They panic on invalid input rather than returning `Result`.

use std::borrow::Cow;
use std::sync::Arc;

use blammo::sinks::SharedBuffer;
use blammo::{Event, EventWriter, FixedClock, Level, LineWriter, Log, Path, Tags};
use chrono::{DateTime, Utc};

use super::fixtures::ref_time;

// ---------------------------------------------------------------------------
// EventBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Event`] fixtures. Starts from the reference time at
/// debug level with no path, tags or text.
///
/// ```rust
/// let event = EventBuilder::new()
///     .level(Level::Error)
///     .path(&["root", "kid"])
///     .tags(Tags::new("alert", None))
///     .text("boom")
///     .build();
/// ```
pub struct EventBuilder {
    event: Event<'static>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            event: Event {
                time: ref_time(),
                ..Event::default()
            },
        }
    }

    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.event.time = time;
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.event.level = level;
        self
    }

    /// Root segment first.
    pub fn path(mut self, segments: &[&str]) -> Self {
        let (root, rest) = segments.split_first().expect("path needs a root segment");
        let path = rest.iter().fold(Path::new(root), |p, s| p.child(s));
        self.event.path = Some(path);
        self
    }

    pub fn tags(mut self, tags: Tags) -> Self {
        self.event.tags = Some(tags);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.event.text = Cow::Owned(text.into());
        self
    }

    pub fn build(self) -> Event<'static> {
        self.event
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Rendering helpers
// ---------------------------------------------------------------------------

/// Renders one event through a fresh [`LineWriter`].
pub fn render(event: &Event<'_>) -> String {
    let writer = LineWriter::new(Vec::new());
    writer.write_event(event);
    String::from_utf8(writer.into_inner()).expect("rendered line must be UTF-8")
}

/// A log whose every level writes canonical lines into a shared buffer,
/// stamped with the reference time.
pub fn capture_log(name: &str) -> (Log, SharedBuffer) {
    let buf = SharedBuffer::new();
    let writer = Arc::new(LineWriter::new(buf.clone()));
    let log = Log::builder(name)
        .writer_from(Level::Debug, writer)
        .clock(Arc::new(FixedClock(ref_time())))
        .build();
    (log, buf)
}

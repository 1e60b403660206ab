//! The canonical line format and the [`LineWriter`] that produces it.
//!
//! One event renders to one line:
//!
//! ```text
//! <RFC3339-timestamp> <level-code> [<path>] [<tag>(+<tag>)*]( <message>)?
//! 2020-01-13T12:26:47Z d [root/kid/fart] [alert+zombo-dot-com] this is a message
//! ```
//!
//! Tags are written oldest first. String tag values pass through
//! [`make_safe_name`]; keys are written as given. Floats are written in plain
//! decimal notation, never with an exponent, and non-finite values as
//! `inf`, `-inf` or `NaN`, so `+` only ever separates tags. Newlines in the
//! message are written as the two characters `\n`, so every event stays on one
//! physical line.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex, PoisonError};

use chrono::format::{Item, StrftimeItems};

use crate::pool::BufferPool;
use crate::safe_name::make_safe_name;
use crate::tags::{TagValue, Tags};
use crate::types::Event;
use crate::writer::EventWriter;

/// RFC 3339 at second precision. Events are always UTC, hence the `Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

static TIMESTAMP_ITEMS: LazyLock<Vec<Item<'static>>> =
    LazyLock::new(|| StrftimeItems::new(TIMESTAMP_FORMAT).collect());

/// Renders `event` in the canonical line format, appending to `buf`.
///
/// An event with empty text gets no line terminator unless
/// `terminate_empty` is set.
pub fn render(event: &Event<'_>, buf: &mut Vec<u8>, terminate_empty: bool) -> io::Result<()> {
    write!(buf, "{}", event.time.format_with_items(TIMESTAMP_ITEMS.iter()))?;
    buf.push(b' ');
    buf.push(event.level.code() as u8);
    buf.push(b' ');

    buf.push(b'[');
    if let Some(path) = &event.path {
        buf.extend_from_slice(path.as_str().as_bytes());
    }
    buf.extend_from_slice(b"] [");
    if let Some(tags) = &event.tags {
        render_tags(tags, buf)?;
    }
    buf.push(b']');

    if !event.text.is_empty() {
        buf.push(b' ');
        escape_newlines(&event.text, buf);
        buf.push(b'\n');
    } else if terminate_empty {
        buf.push(b'\n');
    }
    Ok(())
}

fn render_tags(tags: &Tags, buf: &mut Vec<u8>) -> io::Result<()> {
    for (i, (key, value)) in tags.entries().into_iter().enumerate() {
        if i > 0 {
            buf.push(b'+');
        }
        buf.extend_from_slice(key.as_bytes());
        if let Some(value) = value {
            buf.push(b'=');
            match value {
                TagValue::String(v) => buf.extend_from_slice(make_safe_name(v).as_bytes()),
                number => write!(buf, "{number}")?,
            }
        }
    }
    Ok(())
}

fn escape_newlines(text: &str, buf: &mut Vec<u8>) {
    let mut parts = text.split('\n');
    if let Some(first) = parts.next() {
        buf.extend_from_slice(first.as_bytes());
    }
    for part in parts {
        buf.extend_from_slice(b"\\n");
        buf.extend_from_slice(part.as_bytes());
    }
}

/// An [`EventWriter`] that writes one event per line to a byte sink.
///
/// Each event is rendered into a pooled buffer outside the lock, then
/// written with a single `write_all` while holding the sink's mutex, so
/// lines from concurrent callers never interleave. Output order is the
/// order in which callers acquire the lock.
///
/// Sink errors never reach the caller. They are reported through `tracing`
/// and counted; see [`LineWriter::failed_writes`].
#[derive(Debug)]
pub struct LineWriter<W> {
    out: Mutex<W>,
    pool: BufferPool,
    failures: AtomicU64,
    terminate_empty: bool,
}

impl<W: Write + Send> LineWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            pool: BufferPool::default(),
            failures: AtomicU64::new(0),
            terminate_empty: false,
        }
    }

    /// Also end the line of events whose text is empty.
    pub fn terminate_empty_lines(mut self, terminate: bool) -> Self {
        self.terminate_empty = terminate;
        self
    }

    /// Number of events lost to sink errors since creation.
    pub fn failed_writes(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn flush(&self) -> io::Result<()> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner).flush()
    }

    /// Consumes the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn try_write(&self, event: &Event<'_>) -> io::Result<()> {
        let mut buf = self.pool.get();
        render(event, &mut buf, self.terminate_empty)?;
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(&buf)
    }
}

impl<W: Write + Send> EventWriter for LineWriter<W> {
    fn write_event(&self, event: &Event<'_>) {
        if let Err(err) = self.try_write(event) {
            let failures = self.failures.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::warn!(error = %err, failures, "dropped log event: sink write failed");
        }
    }
}

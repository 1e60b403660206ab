//! Codecs convert events to and from bytes.
//!
//! [`LineCodec`] speaks the canonical line format written by
//! [`LineWriter`](crate::LineWriter), so tooling can read logs back into
//! [`Event`] values. Decoding is best effort: tag values are re-typed from
//! text with [`TagValue::infer`], and string values were already sanitized
//! on the way out.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::error::{CodecError, Result};
use crate::line;
use crate::path::Path;
use crate::tags::{TagValue, Tags};
use crate::types::{Event, Level};

static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<time>\S+) (?P<level>\S+) \[(?P<path>[^\]]*)\] \[(?P<tags>[^\]]*)\](?: (?P<text>.*))?$")
        .expect("line pattern must compile")
});

/// A serialization format for events.
pub trait Codec: Send + Sync {
    /// Appends the encoded form of `event` to `buf`.
    fn encode(&self, event: &Event<'_>, buf: &mut Vec<u8>) -> Result<()>;

    /// Reads one event from `bytes`.
    fn decode(&self, bytes: &[u8]) -> Result<Event<'static>>;
}

/// The canonical one-event-per-line format.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCodec {
    /// Terminate empty-text events when encoding.
    pub terminate_empty: bool,
}

impl LineCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a single line, with or without its terminator.
    pub fn decode_str(&self, line: &str) -> Result<Event<'static>> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let caps = LINE
            .captures(line)
            .ok_or_else(|| CodecError::Malformed(truncate(line)))?;

        let time = DateTime::parse_from_rfc3339(&caps["time"])?.with_timezone(&Utc);
        let level = decode_level(&caps["level"])?;
        let path = decode_path(&caps["path"]);
        let tags = decode_tags(&caps["tags"])?;
        let text = caps
            .name("text")
            .map(|m| m.as_str().replace("\\n", "\n"))
            .unwrap_or_default();

        Ok(Event {
            time,
            level,
            path,
            tags,
            text: Cow::Owned(text),
        })
    }
}

impl Codec for LineCodec {
    fn encode(&self, event: &Event<'_>, buf: &mut Vec<u8>) -> Result<()> {
        line::render(event, buf, self.terminate_empty)?;
        Ok(())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Event<'static>> {
        self.decode_str(std::str::from_utf8(bytes)?)
    }
}

fn decode_level(code: &str) -> Result<Level> {
    let mut chars = code.chars();
    let level = match (chars.next(), chars.next()) {
        (Some(c), None) => Level::from_code(c),
        _ => None,
    };
    level.ok_or_else(|| CodecError::UnknownLevel(code.to_string()))
}

fn decode_path(text: &str) -> Option<Path> {
    if text.is_empty() {
        return None;
    }
    let mut segments = text.split('/');
    let root = Path::new(segments.next().unwrap_or_default());
    Some(segments.fold(root, |path, name| path.child(name)))
}

fn decode_tags(text: &str) -> Result<Option<Tags>> {
    if text.is_empty() {
        return Ok(None);
    }
    let mut chain: Option<Tags> = None;
    for entry in text.split('+') {
        let (key, value) = match entry.split_once('=') {
            Some((key, value)) => (key, Some(TagValue::infer(value))),
            None => (entry, None),
        };
        if key.is_empty() {
            return Err(CodecError::Malformed(format!("empty tag key in {text:?}")));
        }
        chain = Some(Tags::append(chain.as_ref(), key, value));
    }
    Ok(chain)
}

fn truncate(line: &str) -> String {
    const MAX: usize = 80;
    match line.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}…", &line[..idx]),
        None => line.to_string(),
    }
}

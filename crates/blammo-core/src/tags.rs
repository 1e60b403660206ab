//! Event metadata tags.
//!
//! [`Tags`] is an ordered collection of key/value pairs where every key is a
//! string and values are optional. The same key may appear more than once;
//! consumers read the whole chain, oldest first.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+\.[0-9]+$").expect("decimal pattern must compile")
});

/// The value attached to a tag.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Int(i64),
    Float(f64),
    String(String),
}

impl TagValue {
    /// Best-effort typing of a textual value: integers first, then plain
    /// decimals and the non-finite spellings `inf`, `-inf` and `NaN` that
    /// [`Display`](fmt::Display) produces, then strings.
    pub fn infer(text: &str) -> Self {
        if let Ok(i) = text.parse::<i64>() {
            return TagValue::Int(i);
        }
        match text {
            "inf" => return TagValue::Float(f64::INFINITY),
            "-inf" => return TagValue::Float(f64::NEG_INFINITY),
            "NaN" => return TagValue::Float(f64::NAN),
            _ => {}
        }
        if DECIMAL.is_match(text) {
            if let Ok(f) = text.parse::<f64>() {
                return TagValue::Float(f);
            }
        }
        TagValue::String(text.to_string())
    }
}

/// Floats use plain decimal notation, never an exponent. Non-finite values
/// are `inf`, `-inf` and `NaN`; no spelling contains the `+` tag separator.
impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Int(v) => write!(f, "{v}"),
            TagValue::Float(v) => write!(f, "{v}"),
            TagValue::String(v) => f.write_str(v),
        }
    }
}

impl From<i64> for TagValue {
    fn from(v: i64) -> Self {
        TagValue::Int(v)
    }
}

impl From<f64> for TagValue {
    fn from(v: f64) -> Self {
        TagValue::Float(v)
    }
}

impl From<String> for TagValue {
    fn from(v: String) -> Self {
        TagValue::String(v)
    }
}

impl From<&str> for TagValue {
    fn from(v: &str) -> Self {
        TagValue::String(v.to_string())
    }
}

/// An immutable, singly linked list of tags, held by its newest entry.
///
/// Adding a tag never modifies an existing node: it allocates a new tail
/// that points at the old one. A widely used chain can therefore be shared
/// by many loggers and events at once.
///
/// A chain is never empty: it is held by its newest entry, so `len() >= 1`
/// and [`is_empty`](Tags::is_empty) is always `false`.
#[derive(Clone)]
pub struct Tags {
    node: Arc<TagNode>,
}

struct TagNode {
    key: String,
    value: Option<TagValue>,
    parent: Option<Tags>,
}

// Unlinks the chain one node at a time; the default recursive drop
// overflows the stack on long chains.
impl Drop for TagNode {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(tags) = next {
            next = match Arc::try_unwrap(tags.node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

impl Tags {
    /// Starts a new chain with a single entry.
    pub fn new(key: impl Into<String>, value: Option<TagValue>) -> Self {
        Self::link(key.into(), value, None)
    }

    fn link(key: String, value: Option<TagValue>, parent: Option<Tags>) -> Self {
        Self {
            node: Arc::new(TagNode { key, value, parent }),
        }
    }

    /// Appends an entry to `parent`, or starts a chain when there is none.
    pub fn append(parent: Option<&Tags>, key: impl Into<String>, value: Option<TagValue>) -> Self {
        Self::link(key.into(), value, parent.cloned())
    }

    /// Appends a valueless entry.
    pub fn tag(&self, key: impl Into<String>) -> Self {
        Self::append(Some(self), key, None)
    }

    pub fn tag_int(&self, key: impl Into<String>, v: i64) -> Self {
        Self::append(Some(self), key, Some(TagValue::Int(v)))
    }

    pub fn tag_string(&self, key: impl Into<String>, v: impl Into<String>) -> Self {
        Self::append(Some(self), key, Some(TagValue::String(v.into())))
    }

    pub fn tag_float(&self, key: impl Into<String>, v: f64) -> Self {
        Self::append(Some(self), key, Some(TagValue::Float(v)))
    }

    /// Key of the newest entry.
    pub fn key(&self) -> &str {
        &self.node.key
    }

    /// Value of the newest entry.
    pub fn value(&self) -> Option<&TagValue> {
        self.node.value.as_ref()
    }

    /// The chain without its newest entry.
    pub fn parent(&self) -> Option<&Tags> {
        self.node.parent.as_ref()
    }

    /// Walks the chain from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &Tags> {
        std::iter::successors(Some(self), |t| t.parent())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<(&str, Option<&TagValue>)> {
        let mut out: Vec<_> = self.iter().map(|t| (t.key(), t.value())).collect();
        out.reverse();
        out
    }

    /// The newest value recorded for `key`, if any entry has that key.
    pub fn get(&self, key: &str) -> Option<Option<&TagValue>> {
        self.iter().find(|t| t.key() == key).map(Tags::value)
    }
}

impl fmt::Debug for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}

impl PartialEq for Tags {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node) || self.entries() == other.entries()
    }
}

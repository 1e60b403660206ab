//! Hierarchical log-source paths.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::safe_name::make_safe_name;

/// An immutable, singly linked hierarchical name such as `root/child/leaf`.
///
/// Each node stores one sanitized segment and a shared handle to its parent.
/// Because a node's name can never change, neither can the names of its
/// ancestors, so the canonical string is computed once and cached.
///
/// Cloning a `Path` clones a reference-counted handle; the chain itself is
/// shared.
#[derive(Clone)]
pub struct Path {
    node: Arc<PathNode>,
}

struct PathNode {
    name: String,
    parent: Option<Path>,
    rendered: OnceLock<String>,
}

// Unlinks the chain one node at a time; the default recursive drop
// overflows the stack on deep paths.
impl Drop for PathNode {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(path) = next {
            next = match Arc::try_unwrap(path.node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

impl Path {
    /// Creates a root path. The name is cleaned of unsafe characters.
    pub fn new(name: &str) -> Self {
        Self::with_parent(make_safe_name(name).into_owned(), None)
    }

    fn with_parent(name: String, parent: Option<Path>) -> Self {
        Self {
            node: Arc::new(PathNode {
                name,
                parent,
                rendered: OnceLock::new(),
            }),
        }
    }

    /// Creates a child of this path. An empty name is replaced by `-`.
    pub fn child(&self, name: &str) -> Self {
        let name = if name.is_empty() { "-" } else { name };
        Self::with_parent(make_safe_name(name).into_owned(), Some(self.clone()))
    }

    /// The tail segment, analogous to a file path's basename.
    pub fn name(&self) -> &str {
        &self.node.name
    }

    pub fn parent(&self) -> Option<&Path> {
        self.node.parent.as_ref()
    }

    /// Number of segments, counting the root.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Iterates from this node up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &Path> {
        std::iter::successors(Some(self), |p| p.parent())
    }

    /// Segment names from the root down to this node.
    pub fn segments(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ancestors().map(Path::name).collect();
        names.reverse();
        names
    }

    /// The canonical slash-delimited form, without a leading slash.
    ///
    /// Rendering starts from the nearest ancestor that already has its form
    /// cached, so deriving children one at a time stays linear.
    pub fn as_str(&self) -> &str {
        self.node.rendered.get_or_init(|| {
            let mut pending = Vec::new();
            let mut out = String::new();
            for p in self.ancestors() {
                if let Some(done) = p.node.rendered.get() {
                    out.push_str(done);
                    break;
                }
                pending.push(p.name());
            }
            for name in pending.into_iter().rev() {
                if !out.is_empty() {
                    out.push('/');
                }
                out.push_str(name);
            }
            out
        })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.as_str()).finish()
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node) || self.segments() == other.segments()
    }
}

impl Eq for Path {}

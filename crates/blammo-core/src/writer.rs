//! The event writer capability.

use std::sync::Arc;

use crate::types::Event;

/// Anything that can consume events.
///
/// Writers are shared between every logger derived from the same root, so
/// they must be usable from many threads at once. Writing never fails from
/// the caller's point of view; a writer that can fail deals with the failure
/// itself.
pub trait EventWriter: Send + Sync {
    fn write_event(&self, event: &Event<'_>);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullWriter;

impl EventWriter for NullWriter {
    fn write_event(&self, _event: &Event<'_>) {}
}

impl<W: EventWriter + ?Sized> EventWriter for Arc<W> {
    fn write_event(&self, event: &Event<'_>) {
        (**self).write_event(event)
    }
}

impl<W: EventWriter + ?Sized> EventWriter for Box<W> {
    fn write_event(&self, event: &Event<'_>) {
        (**self).write_event(event)
    }
}

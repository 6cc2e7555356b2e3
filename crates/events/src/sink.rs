//! Event sink abstraction and the process-wide emission hook.
//!
//! Catalog types never hold a sink. They call [`emit`], which forwards to the sink
//! scoped to the current thread by [`with_sink`], or to [`TracingSink`] when none is
//! scoped. This mirrors how `tracing` resolves its default subscriber.
//!
//! ## Usage Pattern
//!
//! ```ignore
//! let sink = Arc::new(RecordingSink::new());
//! let product = with_sink(sink.clone(), || Product::new("TV", "4K", 100.0, 1))?;
//! assert_eq!(sink.events().len(), 1);
//! ```
//!
//! Sinks observe; they cannot fail and cannot change the result of the operation
//! that emitted the event.

use std::cell::RefCell;
use std::sync::Arc;

use crate::event::{CatalogEvent, Event};

/// Receives catalog events.
pub trait EventSink {
    fn emit(&self, event: &CatalogEvent);
}

impl<S> EventSink for Arc<S>
where
    S: EventSink + ?Sized,
{
    fn emit(&self, event: &CatalogEvent) {
        (**self).emit(event)
    }
}

/// Default sink: one `info` line per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &CatalogEvent) {
        tracing::info!(event_type = event.event_type(), "{event}");
    }
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &CatalogEvent) {}
}

thread_local! {
    static SCOPED: RefCell<Option<Arc<dyn EventSink>>> = const { RefCell::new(None) };
}

/// Restores the previously scoped sink, also when the closure panics.
struct ScopeGuard {
    previous: Option<Arc<dyn EventSink>>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        SCOPED.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Run `f` with `sink` receiving every event emitted on this thread.
///
/// Scopes nest; the innermost sink wins.
pub fn with_sink<T>(sink: Arc<dyn EventSink>, f: impl FnOnce() -> T) -> T {
    let previous = SCOPED.with(|slot| slot.borrow_mut().replace(sink));
    let _guard = ScopeGuard { previous };
    f()
}

/// Emit an event to the current sink.
pub fn emit(event: CatalogEvent) {
    let scoped = SCOPED.with(|slot| slot.borrow().clone());
    match scoped {
        Some(sink) => sink.emit(&event),
        None => TracingSink.emit(&event),
    }
}

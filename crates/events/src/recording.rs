//! In-memory recording sink for tests/dev.

use std::sync::{Arc, Mutex};

use crate::event::{CatalogEvent, Event};
use crate::sink::{EventSink, with_sink};

/// Keeps every event it receives, in emission order.
///
/// - No IO
/// - A poisoned lock drops the event instead of panicking
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<CatalogEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<CatalogEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .map(|e| e.iter().map(Event::event_type).collect())
            .unwrap_or_default()
    }

    /// Rendered lines, as the tracing sink would print them.
    pub fn lines(&self) -> Vec<String> {
        self.events
            .lock()
            .map(|e| e.iter().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &CatalogEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Run `f` and return its output together with the events it emitted on this thread.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<CatalogEvent>) {
    let sink = Arc::new(RecordingSink::new());
    let out = with_sink(sink.clone(), f);
    (out, sink.events())
}

//! Catalog events and the sinks that observe them.
//!
//! Events are informational only: they describe what a catalog operation did and
//! never take part in its control flow.

pub mod event;
pub mod recording;
pub mod sink;

pub use event::{
    AdditionCompleted, CatalogEvent, Event, PriceChanged, PriceDecreaseDeclined, ProductAdded,
    ProductCreated,
};
pub use recording::{RecordingSink, capture};
pub use sink::{EventSink, NullSink, TracingSink, emit, with_sink};

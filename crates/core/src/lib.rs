//! `catalog-core` — shared building blocks for the catalog crates.
//!
//! Pure types only: the error taxonomy and the value-object marker.

pub mod error;
pub mod value_object;

pub use error::{CatalogError, CatalogResult};
pub use value_object::ValueObject;

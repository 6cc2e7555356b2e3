//! Bulk loading of categories and products from external data.

pub mod config;
pub mod loader;
pub mod source;

pub use config::LoaderConfig;
pub use loader::{load_categories, load_from_json_file};
pub use source::{CatalogSource, CategoryRecord, JsonFileSource, JsonTextSource};

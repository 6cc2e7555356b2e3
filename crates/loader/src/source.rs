//! Data sources for catalog loading.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use catalog_core::{CatalogError, CatalogResult};
use catalog_products::ProductRecord;

/// One category entry of a data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub description: String,
    pub products: Vec<ProductRecord>,
}

/// Anything that yields category records, in order.
///
/// The loader only sees records; how they are stored and decoded is the source's
/// business.
pub trait CatalogSource {
    fn read_records(&self) -> CatalogResult<Vec<CategoryRecord>>;
}

impl<S> CatalogSource for &S
where
    S: CatalogSource + ?Sized,
{
    fn read_records(&self) -> CatalogResult<Vec<CategoryRecord>> {
        (**self).read_records()
    }
}

/// A JSON file holding an array of category records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn read_records(&self) -> CatalogResult<Vec<CategoryRecord>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::source_not_found(&self.path),
            _ => CatalogError::source_unreadable(&self.path, e.to_string()),
        })?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "read catalog source");
        parse_records(&text)
    }
}

/// In-memory JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTextSource {
    text: String,
}

impl JsonTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl CatalogSource for JsonTextSource {
    fn read_records(&self) -> CatalogResult<Vec<CategoryRecord>> {
        parse_records(&self.text)
    }
}

fn parse_records(text: &str) -> CatalogResult<Vec<CategoryRecord>> {
    serde_json::from_str(text).map_err(|e| CatalogError::malformed(e.to_string()))
}

//! Loader configuration from the process environment.

use std::path::PathBuf;

/// Environment variable naming the catalog data file.
pub const DATA_PATH_ENV: &str = "CATALOG_DATA_PATH";

/// Used when `CATALOG_DATA_PATH` is not set.
pub const DEFAULT_DATA_PATH: &str = "data/products.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub data_path: PathBuf,
}

impl LoaderConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Read `CATALOG_DATA_PATH`, falling back to `data/products.json`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DATA_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            Some(path) => Self::new(path),
            None => {
                tracing::warn!("{DATA_PATH_ENV} not set; using default {DEFAULT_DATA_PATH}");
                Self::default()
            }
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

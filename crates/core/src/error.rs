//! Catalog error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Every variant is a local, synchronous failure raised where the rule is violated.
/// Nothing here is retried; callers receive the error as-is.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// A product was constructed with zero quantity.
    #[error("invalid quantity: product `{product}` cannot be created with zero quantity")]
    InvalidQuantity { product: String },

    /// A price was zero, negative or not a finite number.
    #[error("invalid price: {price} (price must be greater than zero)")]
    InvalidPrice { price: f64 },

    /// Two products of different variants were combined.
    #[error("incompatible types: cannot combine {left} with {right}")]
    IncompatibleType {
        left: &'static str,
        right: &'static str,
    },

    /// A value that does not describe a product was added to a category.
    #[error("invalid product type: expected a product, found {found}")]
    InvalidProductType { found: String },

    /// A zero-quantity product was offered to a category.
    #[error("zero quantity: product `{product}` cannot be added to a category")]
    ZeroQuantity { product: String },

    /// The external data source does not exist.
    #[error("source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The external data source exists but could not be read.
    #[error("source unreadable: {}: {reason}", path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    /// A source record is structurally invalid (missing or mistyped fields).
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

impl CatalogError {
    pub fn invalid_quantity(product: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            product: product.into(),
        }
    }

    pub fn invalid_price(price: f64) -> Self {
        Self::InvalidPrice { price }
    }

    pub fn incompatible(left: &'static str, right: &'static str) -> Self {
        Self::IncompatibleType { left, right }
    }

    pub fn invalid_product_type(found: impl Into<String>) -> Self {
        Self::InvalidProductType {
            found: found.into(),
        }
    }

    pub fn zero_quantity(product: impl Into<String>) -> Self {
        Self::ZeroQuantity {
            product: product.into(),
        }
    }

    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    pub fn source_unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRecord(msg.into())
    }
}

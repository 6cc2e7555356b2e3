use serde::Serialize;

use catalog_core::{CatalogError, CatalogResult, ValueObject};

/// Unit price in roubles. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> CatalogResult<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(CatalogError::invalid_price(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

/// Shortest round-trip form of the value: whole prices keep one decimal (`100.0`),
/// fractional ones print their digits (`99.5`). Magnitudes from `1e16` up and below
/// `1e-4` switch to exponent form (`1e16`, `1e-5`).
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

//! Untyped product records, as they appear in external data.

use serde::{Deserialize, Serialize};

use catalog_core::{CatalogError, CatalogResult};

use crate::product::Product;

/// One product entry of a data source. Always maps to the base `Product` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
}

impl ProductRecord {
    /// Decode a record from a JSON value.
    ///
    /// Non-objects are not products at all (`InvalidProductType`); objects with
    /// missing or mistyped fields are `MalformedRecord`.
    pub fn from_value(value: &serde_json::Value) -> CatalogResult<Self> {
        if !value.is_object() {
            return Err(CatalogError::invalid_product_type(json_kind(value)));
        }
        Self::deserialize(value).map_err(|e| CatalogError::malformed(e.to_string()))
    }

    pub fn into_product(self) -> CatalogResult<Product> {
        Product::new(self.name, self.description, self.price, self.quantity)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

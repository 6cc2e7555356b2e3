use catalog_core::{CatalogError, CatalogResult};
use catalog_events::{CatalogEvent, emit};

use crate::counters;
use crate::product::Product;
use crate::record::ProductRecord;

/// An ordered group of products.
///
/// The category owns its products; they keep insertion order and can be addressed
/// by position. A category never holds a zero-quantity product, neither from its
/// initial list nor from later additions.
///
/// Not `Clone`: every category is counted once, at construction.
#[derive(Debug, PartialEq)]
pub struct Category {
    name: String,
    description: String,
    products: Vec<Product>,
}

impl Category {
    /// Build a category from an initial product list and register it in the
    /// global counters.
    ///
    /// Fails with `ZeroQuantity` if any product is out of stock; nothing is counted
    /// in that case.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        products: Vec<Product>,
    ) -> CatalogResult<Self> {
        if let Some(empty) = products.iter().find(|p| p.quantity() == 0) {
            return Err(CatalogError::zero_quantity(empty.name()));
        }

        let category = Self {
            name: name.into(),
            description: description.into(),
            products,
        };
        counters::register_category(category.products.len());
        tracing::debug!(
            category = %category.name,
            products = category.products.len(),
            "category created"
        );
        Ok(category)
    }

    /// A category without products.
    pub fn empty(name: impl Into<String>, description: impl Into<String>) -> Self {
        let category = Self {
            name: name.into(),
            description: description.into(),
            products: Vec::new(),
        };
        counters::register_category(0);
        tracing::debug!(category = %category.name, "category created");
        category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Append a product.
    pub fn add_product(&mut self, product: Product) -> CatalogResult<()> {
        if product.quantity() == 0 {
            return Err(CatalogError::zero_quantity(product.name()));
        }

        let product_name = product.name().to_string();
        self.products.push(product);
        counters::register_product();

        emit(CatalogEvent::product_added(&self.name, product_name));
        emit(CatalogEvent::addition_completed(&self.name));
        Ok(())
    }

    /// Append a product described by untyped JSON.
    pub fn add_record(&mut self, value: &serde_json::Value) -> CatalogResult<()> {
        let product = ProductRecord::from_value(value)?.into_product()?;
        self.add_product(product)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Units in stock across all products.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity())).sum()
    }

    /// One rendered line per product.
    pub fn products_text(&self) -> String {
        self.products
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Quantity-weighted mean unit price; 0.0 when nothing is in stock.
    pub fn average_price(&self) -> f64 {
        let total_quantity = self.total_quantity();
        if total_quantity == 0 {
            return 0.0;
        }
        let total_value: f64 = self.products.iter().map(Product::total_value).sum();
        total_value / total_quantity as f64
    }

    /// Products in insertion order. Each call starts over.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

impl<'a> IntoIterator for &'a Category {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, количество продуктов: {} шт.",
            self.name,
            self.total_quantity()
        )
    }
}

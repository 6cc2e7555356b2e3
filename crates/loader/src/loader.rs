use std::path::PathBuf;

use catalog_core::CatalogResult;
use catalog_products::{Category, Product};

use crate::source::{CatalogSource, CategoryRecord, JsonFileSource};

/// Build categories from every record of `source`, in source order.
///
/// All-or-nothing: the first failing record aborts the load and its error is
/// returned. Products are always the base variant.
pub fn load_categories<S>(source: &S) -> CatalogResult<Vec<Category>>
where
    S: CatalogSource + ?Sized,
{
    let records = source.read_records()?;
    let categories = records
        .into_iter()
        .map(build_category)
        .collect::<CatalogResult<Vec<_>>>()?;

    tracing::info!(
        categories = categories.len(),
        products = categories.iter().map(Category::len).sum::<usize>(),
        "catalog loaded"
    );
    Ok(categories)
}

/// Load a JSON catalog file.
pub fn load_from_json_file(path: impl Into<PathBuf>) -> CatalogResult<Vec<Category>> {
    load_categories(&JsonFileSource::new(path))
}

fn build_category(record: CategoryRecord) -> CatalogResult<Category> {
    // Build every product first so a bad product never yields a counted category.
    let products = record
        .products
        .into_iter()
        .map(|p| p.into_product())
        .collect::<CatalogResult<Vec<Product>>>()?;
    Category::new(record.name, record.description, products)
}

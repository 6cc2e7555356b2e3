//! Catalog domain module.
//!
//! Products (with their Smartphone and LawnGrass variants), categories, the
//! confirmation-gated price workflow and the process-wide counters. Pure domain
//! logic: the only IO is the optional interactive confirmation provider.

pub mod category;
pub mod confirmation;
pub mod counters;
pub mod price;
pub mod product;
pub mod record;

pub use category::Category;
pub use confirmation::{PRICE_DECREASE_PROMPT, PriceConfirmation, PromptConfirmation};
pub use counters::{CounterSnapshot, reset_counters, snapshot, total_categories, total_products};
pub use price::Price;
pub use product::{LawnGrassSpec, PriceUpdate, Product, ProductKind, SmartphoneSpec, Variant};
pub use record::ProductRecord;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - **informational**: emitting one never changes the outcome of the operation
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "catalog.product.created").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Event: ProductCreated (carries the constructor arguments).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub variant: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductAdded (a product joined a category).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub category: String,
    pub product: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: AdditionCompleted (the add-product step finished).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionCompleted {
    pub category: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PriceChanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChanged {
    pub product: String,
    pub old_price: f64,
    pub new_price: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: PriceDecreaseDeclined (confirmation answered "no").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceDecreaseDeclined {
    pub product: String,
    pub current_price: f64,
    pub requested_price: f64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogEvent {
    ProductCreated(ProductCreated),
    ProductAdded(ProductAdded),
    AdditionCompleted(AdditionCompleted),
    PriceChanged(PriceChanged),
    PriceDecreaseDeclined(PriceDecreaseDeclined),
}

impl CatalogEvent {
    pub fn product_created(
        variant: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self::ProductCreated(ProductCreated {
            variant: variant.into(),
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            occurred_at: Utc::now(),
        })
    }

    pub fn product_added(category: impl Into<String>, product: impl Into<String>) -> Self {
        Self::ProductAdded(ProductAdded {
            category: category.into(),
            product: product.into(),
            occurred_at: Utc::now(),
        })
    }

    pub fn addition_completed(category: impl Into<String>) -> Self {
        Self::AdditionCompleted(AdditionCompleted {
            category: category.into(),
            occurred_at: Utc::now(),
        })
    }

    pub fn price_changed(product: impl Into<String>, old_price: f64, new_price: f64) -> Self {
        Self::PriceChanged(PriceChanged {
            product: product.into(),
            old_price,
            new_price,
            occurred_at: Utc::now(),
        })
    }

    pub fn price_decrease_declined(
        product: impl Into<String>,
        current_price: f64,
        requested_price: f64,
    ) -> Self {
        Self::PriceDecreaseDeclined(PriceDecreaseDeclined {
            product: product.into(),
            current_price,
            requested_price,
            occurred_at: Utc::now(),
        })
    }
}

impl Event for CatalogEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::ProductCreated(_) => "catalog.product.created",
            CatalogEvent::ProductAdded(_) => "catalog.category.product_added",
            CatalogEvent::AdditionCompleted(_) => "catalog.category.addition_completed",
            CatalogEvent::PriceChanged(_) => "catalog.product.price_changed",
            CatalogEvent::PriceDecreaseDeclined(_) => "catalog.product.price_decrease_declined",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CatalogEvent::ProductCreated(e) => e.occurred_at,
            CatalogEvent::ProductAdded(e) => e.occurred_at,
            CatalogEvent::AdditionCompleted(e) => e.occurred_at,
            CatalogEvent::PriceChanged(e) => e.occurred_at,
            CatalogEvent::PriceDecreaseDeclined(e) => e.occurred_at,
        }
    }
}

/// Human-readable line for the event, as shown to shop operators.
impl core::fmt::Display for CatalogEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CatalogEvent::ProductCreated(e) => write!(
                f,
                "Создан объект класса {} с параметрами: ({:?}, {:?}, {:?}, {})",
                e.variant, e.name, e.description, e.price, e.quantity
            ),
            CatalogEvent::ProductAdded(e) => write!(f, "Товар {} успешно добавлен.", e.product),
            CatalogEvent::AdditionCompleted(_) => {
                write!(f, "Обработка добавления товара завершена.")
            }
            CatalogEvent::PriceChanged(e) => write!(
                f,
                "Цена товара {} изменена: {:?} -> {:?}",
                e.product, e.old_price, e.new_price
            ),
            CatalogEvent::PriceDecreaseDeclined(e) => write!(
                f,
                "Снижение цены товара {} отменено ({:?} остаётся вместо {:?})",
                e.product, e.current_price, e.requested_price
            ),
        }
    }
}

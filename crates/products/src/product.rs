use serde::{Deserialize, Serialize};

use catalog_core::{CatalogError, CatalogResult};
use catalog_events::{CatalogEvent, emit};

use crate::confirmation::{PRICE_DECREASE_PROMPT, PriceConfirmation};
use crate::price::Price;

/// Discriminator of the product family. `combine` only accepts equal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Product,
    Smartphone,
    LawnGrass,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Product => "Product",
            Variant::Smartphone => "Smartphone",
            Variant::LawnGrass => "LawnGrass",
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartphoneSpec {
    pub efficiency: String,
    pub model: String,
    /// Built-in storage, in gigabytes.
    pub memory: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawnGrassSpec {
    pub country: String,
    pub germination_period: String,
    pub color: String,
}

/// Variant-specific attributes. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductKind {
    Standard,
    Smartphone(SmartphoneSpec),
    LawnGrass(LawnGrassSpec),
}

impl ProductKind {
    pub fn variant(&self) -> Variant {
        match self {
            ProductKind::Standard => Variant::Product,
            ProductKind::Smartphone(_) => Variant::Smartphone,
            ProductKind::LawnGrass(_) => Variant::LawnGrass,
        }
    }
}

/// Outcome of [`Product::set_price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceUpdate {
    /// The new price is in effect.
    Applied,
    /// A decrease was not confirmed; the old price stays.
    Declined,
}

/// A priced, stocked catalog item.
///
/// Invariants:
/// - quantity is nonzero when the product is created
/// - price is always finite and > 0
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    name: String,
    description: String,
    price: Price,
    quantity: u32,
    kind: ProductKind,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> CatalogResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::Standard)
    }

    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
        spec: SmartphoneSpec,
    ) -> CatalogResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::Smartphone(spec))
    }

    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
        spec: LawnGrassSpec,
    ) -> CatalogResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::LawnGrass(spec))
    }

    /// Validate and build a product of any variant, then announce it.
    pub fn with_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: u32,
        kind: ProductKind,
    ) -> CatalogResult<Self> {
        let name = name.into();
        if quantity == 0 {
            return Err(CatalogError::invalid_quantity(name));
        }
        let price = Price::new(price)?;

        let product = Self {
            name,
            description: description.into(),
            price,
            quantity,
            kind,
        };

        emit(CatalogEvent::product_created(
            product.variant().as_str(),
            &product.name,
            &product.description,
            product.price.value(),
            product.quantity,
        ));

        Ok(product)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price.value()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn variant(&self) -> Variant {
        self.kind.variant()
    }

    /// Stock value: price × quantity.
    pub fn total_value(&self) -> f64 {
        self.price.value() * f64::from(self.quantity)
    }

    /// Change the price.
    ///
    /// A decrease is applied only if `confirmation` answers yes; it is asked exactly
    /// once. Raises and equal prices never consult it.
    pub fn set_price<C>(&mut self, value: f64, confirmation: &mut C) -> CatalogResult<PriceUpdate>
    where
        C: PriceConfirmation + ?Sized,
    {
        let new_price = Price::new(value)?;
        let old_price = self.price;

        if new_price < old_price && !confirmation.ask_yes_no(PRICE_DECREASE_PROMPT) {
            emit(CatalogEvent::price_decrease_declined(
                &self.name,
                old_price.value(),
                new_price.value(),
            ));
            return Ok(PriceUpdate::Declined);
        }

        self.price = new_price;
        emit(CatalogEvent::price_changed(
            &self.name,
            old_price.value(),
            new_price.value(),
        ));
        Ok(PriceUpdate::Applied)
    }

    /// Restock or sell out. Zero is allowed here; categories refuse such products.
    pub fn set_quantity(&mut self, quantity: u32) {
        tracing::debug!(product = %self.name, from = self.quantity, to = quantity, "quantity changed");
        self.quantity = quantity;
    }

    /// Combined stock value of two products of the same variant.
    pub fn combine(&self, other: &Product) -> CatalogResult<f64> {
        if self.variant() != other.variant() {
            return Err(CatalogError::incompatible(
                self.variant().as_str(),
                other.variant().as_str(),
            ));
        }
        Ok(self.total_value() + other.total_value())
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {} руб. Остаток: {} шт.",
            self.name, self.price, self.quantity
        )?;
        match &self.kind {
            ProductKind::Standard => Ok(()),
            ProductKind::Smartphone(s) => write!(f, " (Модель: {}, Цвет: {})", s.model, s.color),
            ProductKind::LawnGrass(g) => write!(f, " (Страна: {}, Цвет: {})", g.country, g.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_events::{Event, capture};

    /// Test double: fixed answer, counts how often it was asked.
    struct Scripted {
        answer: bool,
        calls: usize,
    }

    impl Scripted {
        fn answering(answer: bool) -> Self {
            Self { answer, calls: 0 }
        }
    }

    impl PriceConfirmation for Scripted {
        fn ask_yes_no(&mut self, prompt: &str) -> bool {
            assert_eq!(prompt, PRICE_DECREASE_PROMPT);
            self.calls += 1;
            self.answer
        }
    }

    fn test_product() -> Product {
        Product::new("Test Product", "Test Description", 100.0, 10).unwrap()
    }

    fn test_smartphone() -> Product {
        Product::smartphone(
            "iPhone",
            "Smartphone",
            1000.0,
            5,
            SmartphoneSpec {
                efficiency: "High".to_string(),
                model: "13 Pro".to_string(),
                memory: 256,
                color: "Black".to_string(),
            },
        )
        .unwrap()
    }

    fn test_lawn_grass() -> Product {
        Product::lawn_grass(
            "Grass",
            "Lawn",
            50.0,
            20,
            LawnGrassSpec {
                country: "USA".to_string(),
                germination_period: "2 weeks".to_string(),
                color: "Green".to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn new_product_keeps_given_fields() {
        let product = test_product();
        assert_eq!(product.name(), "Test Product");
        assert_eq!(product.description(), "Test Description");
        assert_eq!(product.price(), 100.0);
        assert_eq!(product.quantity(), 10);
        assert_eq!(product.variant(), Variant::Product);
    }

    #[test]
    fn zero_quantity_is_rejected_at_construction() {
        let err = Product::new("Empty", "Desc", 100.0, 0).unwrap_err();
        assert_eq!(err, CatalogError::invalid_quantity("Empty"));
    }

    #[test]
    fn non_positive_price_is_rejected_at_construction() {
        let err = Product::new("Free", "Desc", 0.0, 1).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice { .. }));
    }

    #[test]
    fn construction_emits_created_event_with_arguments() {
        let (product, events) = capture(|| Product::new("Test", "Desc", 100.0, 5));
        assert!(product.is_ok());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "catalog.product.created");
        assert_eq!(
            events[0].to_string(),
            "Создан объект класса Product с параметрами: (\"Test\", \"Desc\", 100.0, 5)"
        );
    }

    #[test]
    fn failed_construction_emits_nothing() {
        let (_, events) = capture(|| Product::new("Test", "Desc", 100.0, 0));
        assert!(events.is_empty());
    }

    #[test]
    fn set_price_rejects_negative_value_without_asking() {
        let mut product = test_product();
        let mut confirm = Scripted::answering(true);
        let err = product.set_price(-50.0, &mut confirm).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice { .. }));
        assert_eq!(confirm.calls, 0);
        assert_eq!(product.price(), 100.0);
    }

    #[test]
    fn price_decrease_confirmed_yes() {
        let mut product = test_product();
        let mut confirm = Scripted::answering(true);
        let update = product.set_price(90.0, &mut confirm).unwrap();
        assert_eq!(update, PriceUpdate::Applied);
        assert_eq!(product.price(), 90.0);
        assert_eq!(confirm.calls, 1);
    }

    #[test]
    fn price_decrease_confirmed_no() {
        let mut product = test_product();
        let mut confirm = Scripted::answering(false);
        let (update, events) = capture(|| product.set_price(90.0, &mut confirm));
        assert_eq!(update.unwrap(), PriceUpdate::Declined);
        assert_eq!(product.price(), 100.0);
        assert_eq!(confirm.calls, 1);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "catalog.product.price_decrease_declined");
    }

    #[test]
    fn price_increase_never_asks() {
        let mut product = test_product();
        let mut confirm = Scripted::answering(false);
        assert_eq!(product.set_price(150.0, &mut confirm).unwrap(), PriceUpdate::Applied);
        assert_eq!(product.set_price(150.0, &mut confirm).unwrap(), PriceUpdate::Applied);
        assert_eq!(product.price(), 150.0);
        assert_eq!(confirm.calls, 0);
    }

    #[test]
    fn set_price_accepts_closure_provider() {
        let mut product = test_product();
        let mut calls = 0;
        let mut confirm = |_: &str| {
            calls += 1;
            true
        };
        product.set_price(10.0, &mut confirm).unwrap();
        assert_eq!(calls, 1);
        assert_eq!(product.price(), 10.0);
    }

    #[test]
    fn display_representation() {
        assert_eq!(
            test_product().to_string(),
            "Test Product, 100.0 руб. Остаток: 10 шт."
        );
        assert_eq!(
            test_smartphone().to_string(),
            "iPhone, 1000.0 руб. Остаток: 5 шт. (Модель: 13 Pro, Цвет: Black)"
        );
        assert_eq!(
            test_lawn_grass().to_string(),
            "Grass, 50.0 руб. Остаток: 20 шт. (Страна: USA, Цвет: Green)"
        );
    }

    #[test]
    fn variant_fields_are_kept() {
        match test_smartphone().kind() {
            ProductKind::Smartphone(s) => {
                assert_eq!(s.model, "13 Pro");
                assert_eq!(s.memory, 256);
            }
            other => panic!("Expected Smartphone kind, got {other:?}"),
        }
        match test_lawn_grass().kind() {
            ProductKind::LawnGrass(g) => {
                assert_eq!(g.country, "USA");
                assert_eq!(g.germination_period, "2 weeks");
            }
            other => panic!("Expected LawnGrass kind, got {other:?}"),
        }
    }

    #[test]
    fn combine_same_variant_sums_stock_value() {
        let first = test_product();
        let second = Product::new("Test 2", "Desc", 200.0, 5).unwrap();
        assert_eq!(first.combine(&second).unwrap(), 2000.0);
    }

    #[test]
    fn combine_different_variants_fails() {
        let err = test_product().combine(&test_smartphone()).unwrap_err();
        assert_eq!(err, CatalogError::incompatible("Product", "Smartphone"));

        let err = test_smartphone().combine(&test_lawn_grass()).unwrap_err();
        assert!(matches!(err, CatalogError::IncompatibleType { .. }));
    }

    fn phone(quantity: u32, price: f64) -> CatalogResult<Product> {
        Product::smartphone(
            "Phone",
            "Desc",
            price,
            quantity,
            SmartphoneSpec {
                efficiency: "High".to_string(),
                model: "X".to_string(),
                memory: 128,
                color: "Black".to_string(),
            },
        )
    }

    fn grass(quantity: u32, price: f64) -> CatalogResult<Product> {
        Product::lawn_grass(
            "Grass",
            "Desc",
            price,
            quantity,
            LawnGrassSpec {
                country: "Russia".to_string(),
                germination_period: "7 days".to_string(),
                color: "Green".to_string(),
            },
        )
    }

    #[test]
    fn variants_reject_zero_quantity() {
        assert_eq!(phone(0, 1.0).unwrap_err(), CatalogError::invalid_quantity("Phone"));
        assert_eq!(grass(0, 1.0).unwrap_err(), CatalogError::invalid_quantity("Grass"));
    }

    #[test]
    fn variants_reject_non_positive_price() {
        assert!(matches!(phone(1, -1.0), Err(CatalogError::InvalidPrice { .. })));
        assert!(matches!(grass(1, 0.0), Err(CatalogError::InvalidPrice { .. })));
    }

    #[test]
    fn combine_same_variant_smartphones() {
        let first = phone(10, 100.0).unwrap();
        let second = phone(5, 200.0).unwrap();
        assert_eq!(first.combine(&second).unwrap(), 2000.0);

        let first = grass(4, 25.0).unwrap();
        let second = grass(2, 50.0).unwrap();
        assert_eq!(first.combine(&second).unwrap(), 200.0);
    }

    #[test]
    fn set_quantity_allows_selling_out() {
        let mut product = test_product();
        product.set_quantity(0);
        assert_eq!(product.quantity(), 0);
        assert_eq!(product.total_value(), 0.0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: valid arguments are stored exactly.
            #[test]
            fn construction_round_trips_fields(
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                price in 0.01f64..1_000_000.0,
                quantity in 1u32..100_000
            ) {
                let product = Product::new(name.clone(), "desc", price, quantity).unwrap();
                prop_assert_eq!(product.name(), name.as_str());
                prop_assert_eq!(product.price(), price);
                prop_assert_eq!(product.quantity(), quantity);
            }

            /// Property: a non-positive price is rejected whatever the provider says.
            #[test]
            fn non_positive_price_always_fails(
                value in -1_000_000.0f64..=0.0,
                answer in any::<bool>()
            ) {
                let mut product = Product::new("p", "d", 100.0, 1).unwrap();
                let mut confirm = Scripted::answering(answer);
                let err = product.set_price(value, &mut confirm).unwrap_err();
                prop_assert!(matches!(err, CatalogError::InvalidPrice { .. }), "unexpected error: {err:?}");
                prop_assert_eq!(confirm.calls, 0);
                prop_assert_eq!(product.price(), 100.0);
            }

            /// Property: decreases ask once and follow the answer; raises never ask.
            #[test]
            fn set_price_follows_confirmation(
                start in 1.0f64..10_000.0,
                next in 1.0f64..10_000.0,
                answer in any::<bool>()
            ) {
                let mut product = Product::new("p", "d", start, 1).unwrap();
                let mut confirm = Scripted::answering(answer);
                let update = product.set_price(next, &mut confirm).unwrap();

                if next < start {
                    prop_assert_eq!(confirm.calls, 1);
                    if answer {
                        prop_assert_eq!(update, PriceUpdate::Applied);
                        prop_assert_eq!(product.price(), next);
                    } else {
                        prop_assert_eq!(update, PriceUpdate::Declined);
                        prop_assert_eq!(product.price(), start);
                    }
                } else {
                    prop_assert_eq!(confirm.calls, 0);
                    prop_assert_eq!(update, PriceUpdate::Applied);
                    prop_assert_eq!(product.price(), next);
                }
            }
        }
    }
}

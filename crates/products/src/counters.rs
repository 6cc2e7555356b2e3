//! Process-wide catalog counters.
//!
//! Both counters only grow. `total_categories` counts every category ever built;
//! `total_products` counts every product slot ever filled, whether through a
//! category's initial list or `Category::add_product`.

use std::sync::atomic::{AtomicUsize, Ordering};

static TOTAL_CATEGORIES: AtomicUsize = AtomicUsize::new(0);
static TOTAL_PRODUCTS: AtomicUsize = AtomicUsize::new(0);

/// Point-in-time copy of both counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    pub categories: usize,
    pub products: usize,
}

pub fn total_categories() -> usize {
    TOTAL_CATEGORIES.load(Ordering::SeqCst)
}

pub fn total_products() -> usize {
    TOTAL_PRODUCTS.load(Ordering::SeqCst)
}

pub fn snapshot() -> CounterSnapshot {
    CounterSnapshot {
        categories: total_categories(),
        products: total_products(),
    }
}

/// Zero both counters. Test isolation only; production code never resets.
pub fn reset_counters() {
    TOTAL_CATEGORIES.store(0, Ordering::SeqCst);
    TOTAL_PRODUCTS.store(0, Ordering::SeqCst);
}

pub(crate) fn register_category(initial_products: usize) {
    TOTAL_CATEGORIES.fetch_add(1, Ordering::SeqCst);
    TOTAL_PRODUCTS.fetch_add(initial_products, Ordering::SeqCst);
}

pub(crate) fn register_product() {
    TOTAL_PRODUCTS.fetch_add(1, Ordering::SeqCst);
}

//! Value object trait: equality by value, not identity.
//!
//! Catalog items have no identity of their own; a price or a quantity is defined
//! entirely by its value.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one, build
/// a new one; constructors are where validation happens, so a value object that
/// exists is always valid.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A `Price` of
/// `"$3.75"` is the same price wherever it appears, while the items carrying
/// it keep their own identity (see [`crate::Entity`]).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price {
///     text: String,
///     amount: f64,
/// }
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

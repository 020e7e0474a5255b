//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// derive a new value from it (e.g. `Quality::increased`).
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Quality(i64);
///
/// impl ValueObject for Quality {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

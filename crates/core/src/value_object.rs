//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one (e.g. `Quantity::checked_add` returns a fresh
/// quantity rather than mutating in place).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

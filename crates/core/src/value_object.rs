//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// with the same values are the same value. Quantities, periods and date
/// windows are value objects; an `Ingredient` (edited over time, identity
/// fixed) is an entity.
///
/// To "modify" a value object, create a new one. Immutability is what makes
/// reconciliation reproducible: a historical window computed with last
/// quarter's yield settings stays valid after the settings change.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Ingredients, dishes and vendors are entities: their configuration can be
/// edited over time while identity stays fixed.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

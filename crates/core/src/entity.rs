//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Market entities are compared by identifier, never by their attribute values:
/// two items called "Peach Pie" at the same price are still two products.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when both values denote the same entity.
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

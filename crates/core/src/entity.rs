//! Entity trait: a record whose identity outlives changes to its attributes.

/// Entity marker + minimal interface.
///
/// A product renamed twice and repriced once is still the same product, because
/// its id never changes. Stores look entities up by [`Entity::id`] and must never
/// hand out the same id to two live entities.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Whether this entity carries the given identifier.
    fn has_id(&self, id: Self::Id) -> bool {
        self.id() == id
    }
}

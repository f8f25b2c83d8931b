//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is compared by identity, not by attribute values: two orders
/// with the same `OrderId` refer to the same order even if their snapshots
/// differ.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

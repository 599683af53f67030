//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities are domain objects whose identity outlives their mutable state.
/// Stock items qualify: an item's name never changes while its `sell_in` and
/// `quality` are rewritten every day.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

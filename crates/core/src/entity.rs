//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stock items keep their identifier for their whole lifetime; every other
/// attribute may be rewritten by the owning service.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

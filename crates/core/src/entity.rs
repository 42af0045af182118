//! Entity trait: identity vs. full equality.

/// A record stored in a [`UniqueList`](crate::UniqueList).
///
/// Two notions of sameness coexist:
///
/// - **Identity** (`is_same`): a weaker predicate used to detect logical
///   duplicates on insert/replace. No two elements of one collection may be
///   `is_same`.
/// - **Full equality** (`PartialEq`): every field matches. Used to locate the
///   exact element to remove or replace.
///
/// `is_same` must be symmetric and must hold whenever `==` holds.
pub trait Entity: Clone + PartialEq + core::fmt::Debug {
    /// Human-readable kind name, used in error messages and logs.
    const KIND: &'static str;

    /// Identity predicate.
    fn is_same(&self, other: &Self) -> bool;
}

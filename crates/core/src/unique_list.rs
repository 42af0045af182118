//! Ordered collection that rejects logical duplicates.
//!
//! `UniqueList<T>` keeps insertion order and guarantees that no two elements
//! satisfy [`Entity::is_same`]. Removal and replacement locate their target by
//! full equality.
//!
//! ## Sharing
//!
//! The backing vector lives behind an `Arc` and is copied on first write
//! (`Arc::make_mut`). Cloning a list is therefore O(1), and a clone is an
//! independent snapshot: later writes to either side never show through the other.

use std::sync::Arc;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub struct UniqueList<T> {
    items: Arc<Vec<T>>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
        }
    }
}

impl<T: Entity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from `items`, rejecting any `is_same` pair.
    pub fn from_vec(items: Vec<T>) -> DomainResult<Self> {
        ensure_unique(&items)?;
        Ok(Self {
            items: Arc::new(items),
        })
    }

    /// Whether some element has the same identity as `x`.
    pub fn contains(&self, x: &T) -> bool {
        self.items.iter().any(|e| e.is_same(x))
    }

    /// Append `x`.
    pub fn add(&mut self, x: T) -> DomainResult<()> {
        if self.contains(&x) {
            return Err(DomainError::duplicate(T::KIND));
        }
        Arc::make_mut(&mut self.items).push(x);
        Ok(())
    }

    /// Replace the element equal to `target` with `edited`, keeping its position.
    ///
    /// `edited` may share identity with `target` itself, but not with any other element.
    pub fn set(&mut self, target: &T, edited: T) -> DomainResult<()> {
        let index = self
            .items
            .iter()
            .position(|e| e == target)
            .ok_or(DomainError::not_found(T::KIND))?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.is_same(&edited));
        if collides {
            return Err(DomainError::duplicate(T::KIND));
        }

        Arc::make_mut(&mut self.items)[index] = edited;
        Ok(())
    }

    /// Remove the first element equal to `x`.
    pub fn remove(&mut self, x: &T) -> DomainResult<()> {
        let index = self
            .items
            .iter()
            .position(|e| e == x)
            .ok_or(DomainError::not_found(T::KIND))?;
        Arc::make_mut(&mut self.items).remove(index);
        Ok(())
    }

    /// Replace the whole backing sequence. Nothing changes if `items` is not unique.
    pub fn replace_all(&mut self, items: Vec<T>) -> DomainResult<()> {
        ensure_unique(&items)?;
        self.items = Arc::new(items);
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `self` and `other` still share the same backing storage.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<'a, T: Entity> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn ensure_unique<T: Entity>(items: &[T]) -> DomainResult<()> {
    for (i, a) in items.iter().enumerate() {
        if items[i + 1..].iter().any(|b| a.is_same(b)) {
            return Err(DomainError::duplicate(T::KIND));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Identity is the `key`; `note` only participates in full equality.
    #[derive(Debug, Clone, PartialEq)]
    struct Dish {
        key: &'static str,
        note: &'static str,
    }

    impl Entity for Dish {
        const KIND: &'static str = "dish";

        fn is_same(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    fn dish(key: &'static str, note: &'static str) -> Dish {
        Dish { key, note }
    }

    #[test]
    fn add_appends_in_order() {
        let mut list = UniqueList::new();
        list.add(dish("fries", "")).unwrap();
        list.add(dish("soda", "")).unwrap();

        let keys: Vec<_> = list.iter().map(|d| d.key).collect();
        assert_eq!(keys, vec!["fries", "soda"]);
        assert!(list.contains(&dish("fries", "different note")));
    }

    #[test]
    fn add_rejects_same_identity_and_leaves_list_unchanged() {
        let mut list = UniqueList::new();
        list.add(dish("fries", "large")).unwrap();
        let before = list.clone();

        let err = list.add(dish("fries", "small")).unwrap_err();
        assert_eq!(err, DomainError::duplicate("dish"));
        assert_eq!(list, before);
    }

    #[test]
    fn remove_requires_full_equality() {
        let mut list = UniqueList::new();
        list.add(dish("fries", "large")).unwrap();

        let err = list.remove(&dish("fries", "small")).unwrap_err();
        assert_eq!(err, DomainError::not_found("dish"));
        assert_eq!(list.len(), 1);

        list.remove(&dish("fries", "large")).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn set_replaces_in_place() {
        let mut list = UniqueList::new();
        list.add(dish("fries", "")).unwrap();
        list.add(dish("soda", "")).unwrap();
        list.add(dish("burger", "")).unwrap();

        list.set(&dish("soda", ""), dish("cola", "")).unwrap();
        let keys: Vec<_> = list.iter().map(|d| d.key).collect();
        assert_eq!(keys, vec!["fries", "cola", "burger"]);
    }

    #[test]
    fn set_allows_keeping_own_identity() {
        let mut list = UniqueList::new();
        list.add(dish("fries", "small")).unwrap();
        list.set(&dish("fries", "small"), dish("fries", "large")).unwrap();
        assert_eq!(list.as_slice(), &[dish("fries", "large")]);
    }

    #[test]
    fn set_rejects_collision_with_another_element() {
        let mut list = UniqueList::new();
        list.add(dish("fries", "")).unwrap();
        list.add(dish("soda", "")).unwrap();
        let before = list.clone();

        let err = list.set(&dish("soda", ""), dish("fries", "other")).unwrap_err();
        assert_eq!(err, DomainError::duplicate("dish"));
        assert_eq!(list, before);
    }

    #[test]
    fn set_rejects_missing_target() {
        let mut list = UniqueList::new();
        list.add(dish("fries", "")).unwrap();

        let err = list.set(&dish("fries", "other"), dish("soda", "")).unwrap_err();
        assert_eq!(err, DomainError::not_found("dish"));
    }

    #[test]
    fn replace_all_is_atomic() {
        let mut list = UniqueList::new();
        list.add(dish("fries", "")).unwrap();
        let before = list.clone();

        let err = list
            .replace_all(vec![dish("soda", ""), dish("burger", ""), dish("soda", "x")])
            .unwrap_err();
        assert_eq!(err, DomainError::duplicate("dish"));
        assert_eq!(list, before);

        list.replace_all(vec![dish("soda", ""), dish("burger", "")]).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn clones_are_independent_snapshots() {
        let mut live = UniqueList::new();
        live.add(dish("fries", "")).unwrap();

        let snapshot = live.clone();
        assert!(snapshot.shares_storage_with(&live));

        live.add(dish("soda", "")).unwrap();
        assert!(!snapshot.shares_storage_with(&live));
        assert_eq!(snapshot.as_slice(), &[dish("fries", "")]);
        assert_eq!(live.len(), 2);
    }

    #[test]
    fn failed_writes_do_not_break_sharing() {
        let mut live = UniqueList::new();
        live.add(dish("fries", "")).unwrap();
        let snapshot = live.clone();

        assert!(live.add(dish("fries", "again")).is_err());
        assert!(live.remove(&dish("soda", "")).is_err());
        assert!(snapshot.shares_storage_with(&live));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone, PartialEq)]
        struct Keyed(u8, u8);

        impl Entity for Keyed {
            const KIND: &'static str = "keyed";

            fn is_same(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: whatever sequence of adds is attempted, no two elements share identity,
            /// and every attempted key ends up contained exactly once.
            #[test]
            fn adds_never_produce_duplicates(pairs in prop::collection::vec((0u8..16, any::<u8>()), 0..64)) {
                let mut list = UniqueList::new();
                for (key, payload) in &pairs {
                    let _ = list.add(Keyed(*key, *payload));
                }

                for (i, a) in list.iter().enumerate() {
                    for b in list.iter().skip(i + 1) {
                        prop_assert!(!a.is_same(b));
                    }
                }
                for (key, _) in &pairs {
                    prop_assert_eq!(list.iter().filter(|e| e.0 == *key).count(), 1);
                }
            }
        }
    }
}

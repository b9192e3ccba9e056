//! Map - an unordered key-value association with an upsert entry protocol.
//!
//! # Entry Protocol
//!
//! [`Map::entry`] binds a handle to one key so "read or upsert" is a single
//! expression with no separate existence check:
//!
//! ```
//! use ferrule_collections::Map;
//! use ferrule_core::Maybe;
//!
//! let mut counts: Map<&str, u32> = Map::new();
//!
//! for word in ["a", "b", "a"] {
//!     counts.entry(word).and_modify(|n| *n += 1).or_insert(1);
//! }
//!
//! assert_eq!(counts.get("a"), Maybe::Some(&2));
//! assert_eq!(counts.get("b"), Maybe::Some(&1));
//! ```
//!
//! # Snapshots
//!
//! `keys`, `values`, `key_value_pairs` and `iter` each take a snapshot.
//! Within one snapshot the order is consistent; it is unrelated to
//! insertion order and may differ between calls.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

use ferrule_core::Maybe;

use crate::Vector;
use crate::cursor::{Drain, IntoCursor};

/// An unordered map with unique keys.
pub struct Map<K, V> {
    inner: HashMap<K, V>,
}

impl<K, V> Map<K, V> {
    /// Creates an empty map. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    /// Creates an empty map with room for at least `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Snapshot of the keys.
    pub fn keys(&self) -> Vector<&K> {
        self.inner.keys().collect()
    }

    /// Snapshot of the values.
    pub fn values(&self) -> Vector<&V> {
        self.inner.values().collect()
    }

    /// Snapshot of the entries as `(key, value)` pairs.
    pub fn key_value_pairs(&self) -> Vector<(&K, &V)> {
        self.inner.iter().collect()
    }

    /// Returns a cursor over a snapshot of the entries.
    pub fn iter(&self) -> IntoCursor<(&K, &V)> {
        self.key_value_pairs().into_cursor()
    }

    /// Calls `visit` on each entry until it returns `false`.
    ///
    /// Entries visited before the stop have been fully processed, including
    /// any change made through the `&mut V`.
    pub fn for_each(&mut self, mut visit: impl FnMut(&K, &mut V) -> bool) {
        for (k, v) in self.inner.iter_mut() {
            if !visit(k, v) {
                break;
            }
        }
    }

    /// Empties the map and returns a cursor over what it held.
    ///
    /// The map is already empty when this returns, before the first
    /// element is pulled.
    pub fn drain(&mut self) -> Drain<(K, V)> {
        let pairs: Vector<(K, V)> = self.inner.drain().collect();
        pairs.into_cursor()
    }
}

impl<K: Eq + Hash, V> Map<K, V> {
    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// The stored key is not updated when the key was already present.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Maybe<V> {
        self.inner.insert(key, value).into()
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Maybe<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key).into()
    }

    /// Returns the value stored under `key`, mutably.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Maybe<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_mut(key).into()
    }

    /// Returns the stored key together with its value.
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Maybe<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_key_value(key).into()
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Removes `key`, returning its value.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Maybe<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key).into()
    }

    /// Returns the entry for `key`.
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        match self.inner.entry(key) {
            hash_map::Entry::Occupied(inner) => Entry::Occupied(OccupiedEntry { inner }),
            hash_map::Entry::Vacant(inner) => Entry::Vacant(VacantEntry { inner }),
        }
    }
}

// ============================================================================
// Entry API
// ============================================================================

/// A handle to one key of a [`Map`], present or not.
pub enum Entry<'a, K, V> {
    /// The key is present.
    Occupied(OccupiedEntry<'a, K, V>),
    /// The key is absent.
    Vacant(VacantEntry<'a, K, V>),
}

/// An entry whose key is present.
pub struct OccupiedEntry<'a, K, V> {
    inner: hash_map::OccupiedEntry<'a, K, V>,
}

/// An entry whose key is absent.
pub struct VacantEntry<'a, K, V> {
    inner: hash_map::VacantEntry<'a, K, V>,
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Returns the entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(e) => e.key(),
            Entry::Vacant(e) => e.key(),
        }
    }

    /// Modifies the value in place if the key is present.
    ///
    /// Returns the entry so an `or_*` call can follow.
    pub fn and_modify(mut self, f: impl FnOnce(&mut V)) -> Self {
        if let Entry::Occupied(ref mut e) = self {
            f(e.get_mut());
        }
        self
    }

    /// Inserts `default` if the key is absent, then returns the resident
    /// value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(default),
        }
    }

    /// Inserts the result of `f` if the key is absent. `f` is only called
    /// in that case.
    pub fn or_insert_with(self, f: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(f()),
        }
    }

    /// Inserts `f(&key)` if the key is absent.
    pub fn or_insert_with_key(self, f: impl FnOnce(&K) -> V) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                let value = f(e.key());
                e.insert(value)
            }
        }
    }

    /// Inserts `V::default()` if the key is absent.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Returns the key.
    #[inline]
    pub fn key(&self) -> &K {
        self.inner.key()
    }

    /// Returns the value.
    #[inline]
    pub fn get(&self) -> &V {
        self.inner.get()
    }

    /// Returns the value, mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut V {
        self.inner.get_mut()
    }

    /// Converts into a reference tied to the map's borrow.
    #[inline]
    pub fn into_mut(self) -> &'a mut V {
        self.inner.into_mut()
    }

    /// Replaces the value, returning the old one.
    #[inline]
    pub fn insert(&mut self, value: V) -> V {
        self.inner.insert(value)
    }

    /// Removes the entry from the map and returns its value.
    #[inline]
    pub fn remove(self) -> V {
        self.inner.remove()
    }
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Returns the key that would be inserted.
    #[inline]
    pub fn key(&self) -> &K {
        self.inner.key()
    }

    /// Takes the key back without inserting.
    #[inline]
    pub fn into_key(self) -> K {
        self.inner.into_key()
    }

    /// Inserts `value` and returns a reference to it.
    #[inline]
    pub fn insert(self, value: V) -> &'a mut V {
        self.inner.insert(value)
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Entry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Occupied(e) => f.debug_tuple("Occupied").field(e.key()).finish(),
            Entry::Vacant(e) => f.debug_tuple("Vacant").field(e.key()).finish(),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<K, V> Default for Map<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Map<K, V> {}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for Map<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrule_core::Cursor;
    use std::cell::Cell;
    use std::collections::HashSet;

    // ========================================================================
    // Insert / Get
    // ========================================================================

    #[test]
    fn insert_returns_previous() {
        let mut map = Map::new();
        assert_eq!(map.insert("k", 1), Maybe::None);
        assert_eq!(map.insert("k", 2), Maybe::Some(1));
        assert_eq!(map.get("k"), Maybe::Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn get_missing_is_none() {
        let map: Map<String, u8> = Map::new();
        assert_eq!(map.get("nope"), Maybe::None);
        assert!(!map.contains_key("nope"));
    }

    #[test]
    fn get_key_value_pairs_key_and_value() {
        let mut map = Map::new();
        map.insert(String::from("alpha"), 1);

        assert_eq!(
            map.get_key_value("alpha"),
            Maybe::Some((&String::from("alpha"), &1))
        );
        assert_eq!(map.get_key_value("beta"), Maybe::None);
    }

    #[test]
    fn get_mut_and_remove() {
        let mut map = Map::from([(1, 10), (2, 20)]);

        if let Maybe::Some(v) = map.get_mut(&1) {
            *v += 5;
        }
        assert_eq!(map.get(&1), Maybe::Some(&15));

        assert_eq!(map.remove(&2), Maybe::Some(20));
        assert_eq!(map.remove(&2), Maybe::None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut map = Map::from([(1, 1), (2, 2)]);
        map.clear();
        assert!(map.is_empty());
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    #[test]
    fn keys_values_pairs_agree() {
        let map = Map::from([("a", 1), ("b", 2), ("c", 3)]);

        let keys: HashSet<_> = map.keys().into_iter().copied().collect();
        assert_eq!(keys, HashSet::from(["a", "b", "c"]));

        let mut values: Vec<_> = map.values().into_iter().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3]);

        for (k, v) in map.key_value_pairs() {
            assert_eq!(map.get(k), Maybe::Some(v));
        }
    }

    #[test]
    fn iter_covers_every_entry() {
        let map = Map::from([(1, 'a'), (2, 'b')]);
        let mut cursor = map.iter();
        let mut seen = Vec::new();
        while let Maybe::Some((k, v)) = cursor.next() {
            seen.push((*k, *v));
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![(1, 'a'), (2, 'b')]);
        assert_eq!(cursor.next(), Maybe::None);
    }

    // ========================================================================
    // ForEach / Drain
    // ========================================================================

    #[test]
    fn for_each_visits_all_and_mutates() {
        let mut map = Map::from([(1, 1), (2, 2), (3, 3)]);
        let mut visits = 0;
        map.for_each(|_, v| {
            *v *= 10;
            visits += 1;
            true
        });

        assert_eq!(visits, 3);
        let mut values: Vec<_> = map.values().into_iter().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![10, 20, 30]);
    }

    #[test]
    fn for_each_stops_early() {
        let mut map: Map<u32, u32> = (0..10).map(|i| (i, 0)).collect();
        let visits = Cell::new(0);
        map.for_each(|_, v| {
            *v = 1;
            visits.set(visits.get() + 1);
            visits.get() < 3
        });

        assert_eq!(visits.get(), 3);
        let touched = map.values().into_iter().filter(|v| **v == 1).count();
        assert_eq!(touched, 3);
    }

    #[test]
    fn drain_empties_before_first_pull() {
        let mut map = Map::from([("x", 1), ("y", 2)]);
        let drained = map.drain();

        assert!(map.is_empty());
        assert_eq!(drained.len(), 2);

        let pairs: HashSet<_> = drained.into_iter().collect();
        assert_eq!(pairs, HashSet::from([("x", 1), ("y", 2)]));
    }

    #[test]
    fn drain_on_empty_map() {
        let mut map: Map<u8, u8> = Map::new();
        let mut drained = map.drain();
        assert_eq!(drained.next(), Maybe::None);
    }

    // ========================================================================
    // Entry API
    // ========================================================================

    #[test]
    fn entry_or_insert_vacant() {
        let mut map: Map<&str, String> = Map::new();
        let val = map.entry("k").or_insert("hello".into());
        assert_eq!(val, "hello");
        assert_eq!(map.get("k"), Maybe::Some(&"hello".to_string()));
    }

    #[test]
    fn entry_or_insert_occupied_keeps_existing() {
        let mut map = Map::from([("k", 1)]);
        assert_eq!(*map.entry("k").or_insert(99), 1);
    }

    #[test]
    fn entry_or_insert_with_is_lazy() {
        let mut map = Map::from([("k", 1)]);
        let called = Cell::new(false);

        map.entry("k").or_insert_with(|| {
            called.set(true);
            0
        });
        assert!(!called.get());

        map.entry("j").or_insert_with(|| {
            called.set(true);
            7
        });
        assert!(called.get());
        assert_eq!(map.get("j"), Maybe::Some(&7));
    }

    #[test]
    fn entry_or_insert_with_key_sees_key() {
        let mut map: Map<String, usize> = Map::new();
        let len = *map.entry("four".to_string()).or_insert_with_key(|k| k.len());
        assert_eq!(len, 4);
    }

    #[test]
    fn entry_or_default() {
        let mut map: Map<u8, Vec<u8>> = Map::new();
        map.entry(1).or_default().push(5);
        map.entry(1).or_default().push(6);
        assert_eq!(map.get(&1), Maybe::Some(&vec![5, 6]));
    }

    #[test]
    fn and_modify_then_or_insert_on_absent_key() {
        let mut map: Map<&str, i32> = Map::new();
        let called = Cell::new(false);

        map.entry("k")
            .and_modify(|v| {
                called.set(true);
                *v += 1;
            })
            .or_insert(10);

        assert!(!called.get());
        assert_eq!(map.get("k"), Maybe::Some(&10));
    }

    #[test]
    fn and_modify_then_or_insert_on_present_key() {
        let mut map = Map::from([("k", 1)]);
        map.entry("k").and_modify(|v| *v += 1).or_insert(10);
        assert_eq!(map.get("k"), Maybe::Some(&2));
    }

    #[test]
    fn entry_variants_and_key() {
        let mut map = Map::from([(1, "one")]);

        match map.entry(1) {
            Entry::Occupied(mut e) => {
                assert_eq!(*e.key(), 1);
                assert_eq!(e.insert("uno"), "one");
                assert_eq!(e.remove(), "uno");
            }
            Entry::Vacant(_) => panic!("expected occupied"),
        }
        assert!(map.is_empty());

        match map.entry(2) {
            Entry::Vacant(e) => assert_eq!(e.into_key(), 2),
            Entry::Occupied(_) => panic!("expected vacant"),
        }
        assert!(map.is_empty());

        assert_eq!(*map.entry(3).key(), 3);
    }
}

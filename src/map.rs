use derive_where::derive_where;
use index_list::{Index, IndexList};
use std::borrow::Borrow;
use std::collections::hash_map::Entry as StdEntry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::mem;

use crate::iter::{Iter, Keys, Values};
use crate::nullish::Nullish;

/// An insertion‑ordered hash map with a fluent convenience API.
///
/// A new key inserted with [`set`](Self::set) or [`insert`](Self::insert) is appended to the
/// logical end of the sequence. Overwriting an existing key only changes its value; its position
/// does not move. Removing a key unlinks it in O(1) time, and inserting it again later is a fresh
/// insertion that lands at the end.
///
/// Internally the map keeps a `HashMap<K, Index>` from each key to a slot inside an
/// `IndexList<(K, V)>`. The list is a doubly‑linked list laid out in a single slab, so entries do
/// not get their own heap allocation and removals from the middle do not shift anything.
///
/// Mutations that make sense to chain ([`set`](Self::set), [`clear`](Self::clear)) return
/// `&mut Self`. [`delete`](Self::delete) returns whether something was removed instead.
///
/// Debug assertions check that the hash index and the ordered list always have the same length.
#[derive_where(Default)]
pub struct OrderedMap<K, V> {
    map: HashMap<K, Index>,
    order: IndexList<(K, V)>,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            order: IndexList::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            order: IndexList::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        let Self { map, order } = self;
        debug_assert_eq!(map.len(), order.len());
        order.len()
    }

    /// Number of entries; same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        let Self { map, order } = self;
        debug_assert_eq!(map.is_empty(), order.is_empty());
        order.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Iterator over `(&K, &V)` in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.order)
    }

    /// Same as [`iter`](Self::iter).
    pub fn entries(&self) -> Iter<'_, K, V> {
        self.iter()
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// The oldest entry still in the map.
    pub fn first(&self) -> Option<(&K, &V)> {
        let (k, v) = self.order.get(self.order.first_index())?;
        Some((k, v))
    }

    /// The most recently inserted entry.
    pub fn last(&self) -> Option<(&K, &V)> {
        let (k, v) = self.order.get(self.order.last_index())?;
        Some((k, v))
    }

    /// Removes every entry and returns the map for chaining.
    pub fn clear(&mut self) -> &mut Self {
        let Self { map, order } = self;
        map.clear();
        order.clear();
        self
    }

    pub(crate) fn into_order(self) -> IndexList<(K, V)> {
        self.order
    }
}

impl<K: Eq + Hash, V> OrderedMap<K, V> {
    /// Builds a map from `(key, value)` pairs.
    ///
    /// A key that shows up more than once keeps the position of its first occurrence and the
    /// value of its last.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Clone,
    {
        entries.into_iter().collect()
    }

    /// Older name for [`from_entries`](Self::from_entries).
    pub fn of<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Clone,
    {
        Self::from_entries(entries)
    }

    /// Insert a key-value pair.
    /// - If the key is new: appends to the end; returns `None`.
    /// - If the key exists: replaces the value in-place; returns `Some(old_v)`.
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Clone,
    {
        let Self { map, order } = self;
        match map.entry(key) {
            StdEntry::Occupied(entry) => {
                let Some((_, slot)) = order.get_mut(*entry.get()) else {
                    unreachable!("hash index points at a vacant list slot");
                };
                Some(mem::replace(slot, value))
            }
            StdEntry::Vacant(entry) => {
                let idx = order.insert_last((entry.key().clone(), value));
                entry.insert(idx);
                None
            }
        }
    }

    /// Inserts or overwrites `key` and returns the map for chaining.
    pub fn set(&mut self, key: K, value: V) -> &mut Self
    where
        K: Clone,
    {
        self.insert(key, value);
        self
    }

    pub fn get<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        let Self { map, order } = self;
        let &idx = map.get(key)?;
        let (k, v) = order.get(idx)?;
        debug_assert!(*k.borrow() == *key);
        Some(v)
    }

    pub fn get_mut<Q: Eq + Hash + ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
    {
        let Self { map, order } = self;
        let &idx = map.get(key)?;
        let (k, v) = order.get_mut(idx)?;
        debug_assert!(*(*k).borrow() == *key);
        Some(v)
    }

    /// Returns the stored value, or `default` when the key is absent or its value is
    /// [nullish](Nullish).
    ///
    /// Only `None`-like values fall back: an empty string, `0` or `false` is returned as stored.
    pub fn get_or_default<'a, Q: Eq + Hash + ?Sized>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        V: Nullish,
    {
        match self.get(key) {
            Some(value) if !value.is_nullish() => value,
            _ => default,
        }
    }

    pub fn contains_key<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.map.contains_key(key)
    }

    pub fn has<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.contains_key(key)
    }

    pub fn is_missing<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        !self.has(key)
    }

    #[deprecated(note = "use `is_missing` instead")]
    pub fn missing<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        tracing::warn!(
            target: "fluent_map::deprecation",
            "OrderedMap::missing is deprecated, use OrderedMap::is_missing instead"
        );
        self.is_missing(key)
    }

    /// Removes `key` and reports whether it was present.
    pub fn delete<Q: Eq + Hash + ?Sized>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes `key` if present and returns its value, in O(1).
    pub fn remove<Q: Eq + Hash + ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry<Q: Eq + Hash + ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
    {
        let Self { map, order } = self;
        let idx = map.remove(key)?;
        let (k_stored, v) = order.remove(idx)?;
        debug_assert!(*k_stored.borrow() == *key);
        Some((k_stored, v))
    }

    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let Self { map, order } = self;
        let (k, v) = order.remove_first()?;
        let removed = map.remove(&k);
        debug_assert!(removed.is_some());
        Some((k, v))
    }

    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let Self { map, order } = self;
        let (k, v) = order.remove_last()?;
        let removed = map.remove(&k);
        debug_assert!(removed.is_some());
        Some((k, v))
    }
}

impl<K: Clone + Eq + Hash, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same entries in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Clone + Eq + Hash, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_entries(entries)
    }
}

impl<K: Clone + Eq + Hash, V> From<Vec<(K, V)>> for OrderedMap<K, V> {
    fn from(entries: Vec<(K, V)>) -> Self {
        Self::from_entries(entries)
    }
}

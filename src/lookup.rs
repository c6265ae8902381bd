use std::hash::Hash;

use crate::map::OrderedMap;

/// What [`OrderedMap::contains`] looks for: a literal key, or any entry matching a predicate.
///
/// ```
/// use fluent_map::{Lookup, OrderedMap};
///
/// let map = OrderedMap::from([("a", 1), ("b", 2)]);
/// assert!(map.contains(Lookup::Key(&"a")));
/// assert!(map.includes(Lookup::Matching(&|_, v, _| *v > 1)));
/// ```
pub enum Lookup<'a, K, V> {
    Key(&'a K),
    Matching(&'a dyn Fn(&K, &V, &OrderedMap<K, V>) -> bool),
}

impl<K: Eq + Hash, V> OrderedMap<K, V> {
    pub fn contains(&self, lookup: Lookup<'_, K, V>) -> bool {
        match lookup {
            Lookup::Key(key) => self.contains_key(key),
            Lookup::Matching(predicate) => self.contains_matching(predicate),
        }
    }

    /// Same as [`contains`](Self::contains).
    pub fn includes(&self, lookup: Lookup<'_, K, V>) -> bool {
        self.contains(lookup)
    }

    /// True if `predicate(key, value, map)` holds for at least one entry.
    pub fn contains_matching<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&K, &V, &Self) -> bool,
    {
        self.iter().any(|(k, v)| predicate(k, v, self))
    }
}

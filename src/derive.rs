//! Operations that build new values out of a map without touching it.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::map::OrderedMap;

/// A keyed record: string keys in insertion order, as produced by [`OrderedMap::to_object`].
pub type Record<V> = OrderedMap<String, V>;

/// A key argument to [`OrderedMap::pick_nested`]: either one key or a nested list of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickKey<K> {
    One(K),
    Many(Vec<PickKey<K>>),
}

impl<K> PickKey<K> {
    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a K>) {
        match self {
            PickKey::One(key) => out.push(key),
            PickKey::Many(keys) => keys.iter().for_each(|key| key.flatten_into(out)),
        }
    }
}

impl<K: Eq + Hash, V> OrderedMap<K, V> {
    /// Applies `transform(key, value, map)` to every entry in insertion order.
    pub fn map<R, F>(&self, mut transform: F) -> Vec<R>
    where
        F: FnMut(&K, &V, &Self) -> R,
    {
        self.iter().map(|(k, v)| transform(k, v, self)).collect()
    }

    /// A new map holding the entries for which `predicate(key, value, map)` is true.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&K, &V, &Self) -> bool,
        K: Clone,
        V: Clone,
    {
        self.iter()
            .filter(|&(k, v)| predicate(k, v, self))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// A new map holding only the entries whose key is listed in `keys`.
    ///
    /// The result follows this map's insertion order, not the order of `keys`. Keys that are not
    /// present are ignored.
    pub fn pick<'q, I>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = &'q K>,
        K: Clone + 'q,
        V: Clone,
    {
        let wanted: HashSet<&K> = keys.into_iter().collect();
        self.filter(|k, _, _| wanted.contains(k))
    }

    /// Like [`pick`](Self::pick), with keys given as a tree that is flattened first.
    pub fn pick_nested(&self, keys: &[PickKey<K>]) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut flat = Vec::new();
        keys.iter().for_each(|key| key.flatten_into(&mut flat));
        self.pick(flat)
    }

    /// All entries as `(key, value)` pairs in insertion order.
    pub fn to_array(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// All entries as a [`Record`], with keys turned into strings.
    ///
    /// Distinct keys that print the same (`1` and `"1"`) collapse into one record entry: it
    /// keeps the position of the first and the value of the last.
    pub fn to_object(&self) -> Record<V>
    where
        K: Display,
        V: Clone,
    {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

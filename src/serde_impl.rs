//! Conversions between [`OrderedMap`] and serde data.
//!
//! A map serializes as a keyed record in insertion order. Deserialization accepts the three
//! shapes a map can be described by: nothing (`null`/unit), a sequence of `[key, value]` pairs,
//! or a keyed record. A flat sequence of scalars is rejected.

use serde::de::{self, DeserializeOwned, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::map::OrderedMap;

impl<K, V> Serialize for OrderedMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct EntriesVisitor<K, V> {
    marker: PhantomData<fn() -> OrderedMap<K, V>>,
}

impl<'de, K, V> Visitor<'de> for EntriesVisitor<K, V>
where
    K: Deserialize<'de> + Clone + Eq + Hash,
    V: Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null, a sequence of [key, value] pairs, or a keyed record")
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(OrderedMap::new())
    }

    fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(OrderedMap::new())
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut map = OrderedMap::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some((key, value)) = seq.next_element::<(K, V)>()? {
            map.set(key, value);
        }
        Ok(map)
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<K, V>()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + Clone + Eq + Hash,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EntriesVisitor {
            marker: PhantomData,
        })
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: DeserializeOwned + Clone + Eq + Hash,
    V: DeserializeOwned,
{
    /// Builds a map from an untyped JSON value.
    ///
    /// `null` gives an empty map, an array must contain only `[key, value]` pairs, and an
    /// object is read as a record whose keys are parsed into `K`.
    ///
    /// ```
    /// use fluent_map::{Error, OrderedMap};
    /// use serde_json::json;
    ///
    /// let users = OrderedMap::<u32, String>::from_json(json!([[1, "Marcus"], [2, "Supercharge"]]))?;
    /// assert_eq!(users.size(), 2);
    ///
    /// let flat = OrderedMap::<String, String>::from_json(json!(["key", "value"]));
    /// assert!(matches!(flat, Err(Error::InvalidArgument { .. })));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_json(value: Value) -> Result<Self> {
        Self::deserialize(value).map_err(|err| {
            tracing::debug!(%err, "rejected map input");
            Error::invalid_argument(err.to_string())
        })
    }

    /// Parses `text` as JSON and builds a map from it like [`from_json`](Self::from_json).
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| {
            tracing::debug!(%err, "rejected map input");
            Error::invalid_argument(err.to_string())
        })
    }
}

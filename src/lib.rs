//! An insertion-ordered hash map with a fluent convenience API.
//!
//! [`OrderedMap`] keeps keys unique and iterates them in the order they were first inserted.
//! On top of the usual map operations it offers functional derivations ([`OrderedMap::map`],
//! [`OrderedMap::filter`], [`OrderedMap::pick`]), membership queries that accept either a key or a
//! predicate ([`OrderedMap::contains`]), bulk extraction ([`OrderedMap::to_array`],
//! [`OrderedMap::to_object`]) and chainable mutation:
//!
//! ```
//! use fluent_map::OrderedMap;
//!
//! let mut cache = OrderedMap::new();
//! cache.set("user:1", "Marcus").set("user:2", "Supercharge");
//!
//! assert_eq!(cache.keys().copied().collect::<Vec<_>>(), ["user:1", "user:2"]);
//! assert!(cache.delete(&"user:1"));
//! assert!(cache.is_missing(&"user:1"));
//! ```
//!
//! Untyped input (absent, a pair sequence or a keyed record) goes through
//! [`OrderedMap::from_json`], the only fallible constructor.

mod derive;
mod error;
mod iter;
mod lookup;
mod map;
mod nullish;
mod serde_impl;

pub use derive::{PickKey, Record};
pub use error::{Error, Result};
pub use iter::{IntoIter, Iter, Keys, Values};
pub use lookup::Lookup;
pub use map::OrderedMap;
pub use nullish::Nullish;

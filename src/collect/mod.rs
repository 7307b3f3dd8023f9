//! The seam between collecting terminals and their target mappings.
//!
//! The `*_in` terminal operations on [`SequenceExt`][crate::sequence::SequenceExt]
//! are generic over the mapping they populate. Which structure a collection
//! lands in is stated by the caller as a type parameter rather than decided
//! by a runtime property of the stream:
//!
//! ```rust
//! use futures_lite::future::block_on;
//! use sequex::prelude::*;
//! use sequex::source;
//! use std::collections::BTreeMap;
//!
//! block_on(async {
//!     let sorted: BTreeMap<usize, String> = source::of_iter(["bravo", "al"])
//!         .try_to_map_in(|s| s.len(), |s| s.to_uppercase())
//!         .await
//!         .unwrap();
//!     assert_eq!(sorted[&2], "AL");
//! })
//! ```

use core::fmt;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use thiserror::Error;

/// Error returned by the `try_to_map` family when two elements produce equal
/// keys.
///
/// Carries the colliding key. The first occurrence stays in the partially
/// built mapping, which is discarded; nothing is silently overwritten.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("duplicate key in sequence: {0:?}")]
pub struct DuplicateKey<K: fmt::Debug>(pub K);

/// A mapping that collecting terminals can populate.
///
/// Implemented for [`HashMap`] and [`BTreeMap`]. Implement it for your own
/// map type to use it with `try_to_map_in` and `grouping_by_in`.
pub trait Mapping<K, V>: Default {
    /// Returns a mutable reference to the value stored for `key`, inserting
    /// `init()` first if the key is absent.
    fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V;

    /// Inserts `key -> value`, handing the key back if an equal key is
    /// already present.
    fn insert_unique(&mut self, key: K, value: V) -> Result<(), K>;
}

impl<K: Eq + Hash, V> Mapping<K, V> for HashMap<K, V> {
    fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        self.entry(key).or_insert_with(init)
    }

    fn insert_unique(&mut self, key: K, value: V) -> Result<(), K> {
        if self.contains_key(&key) {
            return Err(key);
        }
        self.insert(key, value);
        Ok(())
    }
}

impl<K: Ord, V> Mapping<K, V> for BTreeMap<K, V> {
    fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        self.entry(key).or_insert_with(init)
    }

    fn insert_unique(&mut self, key: K, value: V) -> Result<(), K> {
        if self.contains_key(&key) {
            return Err(key);
        }
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_unique_keeps_first() {
        let mut map = HashMap::new();
        assert_eq!(Mapping::insert_unique(&mut map, "a", 1), Ok(()));
        assert_eq!(Mapping::insert_unique(&mut map, "a", 2), Err("a"));
        assert_eq!(map["a"], 1);
    }

    #[test]
    fn entry_or_insert_with_reuses_slot() {
        let mut map = BTreeMap::new();
        *Mapping::entry_or_insert_with(&mut map, 1, Vec::new) = vec!["x"];
        Mapping::entry_or_insert_with(&mut map, 1, Vec::new).push("y");
        assert_eq!(map[&1], ["x", "y"]);
    }

    #[test]
    fn duplicate_key_display() {
        let err = DuplicateKey("shared");
        assert_eq!(err.to_string(), "duplicate key in sequence: \"shared\"");
    }
}

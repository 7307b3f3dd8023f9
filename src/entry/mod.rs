//! The pair-sequence surface.
//!
//! A pair sequence is any `Stream` whose items are `(key, value)` tuples.
//! [`EntrySequenceExt`] adds projections and per-component adapters on top,
//! plus terminals that collect the pairs into mappings. Pairs are plain
//! tuples: immutable, compared structurally.
//!
//! # Examples
//!
//! ```
//! use futures_lite::future::block_on;
//! use futures_lite::prelude::*;
//! use sequex::prelude::*;
//! use sequex::source;
//!
//! block_on(async {
//!     let names: Vec<_> = source::of_iter([(1, "one"), (2, "two")])
//!         .map_values(str::to_uppercase)
//!         .values()
//!         .collect()
//!         .await;
//!     assert_eq!(names, ["ONE", "TWO"]);
//! })
//! ```

use core::fmt;
use core::pin::pin;
use std::collections::HashMap;
use std::hash::Hash;

use futures_core::Stream;
use futures_lite::StreamExt;

use crate::collect::{DuplicateKey, Mapping};

mod filter_keys;
mod filter_values;
mod keys;
mod map_keys;
mod map_values;
mod values;

pub use filter_keys::FilterKeys;
pub use filter_values::FilterValues;
pub use keys::Keys;
pub use map_keys::MapKeys;
pub use map_values::MapValues;
pub use values::Values;

/// Extend streams of `(key, value)` pairs with per-component methods.
#[allow(async_fn_in_trait)]
pub trait EntrySequenceExt<K, V>: Stream<Item = (K, V)> {
    /// Drops the values, yielding only the keys.
    fn keys(self) -> Keys<Self>
    where
        Self: Sized,
    {
        Keys::new(self)
    }

    /// Drops the keys, yielding only the values.
    fn values(self) -> Values<Self>
    where
        Self: Sized,
    {
        Values::new(self)
    }

    /// Maps the key of each pair, leaving values untouched.
    fn map_keys<F, K2>(self, f: F) -> MapKeys<Self, F>
    where
        Self: Sized,
        F: FnMut(K) -> K2,
    {
        MapKeys::new(self, f)
    }

    /// Maps the value of each pair, leaving keys untouched.
    fn map_values<F, V2>(self, f: F) -> MapValues<Self, F>
    where
        Self: Sized,
        F: FnMut(V) -> V2,
    {
        MapValues::new(self, f)
    }

    /// Keeps only the pairs whose key passes the predicate.
    fn filter_keys<P>(self, predicate: P) -> FilterKeys<Self, P>
    where
        Self: Sized,
        P: FnMut(&K) -> bool,
    {
        FilterKeys::new(self, predicate)
    }

    /// Keeps only the pairs whose value passes the predicate.
    fn filter_values<P>(self, predicate: P) -> FilterValues<Self, P>
    where
        Self: Sized,
        P: FnMut(&V) -> bool,
    {
        FilterValues::new(self, predicate)
    }

    /// Collects the pairs into a [`HashMap`], failing with [`DuplicateKey`]
    /// if two pairs share a key.
    async fn try_into_map(self) -> Result<HashMap<K, V>, DuplicateKey<K>>
    where
        Self: Sized,
        K: Hash + Eq + fmt::Debug,
    {
        self.try_into_map_in().await
    }

    /// Collects the pairs into a mapping of the caller's choosing, failing
    /// with [`DuplicateKey`] if two pairs share a key.
    async fn try_into_map_in<M>(self) -> Result<M, DuplicateKey<K>>
    where
        Self: Sized,
        M: Mapping<K, V>,
        K: fmt::Debug,
    {
        let mut stream = pin!(self);
        let mut map = M::default();
        while let Some((key, value)) = stream.next().await {
            map.insert_unique(key, value).map_err(DuplicateKey)?;
        }
        Ok(map)
    }

    /// Collects the pairs into a multimap: values sharing a key accumulate
    /// in one group, in encounter order.
    async fn grouping(self) -> HashMap<K, Vec<V>>
    where
        Self: Sized,
        K: Hash + Eq,
    {
        let mut stream = pin!(self);
        let mut map: HashMap<K, Vec<V>> = HashMap::new();
        while let Some((key, value)) = stream.next().await {
            map.entry(key).or_default().push(value);
        }
        map
    }
}

impl<S, K, V> EntrySequenceExt<K, V> for S where S: Stream<Item = (K, V)> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source;
    use futures_lite::future::block_on;

    #[test]
    fn try_into_map_detects_shared_keys() {
        block_on(async {
            let err = source::of_iter([(1, "a"), (1, "b")]).try_into_map().await;
            assert_eq!(err, Err(DuplicateKey(1)));
        });
    }

    #[test]
    fn grouping_accumulates_shared_keys() {
        block_on(async {
            let groups = source::of_iter([(1, "a"), (2, "b"), (1, "c")])
                .grouping()
                .await;
            assert_eq!(groups[&1], ["a", "c"]);
            assert_eq!(groups[&2], ["b"]);
        });
    }
}

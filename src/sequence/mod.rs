//! The fluent sequence surface.
//!
//! [`SequenceExt`] extends every [`Stream`] with the adapters and terminal
//! operations this crate adds. Adapters return new named streams and move
//! `self`, so a transformed sequence can no longer be used on its own.
//! Terminal operations are `async fn`s that drive the sequence to the point
//! where their result is known and no further.
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
//!     let caps: Vec<String> = source::of_iter(["ant", "bee"])
//!         .prepend(["zero"])
//!         .map(|s| s.to_uppercase())
//!         .collect()
//!         .await;
//!     assert_eq!(caps, ["ZERO", "ANT", "BEE"]);
//! })
//! ```

use core::any::Any;
use core::fmt;
use core::fmt::Write;
use core::pin::pin;
use std::collections::HashMap;
use std::hash::Hash;

use futures_core::Stream;
use futures_lite::StreamExt;

use crate::collect::{DuplicateKey, Mapping};

mod append;
mod flat_collection;
mod into_sequence;
mod map_to_entry;
mod prepend;
mod select;

pub use append::Append;
pub use flat_collection::{FlatCollection, FlatMapToEntry};
pub use into_sequence::IntoSequence;
pub use map_to_entry::MapToEntry;
pub use prepend::Prepend;
pub use select::Select;

/// Extend `Stream` with fluent sequence methods.
///
/// The everyday adapters (`map`, `filter`, `take`, …) are deliberately not
/// redefined here; they come from [`futures_lite::StreamExt`] and compose
/// freely with these.
#[allow(async_fn_in_trait)]
pub trait SequenceExt: Stream {
    /// Keeps only the elements whose runtime type is `U`, downcast and
    /// unboxed, preserving order and multiplicity.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_lite::future::block_on;
    /// use futures_lite::prelude::*;
    /// use sequex::prelude::*;
    /// use sequex::source;
    /// use std::any::Any;
    ///
    /// block_on(async {
    ///     let mixed: Vec<Box<dyn Any>> = vec![Box::new(1u32), Box::new("s"), Box::new(2u32)];
    ///     let numbers: Vec<u32> = source::of_iter(mixed).select::<u32>().collect().await;
    ///     assert_eq!(numbers, [1, 2]);
    /// })
    /// ```
    fn select<U>(self) -> Select<Self, U>
    where
        Self: Stream<Item = Box<dyn Any>> + Sized,
        U: Any,
    {
        Select::new(self)
    }

    /// Maps each element to a collection and yields every produced element,
    /// concatenated in encounter order.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_lite::future::block_on;
    /// use futures_lite::prelude::*;
    /// use sequex::prelude::*;
    /// use sequex::source;
    ///
    /// block_on(async {
    ///     let flat: Vec<u8> = source::of_iter([vec![1, 2], vec![], vec![3]])
    ///         .flat_collection(|v| v)
    ///         .collect()
    ///         .await;
    ///     assert_eq!(flat, [1, 2, 3]);
    /// })
    /// ```
    fn flat_collection<F, C>(self, f: F) -> FlatCollection<Self, F, C>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> C,
        C: IntoIterator,
    {
        FlatCollection::new(self, f)
    }

    /// Pairs each element with a derived value, keeping the element itself
    /// as the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_lite::future::block_on;
    /// use futures_lite::prelude::*;
    /// use sequex::prelude::*;
    /// use sequex::source;
    ///
    /// block_on(async {
    ///     let pairs: Vec<_> = source::of_iter(["a", "bc"])
    ///         .map_to_entry(|s| s.len())
    ///         .collect()
    ///         .await;
    ///     assert_eq!(pairs, [("a", 1), ("bc", 2)]);
    /// })
    /// ```
    fn map_to_entry<FV, V>(self, value_fn: FV) -> MapToEntry<Self, fn(&Self::Item) -> Self::Item, FV>
    where
        Self: Sized,
        Self::Item: Clone,
        FV: FnMut(Self::Item) -> V,
    {
        MapToEntry::new(
            self,
            <Self::Item as Clone>::clone as fn(&Self::Item) -> Self::Item,
            value_fn,
        )
    }

    /// Pairs each element with a derived key and value.
    ///
    /// The key mapper runs first and sees the element by reference; the
    /// value mapper then consumes it. Both run lazily, once per element, in
    /// encounter order.
    fn map_to_entry_with<FK, FV, K, V>(self, key_fn: FK, value_fn: FV) -> MapToEntry<Self, FK, FV>
    where
        Self: Sized,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
    {
        MapToEntry::new(self, key_fn, value_fn)
    }

    /// Expands each element into all entries of its associated mapping,
    /// concatenated in encounter order.
    fn flat_map_to_entry<F, M, K, V>(self, f: F) -> FlatMapToEntry<Self, F, M>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> M,
        M: IntoIterator<Item = (K, V)>,
    {
        FlatCollection::new(self, f)
    }

    /// Yields this sequence followed by the given values.
    ///
    /// An empty collection of values leaves the sequence unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_lite::future::block_on;
    /// use futures_lite::prelude::*;
    /// use sequex::prelude::*;
    /// use sequex::source;
    ///
    /// block_on(async {
    ///     let all: Vec<_> = source::of(1).append([2, 3]).collect().await;
    ///     assert_eq!(all, [1, 2, 3]);
    /// })
    /// ```
    fn append<I>(self, values: I) -> Append<Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
    {
        Append::new(self, values.into_iter())
    }

    /// Yields the given values followed by this sequence.
    ///
    /// An empty collection of values leaves the sequence unchanged.
    fn prepend<I>(self, values: I) -> Prepend<Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
    {
        Prepend::new(self, values.into_iter())
    }

    /// Returns `true` if any element of the sequence equals `value`.
    ///
    /// Short-circuits on the first match, consuming only as many elements as
    /// necessary. `Option` items compare absent values the obvious way:
    /// `has(&None)` is `true` iff the sequence contains a `None`.
    async fn has(self, value: &Self::Item) -> bool
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        let mut stream = pin!(self);
        while let Some(item) = stream.next().await {
            if item == *value {
                return true;
            }
        }
        false
    }

    /// Concatenates the textual form of every element, in encounter order.
    ///
    /// An empty sequence yields the empty string.
    async fn joining(self) -> String
    where
        Self: Sized,
        Self::Item: fmt::Display,
    {
        join_inner(self, "", "", "").await
    }

    /// Concatenates the textual form of every element, separated by
    /// `delimiter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_lite::future::block_on;
    /// use sequex::prelude::*;
    /// use sequex::source;
    ///
    /// block_on(async {
    ///     assert_eq!(source::of_iter(["a", "b", "c"]).joining_with(",").await, "a,b,c");
    ///     assert_eq!(source::empty::<u8>().joining_with(",").await, "");
    /// })
    /// ```
    async fn joining_with(self, delimiter: &str) -> String
    where
        Self: Sized,
        Self::Item: fmt::Display,
    {
        join_inner(self, delimiter, "", "").await
    }

    /// Like [`joining_with`][SequenceExt::joining_with], wrapped in `prefix`
    /// and `suffix`. An empty sequence yields `prefix` + `suffix`.
    async fn joining_wrapped(self, delimiter: &str, prefix: &str, suffix: &str) -> String
    where
        Self: Sized,
        Self::Item: fmt::Display,
    {
        join_inner(self, delimiter, prefix, suffix).await
    }

    /// Builds a [`HashMap`] keyed by the elements themselves, with values
    /// derived by `value_fn`.
    ///
    /// Fails with [`DuplicateKey`] if the sequence contains two equal
    /// elements; nothing is silently overwritten.
    async fn try_to_map<FV, V>(
        self,
        value_fn: FV,
    ) -> Result<HashMap<Self::Item, V>, DuplicateKey<Self::Item>>
    where
        Self: Sized,
        Self::Item: Hash + Eq + fmt::Debug,
        FV: FnMut(&Self::Item) -> V,
    {
        let mut value_fn = value_fn;
        let mut stream = pin!(self);
        let mut map = HashMap::new();
        while let Some(item) = stream.next().await {
            let value = value_fn(&item);
            Mapping::insert_unique(&mut map, item, value).map_err(DuplicateKey)?;
        }
        Ok(map)
    }

    /// Builds a [`HashMap`] with keys and values derived from each element.
    ///
    /// Fails with [`DuplicateKey`] if two elements map to equal keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_lite::future::block_on;
    /// use sequex::prelude::*;
    /// use sequex::source;
    ///
    /// block_on(async {
    ///     let map = source::of_iter([(1, "one"), (2, "two")])
    ///         .try_to_map_with(|&(n, _)| n, |(_, name)| name)
    ///         .await
    ///         .unwrap();
    ///     assert_eq!(map[&2], "two");
    /// })
    /// ```
    async fn try_to_map_with<FK, FV, K, V>(
        self,
        key_fn: FK,
        value_fn: FV,
    ) -> Result<HashMap<K, V>, DuplicateKey<K>>
    where
        Self: Sized,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
        K: Hash + Eq + fmt::Debug,
    {
        self.try_to_map_in(key_fn, value_fn).await
    }

    /// Builds a mapping of the caller's choosing with keys and values
    /// derived from each element.
    ///
    /// The target structure is explicit caller intent, stated through the
    /// [`Mapping`] seam; fails with [`DuplicateKey`] on equal keys.
    async fn try_to_map_in<M, FK, FV, K, V>(
        self,
        key_fn: FK,
        value_fn: FV,
    ) -> Result<M, DuplicateKey<K>>
    where
        Self: Sized,
        M: Mapping<K, V>,
        FK: FnMut(&Self::Item) -> K,
        FV: FnMut(Self::Item) -> V,
        K: fmt::Debug,
    {
        let (mut key_fn, mut value_fn) = (key_fn, value_fn);
        let mut stream = pin!(self);
        let mut map = M::default();
        while let Some(item) = stream.next().await {
            let key = key_fn(&item);
            let value = value_fn(item);
            map.insert_unique(key, value).map_err(DuplicateKey)?;
        }
        Ok(map)
    }

    /// Partitions the elements by classifier value.
    ///
    /// Elements sharing a classifier output accumulate in one group, in
    /// input order — multiple hits are expected here, unlike the
    /// `try_to_map` family.
    ///
    /// # Examples
    ///
    /// ```
    /// use futures_lite::future::block_on;
    /// use sequex::prelude::*;
    /// use sequex::source;
    ///
    /// block_on(async {
    ///     let groups = source::of_iter(["ant", "bee", "cow"])
    ///         .grouping_by(|s| s.as_bytes()[0] == b'b')
    ///         .await;
    ///     assert_eq!(groups[&true], ["bee"]);
    ///     assert_eq!(groups[&false], ["ant", "cow"]);
    /// })
    /// ```
    async fn grouping_by<C, K>(self, classifier: C) -> HashMap<K, Vec<Self::Item>>
    where
        Self: Sized,
        C: FnMut(&Self::Item) -> K,
        K: Hash + Eq,
    {
        self.grouping_by_in(classifier, Vec::new, Vec::push).await
    }

    /// Partitions the elements by classifier value and reduces each group
    /// with `init` + `fold` instead of collecting it wholesale.
    async fn grouping_by_fold<C, K, I, F, A>(
        self,
        classifier: C,
        init: I,
        fold: F,
    ) -> HashMap<K, A>
    where
        Self: Sized,
        C: FnMut(&Self::Item) -> K,
        I: FnMut() -> A,
        F: FnMut(&mut A, Self::Item),
        K: Hash + Eq,
    {
        self.grouping_by_in(classifier, init, fold).await
    }

    /// Partitions into a mapping of the caller's choosing, reducing each
    /// group with `init` + `fold`.
    async fn grouping_by_in<M, C, K, I, F, A>(self, classifier: C, init: I, fold: F) -> M
    where
        Self: Sized,
        M: Mapping<K, A>,
        C: FnMut(&Self::Item) -> K,
        I: FnMut() -> A,
        F: FnMut(&mut A, Self::Item),
    {
        let (mut classifier, mut init, mut fold) = (classifier, init, fold);
        let mut stream = pin!(self);
        let mut map = M::default();
        while let Some(item) = stream.next().await {
            let key = classifier(&item);
            let group = map.entry_or_insert_with(key, &mut init);
            fold(group, item);
        }
        map
    }
}

impl<S> SequenceExt for S where S: Stream {}

async fn join_inner<S>(stream: S, delimiter: &str, prefix: &str, suffix: &str) -> String
where
    S: Stream,
    S::Item: fmt::Display,
{
    let mut stream = pin!(stream);
    let mut out = String::from(prefix);
    let mut first = true;
    while let Some(item) = stream.next().await {
        if !first {
            out.push_str(delimiter);
        }
        first = false;
        let _ = write!(out, "{item}");
    }
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source;
    use futures_lite::future::block_on;

    #[test]
    fn has_short_circuits() {
        block_on(async {
            // An infinite sequence terminates as soon as the match is found.
            assert!(source::iterate(0u64, |n| n + 1).has(&17).await);
        });
    }

    #[test]
    fn has_matches_absent_values() {
        block_on(async {
            assert!(source::of_iter([Some(1), None]).has(&None).await);
            assert!(!source::of_iter([Some(1), None]).has(&Some(2)).await);
        });
    }

    #[test]
    fn joining_variants() {
        block_on(async {
            assert_eq!(source::of_iter(["a", "b", "c"]).joining().await, "abc");
            assert_eq!(source::of_iter(["a", "b", "c"]).joining_with(",").await, "a,b,c");
            assert_eq!(
                source::of_iter(["a", "b", "c"]).joining_wrapped(",", "[", "]").await,
                "[a,b,c]"
            );
            assert_eq!(source::empty::<u8>().joining().await, "");
            assert_eq!(source::empty::<u8>().joining_wrapped(",", "[", "]").await, "[]");
        });
    }

    #[test]
    fn try_to_map_rejects_duplicates() {
        block_on(async {
            let err = source::of_iter([1, 2, 1]).try_to_map(|n| n * 10).await;
            assert_eq!(err, Err(DuplicateKey(1)));

            let map = source::of_iter([1, 2, 3]).try_to_map(|n| n * 10).await.unwrap();
            assert_eq!(map.len(), 3);
            assert_eq!(map[&2], 20);
        });
    }

    #[test]
    fn grouping_by_accumulates_in_order() {
        block_on(async {
            let groups = source::of_iter([1, 2, 3, 4]).grouping_by(|n| n % 2).await;
            assert_eq!(groups[&0], [2, 4]);
            assert_eq!(groups[&1], [1, 3]);
        });
    }

    #[test]
    fn grouping_by_fold_reduces_groups() {
        block_on(async {
            let sums = source::of_iter([1, 2, 3, 4])
                .grouping_by_fold(|n| n % 2, || 0, |sum, n| *sum += n)
                .await;
            assert_eq!(sums[&0], 6);
            assert_eq!(sums[&1], 4);
        });
    }
}

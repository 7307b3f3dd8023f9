//! Construction helpers for sequences.
//!
//! Every factory here returns a fresh, lazy, sequential stream. Where the
//! ecosystem already provides the source ([`futures_lite::stream`]), these
//! are one-line delegations; the rest (line readers, archive entries, regex
//! splits, seeded iteration) live in their own modules.
//!
//! Infinite sources ([`iterate`], [`generate`]) must be bounded with `take`
//! or `take_while` before any terminal that consumes the whole sequence —
//! an unbounded terminal never returns.
//!
//! # Examples
//!
//! ```
//! use futures_lite::future::block_on;
//! use futures_lite::prelude::*;
//! use sequex::source;
//!
//! block_on(async {
//!     let first: Vec<u32> = source::iterate(0, |n| n + 1).take(5).collect().await;
//!     assert_eq!(first, [0, 1, 2, 3, 4]);
//! })
//! ```

use futures_lite::stream::{self, Empty, Iter, Once, RepeatWith};

mod archive;
mod iterate;
mod lines;
mod split;

pub use archive::{of_entries, ArchiveEntries, ArchiveEntry};
pub use iterate::{iterate, Iterate};
pub use lines::{of_buffered_lines, of_lines};
pub use split::{split, split_pattern, Split};

/// Creates a sequence with no elements.
pub fn empty<T>() -> Empty<T> {
    stream::empty()
}

/// Creates a sequence containing a single element.
pub fn of<T>(element: T) -> Once<T> {
    stream::once(element)
}

/// Creates a sequence enumerating the given collection in its order.
///
/// Accepts anything iterable: arrays, vectors, maps, ranges.
pub fn of_iter<I: IntoIterator>(collection: I) -> Iter<I::IntoIter> {
    stream::iter(collection)
}

/// Creates an infinite sequence that invokes the supplier once per pull.
///
/// Side effects of the supplier happen in pull order. Must be bounded
/// before a full-consumption terminal.
pub fn generate<T, F: FnMut() -> T>(supplier: F) -> RepeatWith<F> {
    stream::repeat_with(supplier)
}

/// Creates a sequence over the keys of a mapping, in its iteration order.
pub fn of_keys<M, K, V>(map: M) -> Iter<impl Iterator<Item = K>>
where
    M: IntoIterator<Item = (K, V)>,
{
    stream::iter(map.into_iter().map(|(key, _)| key))
}

/// Creates a sequence over the keys of a mapping whose values pass the
/// filter, in the mapping's iteration order.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use futures_lite::prelude::*;
/// use sequex::source;
/// use std::collections::BTreeMap;
///
/// block_on(async {
///     let ages = BTreeMap::from([("ada", 36), ("bob", 7), ("cyd", 52)]);
///     let adults: Vec<_> = source::of_keys_filtered(ages, |age| *age >= 18)
///         .collect()
///         .await;
///     assert_eq!(adults, ["ada", "cyd"]);
/// })
/// ```
pub fn of_keys_filtered<M, K, V, P>(map: M, value_filter: P) -> Iter<impl Iterator<Item = K>>
where
    M: IntoIterator<Item = (K, V)>,
    P: FnMut(&V) -> bool,
{
    let mut value_filter = value_filter;
    stream::iter(
        map.into_iter()
            .filter(move |(_, value)| value_filter(value))
            .map(|(key, _)| key),
    )
}

/// Creates a sequence over the values of a mapping, in its iteration order.
pub fn of_values<M, K, V>(map: M) -> Iter<impl Iterator<Item = V>>
where
    M: IntoIterator<Item = (K, V)>,
{
    stream::iter(map.into_iter().map(|(_, value)| value))
}

/// Creates a sequence over the values of a mapping whose keys pass the
/// filter, in the mapping's iteration order.
pub fn of_values_filtered<M, K, V, P>(map: M, key_filter: P) -> Iter<impl Iterator<Item = V>>
where
    M: IntoIterator<Item = (K, V)>,
    P: FnMut(&K) -> bool,
{
    let mut key_filter = key_filter;
    stream::iter(
        map.into_iter()
            .filter(move |(key, _)| key_filter(key))
            .map(|(_, value)| value),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_lite::future::block_on;
    use futures_lite::prelude::*;
    use std::collections::BTreeMap;

    #[test]
    fn empty_has_no_elements() {
        block_on(async {
            let items: Vec<u8> = empty::<u8>().collect().await;
            assert!(items.is_empty());
        });
    }

    #[test]
    fn of_yields_the_single_element() {
        block_on(async {
            let items: Vec<_> = of("only").collect().await;
            assert_eq!(items, ["only"]);
        });
    }

    #[test]
    fn keys_and_values_preserve_mapping_order() {
        block_on(async {
            let map = BTreeMap::from([(2, "b"), (1, "a"), (3, "c")]);
            let keys: Vec<_> = of_keys(map.clone()).collect().await;
            assert_eq!(keys, [1, 2, 3]);
            let values: Vec<_> = of_values(map).collect().await;
            assert_eq!(values, ["a", "b", "c"]);
        });
    }

    #[test]
    fn filtered_projections_test_the_other_component() {
        block_on(async {
            let map = BTreeMap::from([(1, 10), (2, 0), (3, 30)]);
            let keys: Vec<_> = of_keys_filtered(map.clone(), |v| *v > 0).collect().await;
            assert_eq!(keys, [1, 3]);
            let values: Vec<_> = of_values_filtered(map, |k| *k != 3).collect().await;
            assert_eq!(values, [10, 0]);
        });
    }

    #[test]
    fn generate_is_pulled_in_order() {
        block_on(async {
            let mut n = 0;
            let items: Vec<_> = generate(move || {
                n += 1;
                n
            })
            .take(3)
            .collect()
            .await;
            assert_eq!(items, [1, 2, 3]);
        });
    }
}

use futures_lite::future::block_on;
use futures_lite::prelude::*;
use sequex::prelude::*;
use sequex::source;
use sequex::DuplicateKey;
use std::any::Any;
use std::collections::BTreeMap;

#[test]
fn map_agrees_with_plain_iteration() {
    block_on(async {
        let input = vec![3, 1, 4, 1, 5];
        let streamed: Vec<_> = source::of_iter(input.clone()).map(|n| n * 2).collect().await;
        let direct: Vec<_> = input.into_iter().map(|n| n * 2).collect();
        assert_eq!(streamed, direct);
    });
}

#[test]
fn select_filters_by_runtime_type_in_order() {
    block_on(async {
        let mixed: Vec<Box<dyn Any>> = vec![
            Box::new("skip"),
            Box::new(1u8),
            Box::new(2u8),
            Box::new(vec![0u32]),
            Box::new(3u8),
        ];
        let bytes: Vec<u8> = source::of_iter(mixed).select::<u8>().collect().await;
        assert_eq!(bytes, [1, 2, 3]);
    });
}

#[test]
fn joining_contract() {
    block_on(async {
        assert_eq!(source::of_iter(["a", "b", "c"]).joining().await, "abc");
        assert_eq!(source::of_iter(["a", "b", "c"]).joining_with(",").await, "a,b,c");
        assert_eq!(
            source::of_iter(["a", "b", "c"]).joining_wrapped(",", "[", "]").await,
            "[a,b,c]"
        );
        assert_eq!(source::empty::<&str>().joining().await, "");
    });
}

#[test]
fn to_map_requires_distinct_keys() {
    block_on(async {
        let repeated = source::of_iter(["x", "y", "x"]).try_to_map(|s| s.len()).await;
        assert_eq!(repeated, Err(DuplicateKey("x")));

        let distinct = source::of_iter(["x", "yz"]).try_to_map(|s| s.len()).await.unwrap();
        assert_eq!(distinct.len(), 2);
        assert_eq!(distinct["yz"], 2);
    });
}

#[test]
fn has_handles_absent_and_missing() {
    block_on(async {
        assert!(source::of_iter([Some("a"), None]).has(&None).await);
        assert!(!source::of_iter([Some("a"), None]).has(&Some("b")).await);
    });
}

#[test]
fn iterate_first_five() {
    block_on(async {
        let first: Vec<i64> = source::iterate(0, |n| n + 1).take(5).collect().await;
        assert_eq!(first, [0, 1, 2, 3, 4]);
    });
}

#[test]
fn grouping_by_parity() {
    block_on(async {
        let groups = source::of_iter([1, 2, 3, 4]).grouping_by(|n| n % 2).await;
        assert_eq!(groups[&0], [2, 4]);
        assert_eq!(groups[&1], [1, 3]);
    });
}

#[test]
fn split_preserves_empty_segments() {
    block_on(async {
        let parts: Vec<&str> = source::split("a,,b", ",").unwrap().collect().await;
        assert_eq!(parts, ["a", "", "b"]);
    });
}

#[test]
fn entry_pipeline_end_to_end() {
    block_on(async {
        let scores = source::of_iter(["ada", "bob", "ada", "eve"])
            .map_to_entry(|name| name.len())
            .filter_values(|len| *len == 3)
            .map_values(|len| len * 10)
            .grouping()
            .await;
        assert_eq!(scores[&"ada"], [30, 30]);
        assert_eq!(scores[&"bob"], [30]);
    });
}

#[test]
fn explicit_target_map_type() {
    block_on(async {
        let sorted: BTreeMap<char, String> = source::of_iter(["cherry", "apple", "banana"])
            .try_to_map_in(
                |fruit| fruit.chars().next().unwrap(),
                |fruit| fruit.to_uppercase(),
            )
            .await
            .unwrap();
        let keys: Vec<_> = sorted.keys().copied().collect();
        assert_eq!(keys, ['a', 'b', 'c']);
        assert_eq!(sorted[&'b'], "BANANA");
    });
}

#[test]
fn grouping_into_ordered_map() {
    block_on(async {
        let by_len: BTreeMap<usize, Vec<&str>> = source::of_iter(["a", "bb", "cc", "d"])
            .grouping_by_in(|s| s.len(), Vec::new, Vec::push)
            .await;
        let keys: Vec<_> = by_len.keys().copied().collect();
        assert_eq!(keys, [1, 2]);
        assert_eq!(by_len[&1], ["a", "d"]);
        assert_eq!(by_len[&2], ["bb", "cc"]);
    });
}

#[test]
fn append_prepend_compose() {
    block_on(async {
        let all: Vec<_> = source::of(10)
            .prepend([8, 9])
            .append([11])
            .append(Vec::new())
            .collect()
            .await;
        assert_eq!(all, [8, 9, 10, 11]);
    });
}

#[test]
fn flat_map_to_entry_concatenates_mappings() {
    block_on(async {
        let entries: Vec<(u8, u8)> = source::of_iter([1u8, 3])
            .flat_map_to_entry(|n| BTreeMap::from([(n, n), (n + 1, n)]))
            .collect()
            .await;
        assert_eq!(entries, [(1, 1), (2, 1), (3, 3), (4, 3)]);
    });
}

#[test]
fn lines_then_group() {
    block_on(async {
        let text = b"alpha\nbee\ncat\ndelta\n";
        let by_len = source::of_lines(&text[..])
            .map(|line| line.unwrap())
            .grouping_by(|line| line.len())
            .await;
        assert_eq!(by_len[&5], ["alpha", "delta"]);
        assert_eq!(by_len[&3], ["bee", "cat"]);
    });
}

#[test]
fn existing_sequences_wrap_to_themselves() {
    block_on(async {
        let stream = source::of_iter([1, 2, 3]);
        let same: Vec<_> = stream.into_sequence().collect().await;
        assert_eq!(same, [1, 2, 3]);
    });
}

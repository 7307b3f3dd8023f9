//! Fluent sequence extensions for `Stream`.
//!
//! This library layers convenience on top of [`Stream`][futures_core::Stream]:
//! extra construction helpers (collections, mappings, line readers, archive
//! entries, regex splits, generators), a pair-stream surface for `(key, value)`
//! elements, and collecting terminal operations (`joining`, `try_to_map`,
//! `grouping_by`). Everything composes with the adapters you already use from
//! [`futures_lite::StreamExt`] — nothing here replaces `map`, `filter`, or
//! `take`, it only fills the gaps around them.
//!
//! Sequences are lazy and single-pass: every adapter and terminal takes the
//! stream by value, so a consumed or transformed sequence cannot be touched
//! again. That property is checked at compile time.
//!
//! # Examples
//!
//! Group and join without leaving the fluent chain:
//!
//! ```rust
//! use futures_lite::future::block_on;
//! use sequex::prelude::*;
//! use sequex::source;
//!
//! block_on(async {
//!     let line = source::of_iter(1..=5).joining_with(", ").await;
//!     assert_eq!(line, "1, 2, 3, 4, 5");
//!
//!     let by_parity = source::of_iter(vec![1, 2, 3, 4])
//!         .grouping_by(|n| n % 2)
//!         .await;
//!     assert_eq!(by_parity[&0], [2, 4]);
//!     assert_eq!(by_parity[&1], [1, 3]);
//! })
//! ```
//!
//! Build a mapping and fail loudly on key collisions:
//!
//! ```rust
//! use futures_lite::future::block_on;
//! use sequex::prelude::*;
//! use sequex::source;
//!
//! block_on(async {
//!     let index = source::of_iter(["ant", "bee", "cow"])
//!         .try_to_map_with(|s| s.as_bytes()[0], |s| s.to_string())
//!         .await
//!         .unwrap();
//!     assert_eq!(index[&b'b'], "bee");
//!
//!     let clash = source::of_iter(["ant", "ape"])
//!         .try_to_map_with(|s| s.as_bytes()[0], |s| s.to_string())
//!         .await;
//!     assert!(clash.is_err());
//! })
//! ```

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

/// The sequex prelude.
pub mod prelude {
    pub use super::entry::EntrySequenceExt as _;
    pub use super::sequence::IntoSequence as _;
    pub use super::sequence::SequenceExt as _;
}

pub mod collect;
pub mod entry;
pub mod sequence;
pub mod source;

pub use collect::DuplicateKey;

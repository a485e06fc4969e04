//! Seq - Set algebra, search, extremum and sampling helpers over slices.
//!
//! Seq is a library of stateless functions that read caller-provided slices
//! and return fresh results. It supports:
//!
//! - Membership and set algebra: contains, every/some/none, intersect,
//!   difference, union, without
//! - Linear search with positions, key search over maps
//! - Occurrence-based selection: uniques and duplicates
//! - Minimum/maximum with natural order or custom comparators
//! - Positional access with negative indices
//! - Uniform random sampling without replacement
//!
//! # Quick Start
//!
//! ```rust
//! use standout_seq::{difference, find, find_duplicates, intersect, max_by, nth, samples};
//!
//! let a = [1, 2, 2, 3];
//! let b = [2, 3, 4];
//!
//! assert_eq!(intersect(&a, &b), vec![2, 3]);
//! assert_eq!(difference(&a, &b), (vec![1], vec![4]));
//! assert_eq!(find_duplicates(&a), vec![2]);
//!
//! assert_eq!(find(&b, |x| x % 2 == 1), Some(&3));
//! assert_eq!(nth(&b, -1), Ok(&4));
//!
//! let words = ["apple", "fig", "banana"];
//! assert_eq!(max_by(&words, |x, y| x.len() > y.len()), Some(&"banana"));
//!
//! assert_eq!(samples(&words, 2).len(), 2);
//! ```
//!
//! # Absence and Failure
//!
//! Lookups that can miss return `Option`. There is no placeholder value for
//! "nothing found"; the `*_or_empty` and `*_or` variants exist for callers
//! who want one. Only [`nth`] returns an error, because an arbitrary
//! caller-supplied position that falls outside the slice is a programming
//! mistake rather than an expected outcome.
//!
//! | Operation | Empty input |
//! |-----------|-------------|
//! | `every`, `every_by`, `none`, `none_by` | `true` |
//! | `some`, `some_by`, `contains` | `false` |
//! | `find*`, `first`, `last`, `min*`, `max*`, `sample` | `None` |
//! | `nth` | `Err(SeqError::OutOfRange)` |
//! | set algebra, `samples`, uniques/duplicates | empty `Vec` |
//!
//! # Ordering
//!
//! Output order always follows input order: set algebra and dedup keep the
//! first-seen order, and the extremum functions keep the earliest element on
//! ties. Hash sets are used only for membership.

mod error;
mod extremum;
mod ordering;
mod position;
mod sample;
mod search;
mod set;

// Re-export public API
pub use error::{Result, SeqError};
pub use extremum::{
    earliest, earliest_by, latest, latest_by, max, max_by, max_index, max_index_by, min, min_by,
    min_index, min_index_by,
};
pub use position::{
    first, first_or, first_or_empty, last, last_or, last_or_empty, nth, nth_or, nth_or_empty,
};
pub use sample::{sample, sample_with, samples, samples_with};
pub use search::{
    find, find_duplicates, find_duplicates_by, find_index_of, find_key, find_key_by,
    find_last_index_of, find_or_else, find_uniques, find_uniques_by, index_of, last_index_of,
};
pub use set::{
    contains, contains_by, difference, elements_match, every, every_by, intersect, none, none_by,
    some, some_by, union, uniq, uniq_by, without, without_by, without_empty,
};

//! # bcisort
//!
//! Two in-place-friendly integer sorts and the harness used to compare them.
//!
//! - [**BCI sort**](bci) (Bidirectional Conditional Insertion Sort): a
//!   comparison sort that narrows one unsorted window from both ends. Each
//!   round picks a left and right comparator, streams every element that
//!   falls outside them into the sorted prefix or suffix with a short
//!   insertion shift, and leaves the rest for the next round.
//! - [**Counting sort**](counting): a stable, linear-time sort for
//!   non-negative keys, indexed directly by key value.
//!
//! ## Usage
//!
//! ```rust
//! use bcisort::prelude::*;
//!
//! let mut data = vec![5, 3, 4, 1, 2];
//! bci_sort(&mut data, 0, 4).unwrap();
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//!
//! let sorted = counting_sort(&[3, 0, 2, 2]).unwrap();
//! assert_eq!(sorted, vec![0, 2, 2, 3]);
//! ```
//!
//! Sorting only part of a sequence leaves the rest untouched:
//!
//! ```rust
//! use bcisort::bci_sort;
//!
//! let mut data = vec![9, 4, 2, 3, 0];
//! bci_sort(&mut data, 1, 3).unwrap();
//! assert_eq!(data, vec![9, 2, 3, 4, 0]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Counting sort**: O(n + max) time and memory. Wasteful when the key
//!   space is much larger than the input.
//! - **BCI sort**: O(1) extra memory. Close to linear on sorted and reversed
//!   input; quadratic in the worst case like any insertion sort, though the
//!   two-sided window keeps the shifts short on random data.
//!
//! The [`dataset`] and [`measure`] modules drive the `sorting-experiment`
//! binary, which times both algorithms on sorted, shuffled and reversed
//! inputs.

pub mod bci;
pub mod counting;
pub mod dataset;
pub mod error;
pub mod measure;

pub use bci::{BciSorter, bci_sort, bci_sort_all};
pub use counting::{counting_sort, counting_sort_by_key};
pub use error::{DatasetError, ErrorKind, SortError};

pub mod prelude {
    pub use crate::bci::{BciSorter, bci_sort, bci_sort_all};
    pub use crate::counting::{counting_sort, counting_sort_by_key};
    pub use crate::error::SortError;
}

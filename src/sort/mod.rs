//! Comparison sorts that leave their input untouched.
//!
//! Both functions copy the input and sort the copy in ascending order, so
//! the caller's slice is never modified.
//!
//! - [`insertion_sort`]: O(n²) worst case, O(n) on sorted input, stable
//! - [`selection_sort`]: O(n²) comparisons in every case, O(n) swaps
//!
//! # Examples
//!
//! ```rust
//! use linear_collections::sort::{insertion_sort, selection_sort};
//!
//! let input = [5, 3, 8, 1, 2];
//! assert_eq!(insertion_sort(&input), vec![1, 2, 3, 5, 8]);
//! assert_eq!(selection_sort(&input), vec![1, 2, 3, 5, 8]);
//! assert_eq!(input, [5, 3, 8, 1, 2]);
//! ```

mod insertion;
mod selection;

pub use insertion::insertion_sort;
pub use selection::selection_sort;

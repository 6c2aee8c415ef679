//! Search functions over slices.
//!
//! Every function returns the index of a matching element, or `None` when
//! the target is absent. "Not found" is an ordinary result, not an error.
//!
//! - [`linear_search`]: any order, O(n)
//! - [`binary_search`]: ascending order, O(log n), iterative
//! - [`recursive_binary_search`]: ascending order, O(log n), recursive
//!
//! # Examples
//!
//! ```rust
//! use linear_collections::search::{binary_search, linear_search};
//!
//! assert_eq!(linear_search(&[4, 2, 9], &9), Some(2));
//! assert_eq!(binary_search(&[1, 2, 3, 4, 5], &3), Some(2));
//! assert_eq!(binary_search(&[1, 2, 3, 4, 5], &6), None);
//! ```

mod binary;
mod linear;

pub use binary::{binary_search, recursive_binary_search};
pub use linear::linear_search;

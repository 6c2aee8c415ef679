//! Binary search over ascending slices.
//!
//! Both variants keep a half-open window `[low, high)` of candidate indices
//! and halve it on every comparison. The window never needs a signed index,
//! so an empty slice needs no special handling.

use std::cmp::Ordering;

/// Returns the index of an element equal to `target` in an ascending slice.
///
/// Targets outside `[list[0], list[len - 1]]` are rejected before the loop.
/// If the slice is not sorted the result is unspecified but the call still
/// terminates.
///
/// # Examples
///
/// ```rust
/// use linear_collections::search::binary_search;
///
/// let list = [1, 2, 3, 4, 5];
/// assert_eq!(binary_search(&list, &3), Some(2));
/// assert_eq!(binary_search(&list, &0), None);
/// assert_eq!(binary_search::<i32>(&[], &3), None);
/// ```
pub fn binary_search<T: PartialOrd>(list: &[T], target: &T) -> Option<usize> {
    let (first, last) = (list.first()?, list.last()?);
    if target < first || target > last {
        return None;
    }

    let mut low = 0;
    let mut high = list.len();
    while low < high {
        let midpoint = low + (high - low) / 2;
        match list[midpoint].partial_cmp(target)? {
            Ordering::Equal => return Some(midpoint),
            Ordering::Greater => high = midpoint,
            Ordering::Less => low = midpoint + 1,
        }
    }
    None
}

/// Recursive form of [`binary_search`].
///
/// # Examples
///
/// ```rust
/// use linear_collections::search::recursive_binary_search;
///
/// assert_eq!(recursive_binary_search(&[10, 20, 30], &30), Some(2));
/// assert_eq!(recursive_binary_search(&[10, 20, 30], &25), None);
/// ```
pub fn recursive_binary_search<T: PartialOrd>(list: &[T], target: &T) -> Option<usize> {
    search_window(list, target, 0, list.len())
}

fn search_window<T: PartialOrd>(list: &[T], target: &T, low: usize, high: usize) -> Option<usize> {
    if low >= high {
        return None;
    }
    let midpoint = low + (high - low) / 2;
    match list[midpoint].partial_cmp(target)? {
        Ordering::Equal => Some(midpoint),
        Ordering::Greater => search_window(list, target, low, midpoint),
        Ordering::Less => search_window(list, target, midpoint + 1, high),
    }
}

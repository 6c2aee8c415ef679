//! Linear search.

/// Returns the index of the first element equal to `target`.
///
/// The slice may be in any order.
///
/// # Examples
///
/// ```rust
/// use linear_collections::search::linear_search;
///
/// assert_eq!(linear_search(&[3, 1, 3], &3), Some(0));
/// assert_eq!(linear_search(&[3, 1, 3], &7), None);
/// ```
pub fn linear_search<T: PartialEq>(list: &[T], target: &T) -> Option<usize> {
    list.iter().position(|element| element == target)
}

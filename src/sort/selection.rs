//! Selection sort.

/// Returns a new ascending vector holding the elements of `input`.
///
/// For every position, the smallest element of the unsorted remainder is
/// found and swapped into place.
///
/// # Examples
///
/// ```rust
/// use linear_collections::sort::selection_sort;
///
/// assert_eq!(selection_sort(&[3.5, -1.0, 2.25]), vec![-1.0, 2.25, 3.5]);
/// ```
pub fn selection_sort<T: PartialOrd + Clone>(input: &[T]) -> Vec<T> {
    let mut ordered = input.to_vec();
    let length = ordered.len();
    for index in 0..length.saturating_sub(1) {
        let mut lowest = index;
        for candidate in index + 1..length {
            if ordered[candidate] < ordered[lowest] {
                lowest = candidate;
            }
        }
        ordered.swap(index, lowest);
    }
    ordered
}

//! Insertion sort.

/// Returns a new ascending vector holding the elements of `input`.
///
/// Each element is taken in turn and shifted left past every larger element
/// already placed. Equal elements keep their relative order.
///
/// # Examples
///
/// ```rust
/// use linear_collections::sort::insertion_sort;
///
/// assert_eq!(insertion_sort(&[4, 2, 2, 5, 3]), vec![2, 2, 3, 4, 5]);
/// assert!(insertion_sort::<i32>(&[]).is_empty());
/// ```
pub fn insertion_sort<T: PartialOrd + Clone>(input: &[T]) -> Vec<T> {
    let mut ordered = input.to_vec();
    for index in 1..ordered.len() {
        let mut position = index;
        while position > 0 && ordered[position - 1] > ordered[position] {
            ordered.swap(position - 1, position);
            position -= 1;
        }
    }
    ordered
}

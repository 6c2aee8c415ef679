//! String helpers.

/// Compares two strings character by character.
///
/// Returns `false` as soon as the lengths or any pair of characters differ.
/// Runs in O(n) over the shorter string.
///
/// # Examples
///
/// ```rust
/// use linear_collections::text::string_equal;
///
/// assert!(string_equal("queue", "queue"));
/// assert!(!string_equal("queue", "queues"));
/// assert!(!string_equal("stack", "stuck"));
/// ```
pub fn string_equal(first: &str, second: &str) -> bool {
    if first.len() != second.len() {
        return false;
    }
    let mut pairs = first.chars().zip(second.chars());
    pairs.all(|(left, right)| left == right)
}

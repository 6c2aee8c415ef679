//! Singly linked list with a plain head pointer.

use std::fmt;
use std::iter::FromIterator;

use super::{Iter, LinkedList, Node, build_chain, display_sequence, unlink_chain};
use crate::error::CollectionError;

/// A singly linked list that owns its head node.
///
/// Inserting or removing at index 0 rewrites the head directly; every other
/// index walks to the predecessor node, starting the count at 1 so that the
/// walk stops on the predecessor rather than one step past it.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `insert_at` | O(index)   |
/// | `remove_at` | O(index)   |
/// | `at`        | O(index)   |
/// | `search`    | O(n)       |
/// | `traverse`  | O(n)       |
/// | `size`      | O(1)       |
///
/// # Examples
///
/// ```rust
/// use linear_collections::list::{LinkedList, SinglyLinkedList};
///
/// let mut list: SinglyLinkedList<i32> = (1..=3).collect();
/// let removed = list.remove_at(1).unwrap();
/// assert_eq!(removed.value, 2);
/// assert_eq!(list.traverse(), vec![1, 3]);
/// ```
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    length: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Returns the head node, if any.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns an iterator over the values from head to tail.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.length)
    }

    fn push_front(&mut self, value: T) -> &Node<T> {
        let next = self.head.take();
        self.length += 1;
        self.head.insert(Box::new(Node { value, next }))
    }
}

/// Walks to the node just before `index`; `index` must be at least 1.
fn predecessor_mut<T>(head: &mut Option<Box<Node<T>>>, index: usize) -> Option<&mut Node<T>> {
    let mut previous = head.as_deref_mut()?;
    let mut count = 1;
    while count < index {
        previous = previous.next.as_deref_mut()?;
        count += 1;
    }
    Some(previous)
}

impl<T> LinkedList<T> for SinglyLinkedList<T> {
    fn insert_at(&mut self, index: usize, value: T) -> Result<&Node<T>, CollectionError> {
        let size = self.length;
        if index > size {
            return Err(CollectionError::invalid_index(index, size));
        }
        if index == 0 {
            return Ok(self.push_front(value));
        }

        let previous = predecessor_mut(&mut self.head, index)
            .ok_or_else(|| CollectionError::invalid_index(index, size))?;
        let next = previous.next.take();
        let inserted: &Node<T> = previous.next.insert(Box::new(Node { value, next }));
        self.length = size + 1;
        Ok(inserted)
    }

    fn remove_at(&mut self, index: usize) -> Result<Node<T>, CollectionError> {
        let size = self.length;
        if index >= size {
            return Err(CollectionError::invalid_index(index, size));
        }

        let mut removed = if index == 0 {
            let mut removed = self
                .head
                .take()
                .ok_or_else(|| CollectionError::invalid_index(index, size))?;
            self.head = removed.next.take();
            removed
        } else {
            let previous = predecessor_mut(&mut self.head, index)
                .ok_or_else(|| CollectionError::invalid_index(index, size))?;
            let mut removed = previous
                .next
                .take()
                .ok_or_else(|| CollectionError::invalid_index(index, size))?;
            previous.next = removed.next.take();
            removed
        };
        removed.next = None;
        self.length = size - 1;
        Ok(*removed)
    }

    fn at(&self, index: usize) -> Result<&Node<T>, CollectionError> {
        if index >= self.length {
            return Err(CollectionError::invalid_index(index, self.length));
        }
        let mut nodes = self.iter();
        for _ in 0..index {
            nodes.next_node();
        }
        nodes
            .next_node()
            .ok_or_else(|| CollectionError::invalid_index(index, self.length))
    }

    fn search(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        let mut nodes = self.iter();
        while let Some(node) = nodes.next_node() {
            if node.value == *value {
                return Some(node);
            }
        }
        None
    }

    fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    fn clear(&mut self) {
        unlink_chain(self.head.take());
        self.length = 0;
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        unlink_chain(self.head.take());
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let (head, length) = build_chain(iter);
        Self { head, length }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.iter())
    }
}

static_assertions::assert_impl_all!(SinglyLinkedList<i32>: Send, Sync, Default, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn letters() -> SinglyLinkedList<char> {
        ['a', 'b', 'c'].into_iter().collect()
    }

    #[rstest]
    fn test_new_creates_empty() {
        let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.size(), 0);
        assert!(list.head().is_none());
    }

    #[rstest]
    fn test_insert_at_zero_becomes_head() {
        let mut list = letters();
        let inserted = list.insert_at(0, 'z').unwrap();
        assert_eq!(inserted.value, 'z');
        assert_eq!(inserted.next().map(|node| node.value), Some('a'));
        assert_eq!(list.traverse(), vec!['z', 'a', 'b', 'c']);
    }

    #[rstest]
    #[case(1, vec!['a', 'x', 'b', 'c'])]
    #[case(2, vec!['a', 'b', 'x', 'c'])]
    #[case(3, vec!['a', 'b', 'c', 'x'])]
    fn test_insert_at_middle_and_end(#[case] index: usize, #[case] expected: Vec<char>) {
        let mut list = letters();
        assert_eq!(list.insert_at(index, 'x').unwrap().value, 'x');
        assert_eq!(list.traverse(), expected);
        assert_eq!(list.size(), 4);
    }

    #[rstest]
    fn test_insert_past_end_fails_without_mutation() {
        let mut list = letters();
        let result = list.insert_at(4, 'x');
        assert_eq!(
            result.err(),
            Some(CollectionError::InvalidIndex { index: 4, size: 3 })
        );
        assert_eq!(list.size(), 3);
        assert_eq!(list.traverse(), vec!['a', 'b', 'c']);
    }

    #[rstest]
    #[case(0, 'a', vec!['b', 'c'])]
    #[case(1, 'b', vec!['a', 'c'])]
    #[case(2, 'c', vec!['a', 'b'])]
    fn test_remove_at(#[case] index: usize, #[case] removed: char, #[case] rest: Vec<char>) {
        let mut list = letters();
        let node = list.remove_at(index).unwrap();
        assert_eq!(node.value, removed);
        assert!(node.next().is_none());
        assert_eq!(list.traverse(), rest);
        assert_eq!(list.size(), 2);
    }

    #[rstest]
    fn test_remove_at_out_of_range_fails_without_mutation() {
        let mut list = letters();
        assert!(list.remove_at(3).is_err());
        assert_eq!(list.size(), 3);

        let mut empty: SinglyLinkedList<char> = SinglyLinkedList::new();
        assert_eq!(
            empty.remove_at(0).err(),
            Some(CollectionError::InvalidIndex { index: 0, size: 0 })
        );
        assert_eq!(empty.size(), 0);
    }

    #[rstest]
    fn test_at() {
        let list = letters();
        assert_eq!(list.at(0).unwrap().value, 'a');
        assert_eq!(list.at(2).unwrap().value, 'c');
        assert!(list.at(3).is_err());
    }

    #[rstest]
    fn test_search() {
        let list = letters();
        let found = list.search(&'b').unwrap();
        assert_eq!(found.value, 'b');
        assert_eq!(found.next().map(|node| node.value), Some('c'));
        assert!(list.search(&'q').is_none());
    }

    #[rstest]
    fn test_clear() {
        let mut list = letters();
        list.clear();
        assert!(list.is_empty());
        assert!(list.traverse().is_empty());
        list.insert_at(0, 'n').unwrap();
        assert_eq!(list.traverse(), vec!['n']);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = letters();
        let mut copy = original.clone();
        copy.remove_at(0).unwrap();
        assert_eq!(original.size(), 3);
        assert_eq!(copy.size(), 2);
    }

    #[rstest]
    fn test_display_and_debug() {
        let list: SinglyLinkedList<i32> = (1..=3).collect();
        assert_eq!(format!("{list}"), "[1, 2, 3]");
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");
        let empty: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert_eq!(format!("{empty}"), "[]");
    }

    #[rstest]
    fn test_drop_long_list() {
        let list: SinglyLinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.size(), 200_000);
        drop(list);
    }
}

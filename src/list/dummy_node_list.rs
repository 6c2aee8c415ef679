//! Singly linked list walked from a dummy link.

use std::fmt;
use std::iter::FromIterator;

use super::{Iter, LinkedList, Node, build_chain, display_sequence, unlink_chain};
use crate::error::CollectionError;

/// The value-less cell that sits in front of the first real node.
struct DummyNode<T> {
    next: Option<Box<Node<T>>>,
}

/// A singly linked list whose first node hangs off a permanent dummy node.
///
/// Because every real node has a predecessor link (the dummy's, for the
/// first one), insertion and removal walk `index` links from the dummy and
/// splice there, with no special case for the head.
///
/// # Examples
///
/// ```rust
/// use linear_collections::list::{DummyNodeList, LinkedList};
///
/// let mut list = DummyNodeList::new();
/// list.insert_at(0, 2).unwrap();
/// list.insert_at(0, 1).unwrap();
/// list.insert_at(2, 3).unwrap();
/// assert_eq!(list.traverse(), vec![1, 2, 3]);
/// ```
pub struct DummyNodeList<T> {
    dummy: DummyNode<T>,
    length: usize,
}

impl<T> DummyNodeList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dummy: DummyNode { next: None },
            length: 0,
        }
    }

    /// Returns the first real node, if any.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&Node<T>> {
        self.dummy.next.as_deref()
    }

    /// Returns an iterator over the values from head to tail.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.dummy.next.as_deref(), self.length)
    }
}

/// Returns the link that points at position `index`, starting from the dummy.
fn link_at<T>(
    dummy: &mut DummyNode<T>,
    index: usize,
) -> Option<&mut Option<Box<Node<T>>>> {
    let mut link = &mut dummy.next;
    for _ in 0..index {
        link = &mut link.as_mut()?.next;
    }
    Some(link)
}

impl<T> LinkedList<T> for DummyNodeList<T> {
    fn insert_at(&mut self, index: usize, value: T) -> Result<&Node<T>, CollectionError> {
        let size = self.length;
        if index > size {
            return Err(CollectionError::invalid_index(index, size));
        }

        let link = link_at(&mut self.dummy, index)
            .ok_or_else(|| CollectionError::invalid_index(index, size))?;
        let next = link.take();
        let inserted: &Node<T> = link.insert(Box::new(Node { value, next }));
        self.length = size + 1;
        Ok(inserted)
    }

    fn remove_at(&mut self, index: usize) -> Result<Node<T>, CollectionError> {
        let size = self.length;
        if index >= size {
            return Err(CollectionError::invalid_index(index, size));
        }

        let link = link_at(&mut self.dummy, index)
            .ok_or_else(|| CollectionError::invalid_index(index, size))?;
        let mut removed = link
            .take()
            .ok_or_else(|| CollectionError::invalid_index(index, size))?;
        *link = removed.next.take();
        self.length = size - 1;
        Ok(*removed)
    }

    fn at(&self, index: usize) -> Result<&Node<T>, CollectionError> {
        if index >= self.length {
            return Err(CollectionError::invalid_index(index, self.length));
        }
        let mut current = self.dummy.next.as_deref();
        let mut counter = 0;
        while counter < index {
            current = current.and_then(Node::next);
            counter += 1;
        }
        current.ok_or_else(|| CollectionError::invalid_index(index, self.length))
    }

    fn search(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq,
    {
        let mut current = self.dummy.next.as_deref();
        while let Some(node) = current {
            if node.value == *value {
                return Some(node);
            }
            current = node.next();
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
        unlink_chain(self.dummy.next.take());
        self.length = 0;
    }
}

impl<T> Drop for DummyNodeList<T> {
    fn drop(&mut self) {
        unlink_chain(self.dummy.next.take());
    }
}

impl<T> Default for DummyNodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DummyNodeList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for DummyNodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let (head, length) = build_chain(iter);
        Self {
            dummy: DummyNode { next: head },
            length,
        }
    }
}

impl<'a, T> IntoIterator for &'a DummyNodeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DummyNodeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DummyNodeList<T> {}

impl<T: fmt::Debug> fmt::Debug for DummyNodeList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DummyNodeList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.iter())
    }
}

static_assertions::assert_impl_all!(DummyNodeList<i32>: Send, Sync, Default, Clone);

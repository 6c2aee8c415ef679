//! Singly linked lists.
//!
//! This module provides the [`LinkedList`] contract and two implementations
//! that differ only in how they reach the link in front of an index:
//!
//! - [`SinglyLinkedList`]: keeps a head pointer and treats index 0 as a
//!   special case
//! - [`DummyNodeList`]: walks from a dummy link that sits in front of the
//!   first node, so every index is handled by the same loop
//!
//! Both are built from [`Node`], the owned link cell that the linked stack
//! reuses as well.
//!
//! # Ownership
//!
//! Each node is owned by its predecessor through a `Box`; the list owns the
//! head. There are no back references and no cycles.
//!
//! # Examples
//!
//! ```rust
//! use linear_collections::list::{LinkedList, SinglyLinkedList};
//!
//! let mut list = SinglyLinkedList::new();
//! list.insert_at(0, 'a').unwrap();
//! list.insert_at(1, 'c').unwrap();
//! list.insert_at(1, 'b').unwrap();
//! assert_eq!(list.traverse(), vec!['a', 'b', 'c']);
//!
//! assert_eq!(list.at(2).unwrap().value, 'c');
//! assert!(list.at(3).is_err());
//! ```

use std::fmt;

use crate::error::CollectionError;

mod dummy_node_list;
mod singly_linked_list;

pub use dummy_node_list::DummyNodeList;
pub use singly_linked_list::SinglyLinkedList;

/// An owned link in a singly linked chain.
///
/// The successor, if any, is owned by this node.
pub struct Node<T> {
    /// The element stored in this node.
    pub value: T,
    pub(crate) next: Option<Box<Self>>,
}

impl<T> Node<T> {
    /// Creates a node with no successor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use linear_collections::list::Node;
    ///
    /// let node = Node::new(7);
    /// assert_eq!(node.value, 7);
    /// assert!(node.next().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Returns the successor of this node.
    #[inline]
    #[must_use]
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// Consumes the node and returns its value.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

/// Drops a chain one node at a time.
///
/// Letting `Box` drop a long chain recursively would overflow the stack.
pub(crate) fn unlink_chain<T>(mut current: Option<Box<Node<T>>>) {
    while let Some(mut node) = current {
        current = node.next.take();
    }
}

/// Builds a chain from the elements of an iterator, keeping their order.
pub(crate) fn build_chain<T, I>(iter: I) -> (Option<Box<Node<T>>>, usize)
where
    I: IntoIterator<Item = T>,
{
    let mut elements: Vec<T> = iter.into_iter().collect();
    let length = elements.len();
    let mut head: Option<Box<Node<T>>> = None;
    while let Some(value) = elements.pop() {
        head = Some(Box::new(Node { value, next: head }));
    }
    (head, length)
}

/// The contract shared by the singly linked lists.
///
/// Index arguments are zero based. An index outside the range an operation
/// accepts yields [`CollectionError::InvalidIndex`] and leaves the list
/// untouched.
pub trait LinkedList<T> {
    /// Inserts `value` so that it ends up at `index`, shifting later
    /// elements back by one. `index == size()` appends.
    ///
    /// Returns the inserted node.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIndex`] if `index > size()`.
    fn insert_at(&mut self, index: usize, value: T) -> Result<&Node<T>, CollectionError>;

    /// Unlinks the node at `index` and returns it detached from the chain.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIndex`] if `index >= size()`.
    fn remove_at(&mut self, index: usize) -> Result<Node<T>, CollectionError>;

    /// Returns the node at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIndex`] if `index >= size()`.
    fn at(&self, index: usize) -> Result<&Node<T>, CollectionError>;

    /// Returns the first node holding `value`, or `None`.
    fn search(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq;

    /// Returns the elements from head to tail.
    fn traverse(&self) -> Vec<T>
    where
        T: Clone;

    /// Returns the number of nodes.
    fn size(&self) -> usize;

    /// Returns `true` if the list holds no nodes.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes every node.
    fn clear(&mut self);
}

/// An iterator over references to the values of a node chain.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) const fn new(head: Option<&'a Node<T>>, length: usize) -> Self {
        Self {
            current: head,
            remaining: length,
        }
    }

    /// Returns the next node rather than its value.
    pub(crate) fn next_node(&mut self) -> Option<&'a Node<T>> {
        let node = self.current?;
        self.current = node.next.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        Some(node)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|node| &node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// Formats elements as `[a, b, c]`.
pub(crate) fn display_sequence<'a, T, I>(formatter: &mut fmt::Formatter<'_>, iter: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(formatter, "[")?;
    for (position, element) in iter.into_iter().enumerate() {
        if position > 0 {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "]")
}

const _: Option<&dyn LinkedList<i32>> = None;

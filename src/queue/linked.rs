//! Unbounded queue over a singly linked chain with head and tail links.
//!
//! A queue needs to reach both ends of its chain: the head to dequeue and
//! the tail to enqueue. With `Box` links the tail would be owned twice, so
//! the chain lives in an arena instead. Nodes sit in a `Vec` and link to
//! their successor by index; the queue keeps the indices of the head and
//! the tail, and slots freed by `dequeue` are reused by later enqueues.
//!
//! ```text
//! nodes: [ c ->_ | a -> 2 | b -> 0 ]     head = 1, tail = 0
//! order: a, b, c
//! ```

use std::fmt;

use super::Queue;
use crate::error::CollectionError;
use crate::list::display_sequence;

struct Slot<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// An unbounded FIFO queue backed by an index-linked chain.
///
/// # Invariants
///
/// - `size()` equals the number of nodes reachable from the head
/// - the tail is reachable from the head and has no successor
/// - head and tail are both absent exactly when the queue is empty
///
/// # Time Complexity
///
/// `enqueue`, `dequeue`, `front`, `rear` and `size` are O(1) (amortized for
/// `enqueue`, which may grow the arena).
///
/// # Examples
///
/// ```rust
/// use linear_collections::queue::{LinkedQueue, Queue};
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue("a").unwrap();
/// queue.enqueue("b").unwrap();
///
/// let copy = queue.clone();
/// assert_eq!(queue.dequeue(), Some("a"));
/// assert_eq!(copy.front(), Some(&"a"));
/// ```
pub struct LinkedQueue<T> {
    nodes: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    length: usize,
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Returns an iterator over the elements from front to rear.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> LinkedQueueIter<'_, T> {
        LinkedQueueIter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.length,
        }
    }

    fn allocate(&mut self, value: T) -> usize {
        let slot = Slot {
            value: Some(value),
            next: None,
        };
        if let Some(index) = self.free.pop() {
            self.nodes[index] = slot;
            index
        } else {
            self.nodes.push(slot);
            self.nodes.len() - 1
        }
    }

    /// Infallible enqueue used by the adapters that move elements between
    /// queues.
    pub(crate) fn push_back(&mut self, value: T) {
        let index = self.allocate(value);
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
    }

    fn value_at(&self, index: Option<usize>) -> Option<&T> {
        index.and_then(|index| self.nodes[index].value.as_ref())
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<(), CollectionError> {
        self.push_back(value);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        let slot = &mut self.nodes[head];
        let value = slot.value.take();
        self.head = slot.next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        self.free.push(head);
        self.length -= 1;
        value
    }

    fn front(&self) -> Option<&T> {
        self.value_at(self.head)
    }

    fn rear(&self) -> Option<&T> {
        self.value_at(self.tail)
    }

    fn is_empty(&self) -> bool {
        debug_assert_eq!(self.head.is_none(), self.tail.is_none());
        self.head.is_none()
    }

    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    fn clear(&mut self) {
        self.nodes = Vec::new();
        self.free = Vec::new();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }
}

/// An iterator over the elements of a [`LinkedQueue`], front to rear.
pub struct LinkedQueueIter<'a, T> {
    nodes: &'a [Slot<T>],
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedQueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let slot = &nodes[self.current?];
        self.current = slot.next;
        self.remaining = self.remaining.saturating_sub(1);
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedQueueIter<'_, T> {}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    /// Copies the live elements into a fresh, compact arena.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = LinkedQueueIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.iter())
    }
}

static_assertions::assert_impl_all!(LinkedQueue<i32>: Send, Sync, Default, Clone);

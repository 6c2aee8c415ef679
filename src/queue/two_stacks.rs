//! FIFO queue built from two LIFO stacks.
//!
//! New elements are pushed onto the `inbox`. Elements leave from the
//! `outbox`. When the outbox runs dry, the whole inbox is poured into it,
//! which reverses the inbox's LIFO order into FIFO order:
//!
//! ```text
//! enqueue 1 2 3        inbox  [1 2 3>    outbox [>
//! dequeue (pour)       inbox  [>         outbox [3 2 1>   -> 1
//! enqueue 4            inbox  [4>        outbox [3 2>
//! ```
//!
//! Every element is moved from the inbox to the outbox at most once before
//! it is dequeued, so over any sequence of `n` operations the total number
//! of moves is at most `n`: `dequeue` is amortized O(1), even though a
//! single call on an empty outbox costs O(n).
//!
//! Peeks never pour. The logical front is the outbox top when the outbox is
//! non-empty, otherwise the inbox bottom; the logical rear is the mirror
//! image.

use std::fmt;

use super::Queue;
use crate::error::CollectionError;
use crate::list::display_sequence;
use crate::stack::{LinkedStack, Stack};

/// A FIFO queue that only uses stack primitives.
///
/// # Invariants
///
/// - every live element is in exactly one of the two stacks
/// - `size() == inbox.size() + outbox.size()`
/// - reading the outbox from top to bottom, then the inbox from bottom to
///   top, yields the elements in enqueue order
///
/// # Examples
///
/// ```rust
/// use linear_collections::queue::{Queue, StackQueue};
///
/// let mut queue = StackQueue::new();
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
/// assert_eq!(queue.dequeue(), Some(1));
/// queue.enqueue(3).unwrap();
/// assert_eq!(queue.front(), Some(&2));
/// assert_eq!(queue.rear(), Some(&3));
/// ```
#[derive(Clone)]
pub struct StackQueue<T> {
    inbox: LinkedStack<T>,
    outbox: LinkedStack<T>,
    current_size: usize,
}

impl<T> StackQueue<T> {
    /// Creates an empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inbox: LinkedStack::new(),
            outbox: LinkedStack::new(),
            current_size: 0,
        }
    }

    /// Returns the number of elements waiting in the inbox.
    #[inline]
    #[must_use]
    pub fn inbox_size(&self) -> usize {
        self.inbox.size()
    }

    /// Returns the number of elements ready in the outbox.
    #[inline]
    #[must_use]
    pub fn outbox_size(&self) -> usize {
        self.outbox.size()
    }

    /// Returns the elements from front to rear without moving any of them.
    fn ordered(&self) -> Vec<&T> {
        let mut values: Vec<&T> = self.outbox.iter().collect();
        let mut waiting: Vec<&T> = self.inbox.iter().collect();
        waiting.reverse();
        values.extend(waiting);
        values
    }

    fn pour_inbox_into_outbox(&mut self) {
        let mut moved = 0_usize;
        while let Some(value) = self.inbox.pop() {
            self.outbox.push_top(value);
            moved += 1;
        }
        tracing::trace!(moved, "poured inbox into outbox");
    }
}

impl<T> Queue<T> for StackQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<(), CollectionError> {
        self.inbox.push(value)?;
        self.current_size += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.inbox.is_empty() && self.outbox.is_empty() {
            return None;
        }
        if self.outbox.is_empty() {
            self.pour_inbox_into_outbox();
        }
        let value = self.outbox.pop()?;
        self.current_size -= 1;
        Some(value)
    }

    fn front(&self) -> Option<&T> {
        if !self.outbox.is_empty() {
            return self.outbox.top();
        }
        self.inbox.bottom()
    }

    fn rear(&self) -> Option<&T> {
        if !self.inbox.is_empty() {
            return self.inbox.top();
        }
        self.outbox.bottom()
    }

    fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    #[inline]
    fn size(&self) -> usize {
        self.current_size
    }

    fn clear(&mut self) {
        self.inbox.clear();
        self.outbox.clear();
        self.current_size = 0;
    }
}

impl<T> Default for StackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for StackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let inbox: LinkedStack<T> = iter.into_iter().collect();
        Self {
            current_size: inbox.size(),
            inbox,
            outbox: LinkedStack::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for StackQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("StackQueue")
            .field("inbox", &self.inbox)
            .field("outbox", &self.outbox)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for StackQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.ordered())
    }
}

static_assertions::assert_impl_all!(StackQueue<i32>: Send, Sync, Default, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_enqueue_only_touches_inbox() {
        let mut queue = StackQueue::new();
        for value in 1..=3 {
            queue.enqueue(value).unwrap();
        }
        assert_eq!(queue.inbox_size(), 3);
        assert_eq!(queue.outbox_size(), 0);
        assert_eq!(queue.size(), 3);
    }

    #[rstest]
    fn test_dequeue_pours_only_when_outbox_is_empty() {
        let mut queue: StackQueue<i32> = (1..=3).collect();
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.inbox_size(), 0);
        assert_eq!(queue.outbox_size(), 2);

        queue.enqueue(4).unwrap();
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.inbox_size(), 1);
        assert_eq!(queue.outbox_size(), 1);

        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), Some(4));
        assert_eq!(queue.dequeue(), None);
    }

    #[rstest]
    fn test_peeks_do_not_pour() {
        let queue: StackQueue<char> = "abc".chars().collect();
        assert_eq!(queue.front(), Some(&'a'));
        assert_eq!(queue.rear(), Some(&'c'));
        assert_eq!(queue.inbox_size(), 3);
        assert_eq!(queue.outbox_size(), 0);
    }

    #[rstest]
    fn test_peeks_span_both_stacks() {
        let mut queue: StackQueue<i32> = (1..=3).collect();
        queue.dequeue();
        assert_eq!(queue.front(), Some(&2));
        assert_eq!(queue.rear(), Some(&3));

        queue.enqueue(9).unwrap();
        assert_eq!(queue.front(), Some(&2));
        assert_eq!(queue.rear(), Some(&9));
    }

    #[rstest]
    fn test_size_mirrors_both_stacks() {
        let mut queue: StackQueue<i32> = (0..10).collect();
        for _ in 0..4 {
            queue.dequeue();
        }
        queue.enqueue(10).unwrap();
        assert_eq!(queue.size(), queue.inbox_size() + queue.outbox_size());
        assert_eq!(queue.size(), 7);
    }

    #[rstest]
    fn test_display_uses_logical_order() {
        let mut queue: StackQueue<i32> = (1..=3).collect();
        queue.dequeue();
        queue.enqueue(4).unwrap();
        assert_eq!(format!("{queue}"), "[2, 3, 4]");
    }

    #[rstest]
    fn test_clear() {
        let mut queue: StackQueue<i32> = (1..=3).collect();
        queue.dequeue();
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.size(), 0);
        assert_eq!(queue.front(), None);
    }
}

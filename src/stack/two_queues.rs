//! LIFO stack built from two FIFO queues.
//!
//! Pushes go to the `inbox` queue. A queue can only hand out its oldest
//! element, so `pop` rotates: it moves every inbox element except the
//! newest into the `outbox`, dequeues that newest element (the logical
//! top), then swaps the two queues so the outbox, which now holds all the
//! remaining elements in their original order, becomes the inbox.
//!
//! ```text
//! push 1 2 3      inbox <1 2 3<    outbox <<
//! pop (rotate)    inbox <3<        outbox <1 2<     -> 3
//! swap            inbox <1 2<      outbox <<
//! ```
//!
//! Unlike [`StackQueue`](crate::queue::StackQueue), whose transfer cost is
//! amortized away, this structure pays the O(n) rotation on every `pop`.
//! That is the price of building LIFO out of FIFO parts, not a defect.

use std::fmt;

use super::Stack;
use crate::error::CollectionError;
use crate::list::display_sequence;
use crate::queue::{LinkedQueue, Queue};

/// A LIFO stack that only uses queue primitives.
///
/// # Invariants
///
/// - every live element is in exactly one of the two queues
/// - `size() == inbox.size() + outbox.size()`
/// - reading the outbox front to rear, then the inbox front to rear, yields
///   the elements from bottom to top
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `push`       | O(1)       |
/// | `pop`        | O(n)       |
/// | `top`        | O(1)       |
/// | `bottom`     | O(1)       |
/// | `traverse`   | O(n)       |
/// | `to_reverse` | O(n²)      |
///
/// # Examples
///
/// ```rust
/// use linear_collections::stack::{QueueStack, Stack};
///
/// let mut stack = QueueStack::new();
/// for value in 1..=3 {
///     stack.push(value).unwrap();
/// }
/// assert_eq!(stack.top(), Some(&3));
/// assert_eq!(stack.bottom(), Some(&1));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.traverse(), vec![1, 2]);
/// ```
pub struct QueueStack<T> {
    inbox: LinkedQueue<T>,
    outbox: LinkedQueue<T>,
    current_size: usize,
}

impl<T> QueueStack<T> {
    /// Creates an empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inbox: LinkedQueue::new(),
            outbox: LinkedQueue::new(),
            current_size: 0,
        }
    }

    /// Returns the elements from bottom to top without touching either queue.
    fn ordered(&self) -> impl Iterator<Item = &T> + '_ {
        self.outbox.iter().chain(self.inbox.iter())
    }
}

impl<T: Clone> QueueStack<T> {
    /// Reverses the stack by traversing it and pushing the elements back in
    /// the opposite order.
    ///
    /// Produces the same result as [`Stack::to_reverse`] in O(n) instead of
    /// O(n²).
    #[must_use]
    pub fn to_reverse_by_traverse(&self) -> Self {
        let mut reversed = Self::new();
        for value in self.traverse().into_iter().rev() {
            reversed.inbox.push_back(value);
            reversed.current_size += 1;
        }
        reversed
    }
}

/// Dequeues everything from a copy of `queue` into `sink`, newest first,
/// by rotating the copy once per element.
fn drain_newest_first<T: Clone>(queue: &LinkedQueue<T>, sink: &mut QueueStack<T>) {
    let mut source = queue.clone();
    let mut helper = LinkedQueue::new();
    while !source.is_empty() {
        while source.size() > 1 {
            if let Some(value) = source.dequeue() {
                helper.push_back(value);
            }
        }
        if let Some(newest) = source.dequeue() {
            sink.inbox.push_back(newest);
            sink.current_size += 1;
        }
        std::mem::swap(&mut source, &mut helper);
    }
}

impl<T> Stack<T> for QueueStack<T> {
    fn push(&mut self, value: T) -> Result<(), CollectionError> {
        self.inbox.enqueue(value)?;
        self.current_size += 1;
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        if self.inbox.is_empty() {
            std::mem::swap(&mut self.inbox, &mut self.outbox);
        }

        let mut rotated = 0_usize;
        while self.inbox.size() > 1 {
            if let Some(value) = self.inbox.dequeue() {
                self.outbox.push_back(value);
                rotated += 1;
            }
        }
        let top = self.inbox.dequeue()?;
        std::mem::swap(&mut self.inbox, &mut self.outbox);
        self.current_size -= 1;
        tracing::trace!(rotated, remaining = self.current_size, "rotated inbox to reach top");
        Some(top)
    }

    fn top(&self) -> Option<&T> {
        if !self.inbox.is_empty() {
            return self.inbox.rear();
        }
        self.outbox.rear()
    }

    fn bottom(&self) -> Option<&T> {
        if !self.outbox.is_empty() {
            return self.outbox.front();
        }
        self.inbox.front()
    }

    fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    #[inline]
    fn size(&self) -> usize {
        self.current_size
    }

    /// Rotates copies of both queues, newest element first, so the source
    /// queues are never touched.
    fn to_reverse(&self) -> Self
    where
        T: Clone,
    {
        let mut reversed = Self::new();
        drain_newest_first(&self.inbox, &mut reversed);
        drain_newest_first(&self.outbox, &mut reversed);
        reversed
    }

    fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.current_size);
        for queue in [&self.outbox, &self.inbox] {
            let mut copy = queue.clone();
            while let Some(value) = copy.dequeue() {
                values.push(value);
            }
        }
        values
    }

    fn clear(&mut self) {
        self.inbox = LinkedQueue::new();
        self.outbox = LinkedQueue::new();
        self.current_size = 0;
    }
}

impl<T> Default for QueueStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for QueueStack<T> {
    fn clone(&self) -> Self {
        Self {
            inbox: self.inbox.clone(),
            outbox: self.outbox.clone(),
            current_size: self.current_size,
        }
    }
}

/// Pushes the elements in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for QueueStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let inbox: LinkedQueue<T> = iter.into_iter().collect();
        Self {
            current_size: inbox.size(),
            inbox,
            outbox: LinkedQueue::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for QueueStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("QueueStack")
            .field("inbox", &self.inbox)
            .field("outbox", &self.outbox)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for QueueStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.ordered())
    }
}

static_assertions::assert_impl_all!(QueueStack<i32>: Send, Sync, Default, Clone);

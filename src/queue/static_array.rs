//! Bounded queue over a fixed block whose slots are used once.

use std::fmt;

use super::Queue;
use crate::error::CollectionError;
use crate::list::display_sequence;

/// A fixed-capacity FIFO queue that never wraps around.
///
/// Both indices only move forward, so a slot freed by `dequeue` is not
/// written again until [`StaticArrayQueue::restart`] (or `clear`). After
/// `capacity` enqueues the queue rejects further inserts even if it has
/// since been drained. [`CircularQueue`](super::CircularQueue) removes this
/// limitation by wrapping the indices.
///
/// The block is sized to the capacity given to [`StaticArrayQueue::new`].
///
/// # Examples
///
/// ```rust
/// use linear_collections::queue::{Queue, StaticArrayQueue};
///
/// let mut queue = StaticArrayQueue::new(2);
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
/// assert_eq!(queue.dequeue(), Some(1));
///
/// // The freed slot is not reused.
/// assert!(queue.enqueue(3).is_err());
///
/// queue.restart();
/// assert!(queue.enqueue(3).is_ok());
/// ```
#[derive(Clone)]
pub struct StaticArrayQueue<T> {
    slots: Box<[Option<T>]>,
    front_index: usize,
    next_index: usize,
}

impl<T> StaticArrayQueue<T> {
    /// Creates an empty queue with `capacity` slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            front_index: 0,
            next_index: 0,
        }
    }

    /// Returns the number of slots in the block.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of slots that can still be written before the
    /// next restart.
    #[inline]
    #[must_use]
    pub fn remaining_slots(&self) -> usize {
        self.capacity() - self.next_index
    }

    /// Empties the queue and rewinds both indices to the start of the block.
    pub fn restart(&mut self) {
        self.slots.fill_with(|| None);
        self.front_index = 0;
        self.next_index = 0;
    }

    /// Returns an iterator over the elements from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[self.front_index..self.next_index]
            .iter()
            .filter_map(Option::as_ref)
    }
}

impl<T> Queue<T> for StaticArrayQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<(), CollectionError> {
        if self.next_index >= self.capacity() {
            return Err(CollectionError::capacity_exceeded(self.capacity()));
        }
        self.slots[self.next_index] = Some(value);
        self.next_index += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front_index].take();
        self.front_index += 1;
        value
    }

    fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front_index].as_ref()
    }

    fn rear(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.next_index - 1].as_ref()
    }

    #[inline]
    fn size(&self) -> usize {
        self.next_index - self.front_index
    }

    fn clear(&mut self) {
        self.restart();
    }
}

impl<T: fmt::Debug> fmt::Debug for StaticArrayQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("StaticArrayQueue")
            .field("capacity", &self.capacity())
            .field("remaining_slots", &self.remaining_slots())
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for StaticArrayQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.iter())
    }
}

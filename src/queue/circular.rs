//! Bounded queue over a fixed ring of slots.
//!
//! The backing block is allocated once, at construction, and is reused as a
//! logically rotating buffer: both indices advance modulo the capacity.
//!
//! ```text
//! capacity 5, after enqueue a b c d e, dequeue, enqueue f
//!
//!   slot:   0   1   2   3   4
//!         [ f | b | c | d | e ]
//!           ^   ^
//!        rear   front
//! ```
//!
//! Because a full ring and an empty ring can both show
//! `front_index == rear_index + 1 (mod capacity)`, the element count is the
//! only thing consulted to decide emptiness or fullness.

use std::fmt;

use super::Queue;
use crate::error::CollectionError;
use crate::list::display_sequence;

/// A fixed-capacity FIFO queue backed by a ring buffer.
///
/// # Invariants
///
/// - `front_index < capacity` and `rear_index < capacity` (for a non-zero
///   capacity)
/// - a slot holds a value exactly when it lies on the cyclic arc from
///   `front_index` to `rear_index`, inclusive, and `size() > 0`
/// - `size() <= capacity()`
///
/// # Time Complexity
///
/// Every operation is O(1); nothing is allocated after [`CircularQueue::new`].
///
/// # Examples
///
/// ```rust
/// use linear_collections::queue::{CircularQueue, Queue};
/// use linear_collections::CollectionError;
///
/// let mut queue = CircularQueue::new(2);
/// queue.enqueue('a').unwrap();
/// queue.enqueue('b').unwrap();
/// assert_eq!(
///     queue.enqueue('c'),
///     Err(CollectionError::CapacityExceeded { capacity: 2 })
/// );
///
/// assert_eq!(queue.dequeue(), Some('a'));
/// queue.enqueue('c').unwrap();
/// assert_eq!(queue.rear_index(), 0);
/// assert_eq!(queue.slot(0), Ok(Some(&'c')));
/// ```
#[derive(Clone)]
pub struct CircularQueue<T> {
    slots: Box<[Option<T>]>,
    front_index: usize,
    rear_index: usize,
    current_size: usize,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue that can hold `capacity` elements.
    ///
    /// The rear index starts on the last slot so that the first enqueue
    /// wraps onto slot 0.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            front_index: 0,
            rear_index: capacity.saturating_sub(1),
            current_size: 0,
        }
    }

    /// Returns the fixed number of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if every slot is populated.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.current_size == self.capacity()
    }

    /// Returns the slot index of the front element.
    #[inline]
    #[must_use]
    pub const fn front_index(&self) -> usize {
        self.front_index
    }

    /// Returns the slot index most recently written by `enqueue`.
    #[inline]
    #[must_use]
    pub const fn rear_index(&self) -> usize {
        self.rear_index
    }

    /// Returns the raw content of slot `index`, `None` when unpopulated.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidIndex`] if `index >= capacity()`.
    pub fn slot(&self, index: usize) -> Result<Option<&T>, CollectionError> {
        self.slots
            .get(index)
            .map(Option::as_ref)
            .ok_or_else(|| CollectionError::invalid_index(index, self.capacity()))
    }

    /// Returns an iterator over the elements from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.current_size)
            .filter_map(move |offset| self.slots[(self.front_index + offset) % capacity].as_ref())
    }

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }
}

impl<T> Queue<T> for CircularQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(CollectionError::capacity_exceeded(self.capacity()));
        }
        let slot = self.advance(self.rear_index);
        self.slots[slot] = Some(value);
        self.rear_index = slot;
        self.current_size += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.current_size == 0 {
            return None;
        }
        let value = self.slots[self.front_index].take();
        self.front_index = self.advance(self.front_index);
        self.current_size -= 1;
        value
    }

    fn front(&self) -> Option<&T> {
        if self.current_size == 0 {
            return None;
        }
        self.slots[self.front_index].as_ref()
    }

    fn rear(&self) -> Option<&T> {
        if self.current_size == 0 {
            return None;
        }
        self.slots[self.rear_index].as_ref()
    }

    #[inline]
    fn size(&self) -> usize {
        self.current_size
    }

    fn clear(&mut self) {
        self.slots.fill_with(|| None);
        self.front_index = 0;
        self.rear_index = self.capacity().saturating_sub(1);
        self.current_size = 0;
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CircularQueue")
            .field("capacity", &self.capacity())
            .field("front_index", &self.front_index)
            .field("rear_index", &self.rear_index)
            .field("elements", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.iter())
    }
}

static_assertions::assert_impl_all!(CircularQueue<i32>: Send, Sync, Clone);

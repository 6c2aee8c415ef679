//! Unbounded queue over a growable array.

use std::collections::VecDeque;
use std::fmt;

use super::Queue;
use crate::error::CollectionError;
use crate::list::display_sequence;

/// An unbounded FIFO queue that grows its backing array on demand.
///
/// This is the reference queue the property tests compare the other
/// variants against.
///
/// # Examples
///
/// ```rust
/// use linear_collections::queue::{DynamicArrayQueue, Queue};
///
/// let mut queue: DynamicArrayQueue<i32> = (1..=3).collect();
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.rear(), Some(&3));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.size(), 2);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DynamicArrayQueue<T> {
    elements: VecDeque<T>,
}

impl<T> DynamicArrayQueue<T> {
    /// Creates an empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: VecDeque::new(),
        }
    }

    /// Returns an iterator over the elements from front to rear.
    #[inline]
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Queue<T> for DynamicArrayQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<(), CollectionError> {
        self.elements.push_back(value);
        Ok(())
    }

    fn dequeue(&mut self) -> Option<T> {
        self.elements.pop_front()
    }

    fn front(&self) -> Option<&T> {
        self.elements.front()
    }

    fn rear(&self) -> Option<&T> {
        self.elements.back()
    }

    #[inline]
    fn size(&self) -> usize {
        self.elements.len()
    }

    fn clear(&mut self) {
        self.elements = VecDeque::new();
    }
}

impl<T> FromIterator<T> for DynamicArrayQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for DynamicArrayQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArrayQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArrayQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.iter())
    }
}

//! Bounded stack over a fixed block.

use std::fmt;

use super::Stack;
use crate::error::CollectionError;
use crate::list::display_sequence;

/// A fixed-capacity LIFO stack.
///
/// The block is reserved up front and never grows; a push onto a full stack
/// fails with [`CollectionError::CapacityExceeded`].
///
/// # Examples
///
/// ```rust
/// use linear_collections::stack::{ArrayStack, Stack};
///
/// let mut stack = ArrayStack::new(2);
/// stack.push('a').unwrap();
/// stack.push('b').unwrap();
/// assert!(stack.push('c').is_err());
///
/// assert_eq!(stack.bottom(), Some(&'a'));
/// assert_eq!(stack.pop(), Some('b'));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayStack<T> {
    elements: Vec<T>,
    capacity: usize,
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack that can hold `capacity` elements.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if no more elements can be pushed.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    /// Returns an iterator over the elements from bottom to top.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> Stack<T> for ArrayStack<T> {
    fn push(&mut self, value: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(CollectionError::capacity_exceeded(self.capacity));
        }
        self.elements.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    fn top(&self) -> Option<&T> {
        self.elements.last()
    }

    fn bottom(&self) -> Option<&T> {
        self.elements.first()
    }

    #[inline]
    fn size(&self) -> usize {
        self.elements.len()
    }

    /// The reversed stack keeps the source capacity.
    fn to_reverse(&self) -> Self
    where
        T: Clone,
    {
        let mut elements = Vec::with_capacity(self.capacity);
        elements.extend(self.elements.iter().rev().cloned());
        Self {
            elements,
            capacity: self.capacity,
        }
    }

    fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    fn clear(&mut self) {
        self.elements = Vec::with_capacity(self.capacity);
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ArrayStack")
            .field("capacity", &self.capacity)
            .field("elements", &self.elements)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_sequence(formatter, self.iter())
    }
}

static_assertions::assert_impl_all!(ArrayStack<i32>: Send, Sync, Clone);

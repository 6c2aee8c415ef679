//! Last-in first-out stacks.
//!
//! This module provides the [`Stack`] contract and three implementations:
//!
//! - [`ArrayStack`]: bounded, backed by a fixed block
//! - [`LinkedStack`]: unbounded, backed by a chain of [`Node`]s
//! - [`QueueStack`]: LIFO built only from two [`LinkedQueue`]s
//!
//! [`Node`]: crate::list::Node
//! [`LinkedQueue`]: crate::queue::LinkedQueue
//!
//! # Examples
//!
//! ```rust
//! use linear_collections::stack::{ArrayStack, LinkedStack, QueueStack, Stack};
//!
//! fn fill<S: Stack<i32>>(mut stack: S) -> S {
//!     for value in 1..=3 {
//!         stack.push(value).unwrap();
//!     }
//!     stack
//! }
//!
//! let array = fill(ArrayStack::new(3));
//! let linked = fill(LinkedStack::new());
//! let adapted = fill(QueueStack::new());
//!
//! assert_eq!(array.traverse(), vec![1, 2, 3]);
//! assert_eq!(linked.top(), Some(&3));
//! assert_eq!(adapted.to_reverse().traverse(), vec![3, 2, 1]);
//! ```

use crate::error::CollectionError;

mod array;
mod linked;
mod two_queues;

pub use array::ArrayStack;
pub use linked::LinkedStack;
pub use two_queues::QueueStack;

/// The contract shared by every stack.
///
/// Removal and peeks on an empty stack return `None`; emptiness is never an
/// error. Only bounded stacks can fail to push.
pub trait Stack<T> {
    /// Places `value` on top.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if the stack is bounded
    /// and full. The stack is left unchanged.
    fn push(&mut self, value: T) -> Result<(), CollectionError>;

    /// Removes and returns the top element.
    fn pop(&mut self) -> Option<T>;

    /// Returns the element that the next `pop` would remove.
    fn top(&self) -> Option<&T>;

    /// Returns the oldest element still on the stack.
    fn bottom(&self) -> Option<&T>;

    /// Returns `true` if the stack holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the number of elements on the stack.
    fn size(&self) -> usize;

    /// Returns a new stack holding the same elements in the opposite order.
    ///
    /// The source stack is not modified.
    #[must_use]
    fn to_reverse(&self) -> Self
    where
        Self: Sized,
        T: Clone;

    /// Returns the elements from bottom to top without modifying the stack.
    fn traverse(&self) -> Vec<T>
    where
        T: Clone;

    /// Removes every element.
    fn clear(&mut self);
}

const _: Option<&dyn Stack<i32>> = None;

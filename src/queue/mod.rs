//! First-in first-out queues.
//!
//! This module provides the [`Queue`] contract and five implementations:
//!
//! - [`CircularQueue`]: bounded ring buffer with wraparound indexing
//! - [`DynamicArrayQueue`]: unbounded, backed by a growable array
//! - [`StaticArrayQueue`]: bounded, slots are never reused until cleared
//! - [`LinkedQueue`]: unbounded linked chain with head and tail links
//! - [`StackQueue`]: FIFO built only from two [`LinkedStack`]s
//!
//! [`LinkedStack`]: crate::stack::LinkedStack
//!
//! # Examples
//!
//! ```rust
//! use linear_collections::queue::{CircularQueue, Queue, StackQueue};
//!
//! fn drain<Q: Queue<i32>>(queue: &mut Q) -> Vec<i32> {
//!     std::iter::from_fn(|| queue.dequeue()).collect()
//! }
//!
//! let mut bounded = CircularQueue::new(4);
//! let mut adapted = StackQueue::new();
//! for value in 1..=4 {
//!     bounded.enqueue(value).unwrap();
//!     adapted.enqueue(value).unwrap();
//! }
//! assert_eq!(drain(&mut bounded), vec![1, 2, 3, 4]);
//! assert_eq!(drain(&mut adapted), vec![1, 2, 3, 4]);
//! ```

use crate::error::CollectionError;

mod circular;
mod dynamic_array;
mod linked;
mod static_array;
mod two_stacks;

pub use circular::CircularQueue;
pub use dynamic_array::DynamicArrayQueue;
pub use linked::{LinkedQueue, LinkedQueueIter};
pub use static_array::StaticArrayQueue;
pub use two_stacks::StackQueue;

/// The contract shared by every queue.
///
/// Removal and peeks on an empty queue return `None`; emptiness is never an
/// error. Only bounded queues can fail to enqueue.
pub trait Queue<T> {
    /// Appends `value` at the rear.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::CapacityExceeded`] if the queue is bounded
    /// and full. The queue is left unchanged.
    fn enqueue(&mut self, value: T) -> Result<(), CollectionError>;

    /// Removes and returns the front element.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns the element that the next `dequeue` would remove.
    fn front(&self) -> Option<&T>;

    /// Returns the most recently enqueued element still in the queue.
    fn rear(&self) -> Option<&T>;

    /// Returns `true` if the queue holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the number of elements in the queue.
    fn size(&self) -> usize;

    /// Removes every element.
    fn clear(&mut self);
}

const _: Option<&dyn Queue<i32>> = None;

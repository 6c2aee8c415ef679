//! # linear-collections
//!
//! Classic linear data structures and elementary algorithms, each written
//! against a small shared contract so that every variant of a family can be
//! exercised by the same test suite.
//!
//! ## Overview
//!
//! - **Lists**: singly linked lists ([`list::SinglyLinkedList`],
//!   [`list::DummyNodeList`]) behind the [`list::LinkedList`] trait
//! - **Queues**: a bounded ring buffer ([`queue::CircularQueue`]), a
//!   dynamic-array queue, a static-array queue, a linked queue and a queue
//!   built from two stacks, all behind the [`queue::Queue`] trait
//! - **Stacks**: an array stack, a linked stack and a stack built from two
//!   queues, all behind the [`stack::Stack`] trait
//! - **Search**: linear, binary and recursive binary search
//! - **Sort**: insertion and selection sort
//!
//! ## Feature Flags
//!
//! - `list`: Singly linked lists and [`list::Node`]
//! - `collections`: Queues and stacks (the two families depend on each other
//!   through their adapters, so they are enabled together; `queue` and
//!   `stack` are aliases)
//! - `search`: Search functions
//! - `sort`: Sort functions
//! - `text`: String helpers
//!
//! ## Example
//!
//! ```rust
//! use linear_collections::prelude::*;
//!
//! let mut queue = CircularQueue::new(3);
//! queue.enqueue(1).unwrap();
//! queue.enqueue(2).unwrap();
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.front(), Some(&2));
//!
//! let mut stack = QueueStack::new();
//! stack.push('a').unwrap();
//! stack.push('b').unwrap();
//! assert_eq!(stack.pop(), Some('b'));
//! ```
//!
//! ## Concurrency
//!
//! Every structure is single-threaded and synchronous. None of them is safe
//! for concurrent mutation; callers that share a container across threads
//! must serialize access themselves.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the contracts, every variant and the error type.
///
/// # Usage
///
/// ```rust
/// use linear_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::CollectionError;

    #[cfg(feature = "list")]
    pub use crate::list::*;

    #[cfg(feature = "collections")]
    pub use crate::queue::*;

    #[cfg(feature = "collections")]
    pub use crate::stack::*;

    #[cfg(feature = "search")]
    pub use crate::search::*;

    #[cfg(feature = "sort")]
    pub use crate::sort::*;

    #[cfg(feature = "text")]
    pub use crate::text::*;
}

pub mod error;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "collections")]
pub mod queue;

#[cfg(feature = "collections")]
pub mod stack;

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "sort")]
pub mod sort;

#[cfg(feature = "text")]
pub mod text;

pub use error::CollectionError;

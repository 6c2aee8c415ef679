//! Unbounded stack over a chain of nodes.

use std::fmt;
use std::iter::FromIterator;

use super::Stack;
use crate::error::CollectionError;
use crate::list::{Iter, Node, display_sequence, unlink_chain};

/// An unbounded LIFO stack built on [`Node`].
///
/// The top of the stack is the head of the chain, so `push`, `pop` and `top`
/// are O(1). `bottom` walks the whole chain and is O(n).
///
/// # Examples
///
/// ```rust
/// use linear_collections::stack::{LinkedStack, Stack};
///
/// let mut stack: LinkedStack<i32> = (1..=3).collect();
/// assert_eq!(stack.top(), Some(&3));
/// assert_eq!(stack.bottom(), Some(&1));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.traverse(), vec![1, 2]);
/// ```
pub struct LinkedStack<T> {
    top: Option<Box<Node<T>>>,
    length: usize,
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            top: None,
            length: 0,
        }
    }

    /// Returns an iterator over the elements from top to bottom.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.top.as_deref(), self.length)
    }

    /// Infallible push used by the adapters that move elements between
    /// stacks.
    pub(crate) fn push_top(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }));
        self.length += 1;
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, value: T) -> Result<(), CollectionError> {
        self.push_top(value);
        Ok(())
    }

    fn pop(&mut self) -> Option<T> {
        let mut node = self.top.take()?;
        self.top = node.next.take();
        self.length -= 1;
        Some(node.value)
    }

    fn top(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.value)
    }

    fn bottom(&self) -> Option<&T> {
        self.iter().last()
    }

    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    fn to_reverse(&self) -> Self
    where
        T: Clone,
    {
        let mut reversed = Self::new();
        for value in self.iter() {
            reversed.push_top(value.clone());
        }
        reversed
    }

    fn traverse(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values: Vec<T> = self.iter().cloned().collect();
        values.reverse();
        values
    }

    fn clear(&mut self) {
        unlink_chain(self.top.take());
        self.length = 0;
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        unlink_chain(self.top.take());
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        self.traverse().into_iter().collect()
    }
}

/// Pushes the elements in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_top(value);
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedStack<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&T> = self.iter().collect();
        formatter.debug_list().entries(values.into_iter().rev()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&T> = self.iter().collect();
        display_sequence(formatter, values.into_iter().rev())
    }
}

static_assertions::assert_impl_all!(LinkedStack<i32>: Send, Sync, Default, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_push_and_pop_follow_lifo() {
        let mut stack = LinkedStack::new();
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert_eq!(stack.pop(), Some('b'));
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.size(), 0);
    }

    #[rstest]
    fn test_bottom_walks_to_last_node() {
        let stack: LinkedStack<i32> = (1..=5).collect();
        assert_eq!(stack.bottom(), Some(&1));
        assert_eq!(stack.top(), Some(&5));
    }

    #[rstest]
    fn test_iter_runs_top_to_bottom() {
        let stack: LinkedStack<i32> = (1..=3).collect();
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(stack.traverse(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_clone_preserves_order() {
        let stack: LinkedStack<i32> = (1..=3).collect();
        let copy = stack.clone();
        assert_eq!(copy, stack);
        assert_eq!(copy.top(), Some(&3));
    }

    #[rstest]
    fn test_display_and_debug_bottom_to_top() {
        let stack: LinkedStack<i32> = (1..=3).collect();
        assert_eq!(format!("{stack}"), "[1, 2, 3]");
        assert_eq!(format!("{stack:?}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_drop_deep_stack() {
        let stack: LinkedStack<u32> = (0..200_000).collect();
        assert_eq!(stack.size(), 200_000);
        drop(stack);
    }
}

//! Property-based tests for the stack implementations.
//!
//! `ArrayStack` wraps a `Vec` directly and serves as the reference that the
//! chain-backed and queue-backed stacks are compared against.

use linear_collections::stack::{ArrayStack, LinkedStack, QueueStack, Stack};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating operation sequences
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Push(i32),
    Pop,
    Clear,
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        6 => any::<i32>().prop_map(Operation::Push),
        3 => Just(Operation::Pop),
        1 => Just(Operation::Clear),
    ]
}

fn operations(max_size: usize) -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(operation_strategy(), 0..max_size)
}

fn small_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..40)
}

fn assert_matches_reference(
    candidate: &mut dyn Stack<i32>,
    operations: &[Operation],
) -> Result<(), TestCaseError> {
    let mut reference = ArrayStack::new(operations.len());
    for operation in operations {
        match operation {
            Operation::Push(value) => {
                prop_assert_eq!(candidate.push(*value), reference.push(*value));
            }
            Operation::Pop => {
                prop_assert_eq!(candidate.pop(), reference.pop());
            }
            Operation::Clear => {
                candidate.clear();
                reference.clear();
            }
        }
        prop_assert_eq!(candidate.size(), reference.size());
        prop_assert_eq!(candidate.top(), reference.top());
        prop_assert_eq!(candidate.bottom(), reference.bottom());
        prop_assert_eq!(candidate.traverse(), reference.traverse());
    }
    Ok(())
}

fn filled<S: Stack<i32>>(mut stack: S, values: &[i32]) -> S {
    for value in values {
        stack.push(*value).unwrap();
    }
    stack
}

proptest! {
    // =========================================================================
    // Equivalence with the reference stack
    // =========================================================================

    #[test]
    fn prop_linked_stack_matches_reference(operations in operations(150)) {
        assert_matches_reference(&mut LinkedStack::new(), &operations)?;
    }

    #[test]
    fn prop_queue_stack_matches_reference(operations in operations(150)) {
        assert_matches_reference(&mut QueueStack::new(), &operations)?;
    }

    // =========================================================================
    // Reversal
    // =========================================================================

    #[test]
    fn prop_reverse_twice_is_identity(values in small_values()) {
        let linked = filled(LinkedStack::new(), &values);
        prop_assert_eq!(linked.to_reverse().to_reverse().traverse(), values.clone());

        let adapted = filled(QueueStack::new(), &values);
        prop_assert_eq!(adapted.to_reverse().to_reverse().traverse(), values.clone());

        let array = filled(ArrayStack::new(values.len()), &values);
        prop_assert_eq!(array.to_reverse().to_reverse().traverse(), values);
    }

    #[test]
    fn prop_reverse_reverses_traverse(values in small_values()) {
        let mut expected = values.clone();
        expected.reverse();

        prop_assert_eq!(filled(LinkedStack::new(), &values).to_reverse().traverse(), expected.clone());
        prop_assert_eq!(filled(QueueStack::new(), &values).to_reverse().traverse(), expected.clone());
        prop_assert_eq!(filled(ArrayStack::new(values.len()), &values).to_reverse().traverse(), expected);
    }

    #[test]
    fn prop_reverse_strategies_agree(values in small_values()) {
        let stack = filled(QueueStack::new(), &values);
        prop_assert_eq!(stack.to_reverse().traverse(), stack.to_reverse_by_traverse().traverse());
    }

    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_pop_yields_reverse_push_order(values in small_values()) {
        let mut stack = filled(QueueStack::new(), &values);
        let mut popped = Vec::with_capacity(values.len());
        while let Some(value) = stack.pop() {
            popped.push(value);
        }
        popped.reverse();
        prop_assert_eq!(popped, values);
    }

    #[test]
    fn prop_top_and_bottom_match_ends(values in small_values()) {
        let stack = filled(LinkedStack::new(), &values);
        prop_assert_eq!(stack.top(), values.last());
        prop_assert_eq!(stack.bottom(), values.first());
        prop_assert_eq!(stack.size(), values.len());
    }

    #[test]
    fn prop_array_stack_never_exceeds_capacity(
        capacity in 0_usize..16,
        values in small_values(),
    ) {
        let mut stack = ArrayStack::new(capacity);
        let accepted = values.iter().filter(|value| stack.push(**value).is_ok()).count();
        prop_assert_eq!(accepted, values.len().min(capacity));
        prop_assert_eq!(stack.size(), accepted);
    }
}

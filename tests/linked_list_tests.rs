//! Contract tests shared by both linked list implementations.

use linear_collections::CollectionError;
use linear_collections::list::{DummyNodeList, LinkedList, Node, SinglyLinkedList};
use rstest::rstest;

macro_rules! linked_list_contract_suite {
    ($module:ident, $list:ty) => {
        mod $module {
            use super::*;

            fn built(values: &[&'static str]) -> $list {
                let mut list = <$list>::new();
                for (index, &value) in values.iter().enumerate() {
                    list.insert_at(index, value).unwrap();
                }
                list
            }

            fn value_at(list: &$list, index: usize) -> &'static str {
                list.at(index).unwrap().value
            }

            // =================================================================
            // insert_at
            // =================================================================

            #[rstest]
            fn test_insert_into_empty_list() {
                let mut list = <$list>::new();
                let inserted = list.insert_at(0, "a").unwrap();
                assert_eq!(inserted.value, "a");
                assert_eq!(value_at(&list, 0), "a");
                assert_eq!(list.size(), 1);
            }

            #[rstest]
            fn test_insert_at_head_of_non_empty_list() {
                let mut list = built(&["a", "b"]);
                list.insert_at(0, "x").unwrap();
                assert_eq!(list.traverse(), vec!["x", "a", "b"]);
                assert_eq!(list.size(), 3);
            }

            #[rstest]
            fn test_insert_in_the_middle() {
                let mut list = built(&["A", "B"]);
                list.insert_at(1, "C").unwrap();
                assert_eq!(list.traverse(), vec!["A", "C", "B"]);
            }

            #[rstest]
            fn test_insert_at_size_appends() {
                let mut list = built(&["A", "B", "C"]);
                let size = list.size();
                let inserted = list.insert_at(size, "X").unwrap();
                assert_eq!(inserted.value, "X");
                assert!(inserted.next().is_none());
                assert_eq!(value_at(&list, 2), "C");
                assert_eq!(value_at(&list, 3), "X");
                assert_eq!(list.size(), 4);
            }

            #[rstest]
            #[case(&[], 1)]
            #[case(&["a", "b"], 3)]
            #[case(&["a", "b"], usize::MAX)]
            fn test_insert_past_end_fails(#[case] values: &[&'static str], #[case] index: usize) {
                let mut list = built(values);
                let result = list.insert_at(index, "c").map(|node| node.value);
                assert_eq!(
                    result,
                    Err(CollectionError::InvalidIndex {
                        index,
                        size: values.len()
                    })
                );
                assert_eq!(list.size(), values.len());
                assert_eq!(list.traverse(), values.to_vec());
            }

            // =================================================================
            // remove_at
            // =================================================================

            #[rstest]
            fn test_remove_only_node() {
                let mut list = built(&["10"]);
                let removed = list.remove_at(0).unwrap();
                assert_eq!(removed.value, "10");
                assert!(removed.next().is_none());
                assert!(list.is_empty());
            }

            #[rstest]
            #[case(0, "10", vec!["20", "30", "40"])]
            #[case(2, "30", vec!["10", "20", "40"])]
            #[case(3, "40", vec!["10", "20", "30"])]
            fn test_remove_at(
                #[case] index: usize,
                #[case] expected: &'static str,
                #[case] rest: Vec<&'static str>,
            ) {
                let mut list = built(&["10", "20", "30", "40"]);
                let removed = list.remove_at(index).unwrap();
                assert_eq!(removed.into_value(), expected);
                assert_eq!(list.size(), 3);
                assert_eq!(list.traverse(), rest);
            }

            #[rstest]
            #[case(&[], 0)]
            #[case(&["10"], 1)]
            #[case(&["10", "20"], 7)]
            fn test_remove_out_of_range_fails(
                #[case] values: &[&'static str],
                #[case] index: usize,
            ) {
                let mut list = built(values);
                let result = list.remove_at(index).map(Node::into_value);
                assert_eq!(
                    result,
                    Err(CollectionError::InvalidIndex {
                        index,
                        size: values.len()
                    })
                );
                assert_eq!(list.size(), values.len());
            }

            // =================================================================
            // at
            // =================================================================

            #[rstest]
            #[case(0, "A")]
            #[case(1, "B")]
            #[case(2, "C")]
            fn test_at(#[case] index: usize, #[case] expected: &'static str) {
                let mut list = <$list>::new();
                list.insert_at(0, "C").unwrap();
                list.insert_at(0, "B").unwrap();
                list.insert_at(0, "A").unwrap();
                assert_eq!(value_at(&list, index), expected);
            }

            #[rstest]
            fn test_at_links_to_successor() {
                let list = built(&["A", "B"]);
                let first = list.at(0).unwrap();
                assert_eq!(first.next().map(|node| node.value), Some("B"));
            }

            #[rstest]
            #[case(&[], 0)]
            #[case(&["A", "B"], 2)]
            fn test_at_out_of_range_fails(#[case] values: &[&'static str], #[case] index: usize) {
                let list = built(values);
                assert!(matches!(
                    list.at(index),
                    Err(CollectionError::InvalidIndex { .. })
                ));
            }

            // =================================================================
            // search / traverse / size / clear
            // =================================================================

            #[rstest]
            fn test_search_returns_first_match() {
                let list = built(&["A", "B", "A"]);
                let found = list.search(&"A").unwrap();
                assert_eq!(found.value, "A");
                assert_eq!(found.next().map(|node| node.value), Some("B"));
            }

            #[rstest]
            fn test_search_missing_returns_none() {
                assert!(built(&["A", "B"]).search(&"Z").is_none());
                assert!(built(&[]).search(&"Z").is_none());
            }

            #[rstest]
            fn test_traverse_empty_list() {
                assert!(built(&[]).traverse().is_empty());
            }

            #[rstest]
            fn test_size_follows_inserts_and_removals() {
                let mut list = built(&["a", "b", "c"]);
                assert_eq!(list.size(), 3);
                list.remove_at(1).unwrap();
                assert_eq!(list.size(), 2);
                list.insert_at(2, "d").unwrap();
                assert_eq!(list.size(), 3);
                assert_eq!(list.traverse(), vec!["a", "c", "d"]);
            }

            #[rstest]
            fn test_clear_allows_reuse() {
                let mut list = built(&["a", "b", "c"]);
                list.clear();
                assert!(list.is_empty());
                assert!(list.at(0).is_err());
                list.insert_at(0, "z").unwrap();
                assert_eq!(list.traverse(), vec!["z"]);
            }
        }
    };
}

linked_list_contract_suite!(singly_linked_list, SinglyLinkedList<&'static str>);
linked_list_contract_suite!(dummy_node_list, DummyNodeList<&'static str>);

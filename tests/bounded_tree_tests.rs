//! Unit tests for BoundedTree.
//!
//! Scenario tests for construction, capacity, lookup, deletion, traversal,
//! range extraction and leaf collection.

use bounded_tree::prelude::*;
use rstest::{fixture, rstest};
use std::cell::RefCell;
use std::cmp::Ordering;

type IntTree = BoundedTree<i32, String, fn(&i32, &i32) -> Ordering>;

fn compare_integers(left: &i32, right: &i32) -> Ordering {
    left.cmp(right)
}

fn tree_with(capacity: usize, entries: &[(i32, &str)]) -> IntTree {
    let mut tree: IntTree = BoundedTree::new(compare_integers as fn(&i32, &i32) -> Ordering, capacity)
        .unwrap();
    for (key, value) in entries {
        tree.insert(*key, (*value).to_string()).unwrap();
    }
    tree
}

/// The seven-key balanced tree rooted at 5, all values "a".
#[fixture]
fn seven_keys() -> IntTree {
    tree_with(
        10,
        &[(5, "a"), (3, "a"), (7, "a"), (2, "a"), (4, "a"), (6, "a"), (8, "a")],
    )
}

/// The seven-key balanced tree rooted at 5, values "a" through "g".
#[fixture]
fn lettered() -> IntTree {
    tree_with(
        7,
        &[(5, "d"), (3, "b"), (7, "f"), (2, "a"), (4, "c"), (6, "e"), (8, "g")],
    )
}

fn keys_of(tree: &IntTree) -> Vec<i32> {
    let mut keys = Vec::new();
    tree.process_inorder(|key, _| keys.push(*key));
    keys
}

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_tree() {
    let tree = tree_with(10, &[]);
    assert!(tree.is_empty());
    assert!(!tree.is_full());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.capacity(), 10);
    assert_eq!(tree.policy(), CapacityPolicy::Strict);
}

#[rstest]
fn test_new_rejects_zero_capacity() {
    let result: Result<BoundedTree<i32, String>, _> = BoundedTree::new(NaturalOrder, 0);
    assert!(matches!(result, Err(TreeError::InvalidArgument { .. })));
}

#[rstest]
fn test_with_natural_order_single_slot() {
    let mut tree = BoundedTree::with_natural_order(1).unwrap();
    tree.insert("only", 1).unwrap();
    assert!(tree.is_full());
    assert_eq!(tree.remaining_capacity(), 0);
}

// =============================================================================
// Insert Tests
// =============================================================================

#[rstest]
fn test_insert_orders_keys(seven_keys: IntTree) {
    assert_eq!(seven_keys.to_string(), "{2:a}{3:a}{4:a}{5:a}{6:a}{7:a}{8:a}");
    assert_eq!(seven_keys.len(), 7);
}

#[rstest]
fn test_insert_existing_key_overwrites_value(mut seven_keys: IntTree) {
    let previous = seven_keys.insert(4, "z".to_string()).unwrap();

    assert_eq!(previous, Some("a".to_string()));
    assert_eq!(seven_keys.len(), 7);
    assert_eq!(seven_keys.get(&4), Some(&"z".to_string()));
}

#[rstest]
fn test_insert_into_full_tree_fails() {
    let mut tree = tree_with(
        6,
        &[(5, "a"), (3, "a"), (7, "a"), (2, "a"), (4, "a"), (6, "a")],
    );
    let before = tree.to_string();

    assert_eq!(
        tree.insert(8, "a".to_string()),
        Err(TreeError::TreeFull { capacity: 6 })
    );
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.to_string(), before);
    assert_eq!(tree.find(&8), None);
}

#[rstest]
fn test_strict_full_tree_rejects_overwrite(lettered: IntTree) {
    let mut tree = lettered;
    assert!(tree.is_full());
    assert_eq!(
        tree.insert(5, "z".to_string()),
        Err(TreeError::TreeFull { capacity: 7 })
    );
    assert_eq!(tree.get(&5), Some(&"d".to_string()));
}

#[rstest]
fn test_allow_overwrite_full_tree_accepts_overwrite() {
    let config = TreeConfig::new(2)
        .unwrap()
        .with_policy(CapacityPolicy::AllowOverwrite);
    let mut tree = BoundedTree::with_config(NaturalOrder, config);
    tree.insert_all([(1, "a"), (2, "b")]).unwrap();

    assert_eq!(tree.insert(2, "B"), Ok(Some("b")));
    assert_eq!(tree.insert(3, "c"), Err(TreeError::TreeFull { capacity: 2 }));
    assert_eq!(tree.to_string(), "{1:a}{2:B}");
}

#[rstest]
fn test_insert_after_remove_reuses_capacity() {
    let mut tree = tree_with(2, &[(1, "a"), (2, "b")]);
    tree.remove(&1).unwrap();
    assert!(!tree.is_full());
    tree.insert(3, "c".to_string()).unwrap();
    assert_eq!(keys_of(&tree), vec![2, 3]);
}

// =============================================================================
// Find Tests
// =============================================================================

#[rstest]
fn test_find_on_empty_tree() {
    assert_eq!(tree_with(10, &[]).find(&5), None);
}

#[rstest]
#[case(4, Some("a"))]
#[case(2, Some("a"))]
#[case(8, Some("a"))]
#[case(10, None)]
#[case(0, None)]
fn test_find(seven_keys: IntTree, #[case] key: i32, #[case] expected: Option<&str>) {
    let found = seven_keys.find(&key);
    assert_eq!(
        found.as_ref().map(|pair| (*pair.key(), pair.value().as_str())),
        expected.map(|value| (key, value))
    );
    assert_eq!(seven_keys.contains_key(&key), expected.is_some());
}

#[rstest]
fn test_find_returns_detached_copy(seven_keys: IntTree) {
    let mut pair = seven_keys.find(&3).unwrap();
    pair.value_mut().push_str("changed");
    assert_eq!(seven_keys.get(&3), Some(&"a".to_string()));
}

// =============================================================================
// Minimum and Maximum Tests
// =============================================================================

#[rstest]
fn test_min_max_on_empty_tree() {
    let tree = tree_with(10, &[]);
    assert_eq!(tree.minimum_key_value(), Err(TreeError::TreeEmpty));
    assert_eq!(tree.maximum_key_value(), Err(TreeError::TreeEmpty));
    assert_eq!(tree.first_key_value(), None);
}

#[rstest]
fn test_min_max(lettered: IntTree) {
    let minimum = lettered.minimum_key_value().unwrap();
    let maximum = lettered.maximum_key_value().unwrap();

    assert_eq!((*minimum.key(), minimum.value().as_str()), (2, "a"));
    assert_eq!((*maximum.key(), maximum.value().as_str()), (8, "g"));
    assert_eq!(lettered.last_key_value(), Some((&8, &"g".to_string())));
}

#[rstest]
fn test_min_after_remove_min(mut seven_keys: IntTree) {
    seven_keys.remove(&2).unwrap();
    assert_eq!(seven_keys.minimum_key_value().unwrap().key(), &3);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[rstest]
fn test_remove_from_empty_tree_fails() {
    let mut tree = tree_with(10, &[]);
    assert_eq!(tree.remove(&1), Err(TreeError::TreeEmpty));
}

#[rstest]
fn test_remove_sequence() {
    let mut tree = tree_with(
        10,
        &[
            (5, "a"),
            (3, "a"),
            (7, "a"),
            (2, "a"),
            (4, "a"),
            (6, "a"),
            (8, "a"),
            (9, "a"),
            (1, "a"),
        ],
    );

    tree.remove(&2).unwrap();
    assert_eq!(tree.to_string(), "{1:a}{3:a}{4:a}{5:a}{6:a}{7:a}{8:a}{9:a}");

    tree.remove(&1).unwrap();
    tree.remove(&9).unwrap();
    assert_eq!(tree.to_string(), "{3:a}{4:a}{5:a}{6:a}{7:a}{8:a}");

    tree.remove(&5).unwrap();
    assert_eq!(tree.to_string(), "{3:a}{4:a}{6:a}{7:a}{8:a}");
    assert_eq!(tree.len(), 5);
}

#[rstest]
fn test_remove_returns_removed_entry(mut lettered: IntTree) {
    let removed = lettered.remove(&5).unwrap().unwrap();
    assert_eq!(removed.into_parts(), (5, "d".to_string()));
    assert_eq!(lettered.find(&5), None);
    assert_eq!(lettered.get(&6), Some(&"e".to_string()));
}

#[rstest]
fn test_remove_missing_key_does_not_change_length(mut seven_keys: IntTree) {
    assert_eq!(seven_keys.remove(&100), Ok(None));
    assert_eq!(seven_keys.len(), 7);
}

#[rstest]
fn test_remove_everything(mut seven_keys: IntTree) {
    for key in [5, 2, 8, 3, 7, 4, 6] {
        assert!(seven_keys.remove(&key).unwrap().is_some());
    }
    assert!(seven_keys.is_empty());
    assert_eq!(seven_keys.to_string(), EMPTY_TREE);
    assert_eq!(seven_keys.remove(&5), Err(TreeError::TreeEmpty));
}

// =============================================================================
// Traversal Tests
// =============================================================================

#[rstest]
fn test_process_inorder_visits_ascending(lettered: IntTree) {
    let mut incremented = String::new();
    lettered.process_inorder(|key, _| {
        incremented.push_str(&format!("{} ", key + 1));
    });
    assert_eq!(incremented, "3 4 5 6 7 8 9 ");
}

#[rstest]
fn test_process_inorder_pairs_keys_with_values(lettered: IntTree) {
    let seen = RefCell::new(Vec::new());
    lettered.process_inorder(|key, value| seen.borrow_mut().push(format!("{key}{value}")));
    assert_eq!(
        seen.into_inner(),
        vec!["2a", "3b", "4c", "5d", "6e", "7f", "8g"]
    );
}

#[rstest]
fn test_process_inorder_on_empty_tree_never_calls_back() {
    let mut calls = 0;
    tree_with(3, &[]).process_inorder(|_, _| calls += 1);
    assert_eq!(calls, 0);
}

// =============================================================================
// Sub-Tree Tests
// =============================================================================

#[rstest]
fn test_sub_tree_rejects_inverted_bounds(seven_keys: IntTree) {
    assert!(matches!(
        seven_keys.sub_tree(&3, &1),
        Err(TreeError::InvalidArgument { .. })
    ));
}

#[rstest]
fn test_sub_tree_of_empty_tree() {
    let range = tree_with(7, &[]).sub_tree(&3, &5).unwrap();
    assert_eq!(range.to_string(), "EMPTY TREE");
}

#[rstest]
#[case(4, 8, "{4:a}{5:a}{6:a}{7:a}{8:a}")]
#[case(1, 3, "{2:a}{3:a}")]
#[case(6, 100, "{6:a}{7:a}{8:a}")]
#[case(9, 12, "EMPTY TREE")]
#[case(5, 5, "{5:a}")]
fn test_sub_tree_bounds_are_inclusive(
    seven_keys: IntTree,
    #[case] lower: i32,
    #[case] upper: i32,
    #[case] expected: &str,
) {
    let range = seven_keys.sub_tree(&lower, &upper).unwrap();
    assert_eq!(range.to_string(), expected);
}

#[rstest]
fn test_sub_tree_is_independent(seven_keys: IntTree) {
    let mut range = seven_keys.sub_tree(&4, &8).unwrap();
    range.insert(4, "changed".to_string()).unwrap();
    range.remove(&8).unwrap();

    assert_eq!(seven_keys.get(&4), Some(&"a".to_string()));
    assert!(seven_keys.contains_key(&8));
    assert_eq!(range.capacity(), seven_keys.capacity());
}

// =============================================================================
// Leaf Tests
// =============================================================================

#[rstest]
fn test_leaf_values(lettered: IntTree) {
    let leaves: Vec<String> = lettered.leaf_values().into_iter().collect();
    assert_eq!(leaves, vec!["a", "c", "e", "g"]);
}

#[rstest]
fn test_leaf_values_deduplicates() {
    let tree = tree_with(5, &[(2, "x"), (1, "same"), (3, "same")]);
    assert_eq!(tree.leaf_values().len(), 1);
}

#[rstest]
fn test_leaf_values_single_node_is_leaf() {
    let tree = tree_with(5, &[(2, "root")]);
    assert!(tree.leaf_values().contains("root"));
}

#[rstest]
fn test_leaf_values_empty_tree() {
    assert!(tree_with(5, &[]).leaf_values().is_empty());
}

// =============================================================================
// Iterator Tests
// =============================================================================

#[rstest]
fn test_iter_matches_process_inorder(lettered: IntTree) {
    let from_iter: Vec<i32> = lettered.keys().copied().collect();
    assert_eq!(from_iter, keys_of(&lettered));
}

#[rstest]
fn test_values_in_key_order(lettered: IntTree) {
    let values: String = lettered.values().map(String::as_str).collect();
    assert_eq!(values, "abcdefg");
}

#[rstest]
fn test_ref_into_iterator(seven_keys: IntTree) {
    let mut count = 0;
    for (key, value) in &seven_keys {
        assert!(seven_keys.contains_key(key));
        assert_eq!(value, "a");
        count += 1;
    }
    assert_eq!(count, seven_keys.len());
}

// =============================================================================
// Large Tree Tests
// =============================================================================

#[rstest]
fn test_large_number_of_entries_in_reverse_order() {
    let mut tree = BoundedTree::with_natural_order(1000).unwrap();
    for key in (0..1000).rev() {
        tree.insert(key, key * 2).unwrap();
    }

    assert!(tree.is_full());
    assert_eq!(tree.height(), 1000);
    assert_eq!(tree.get(&500), Some(&1000));
    assert!(tree.keys().copied().eq(0..1000));
}

#[rstest]
fn test_many_insertions_and_deletions() {
    let mut tree = BoundedTree::with_natural_order(100).unwrap();
    for key in 0..100 {
        tree.insert((key * 37) % 100, key).unwrap();
    }
    for key in (0..100).filter(|key| key % 2 == 0) {
        tree.remove(&key).unwrap();
    }

    assert_eq!(tree.len(), 50);
    assert!(tree.keys().all(|key| key % 2 == 1));
    assert!(tree.keys().zip(tree.keys().skip(1)).all(|(left, right)| left < right));
}

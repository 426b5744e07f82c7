//! Correctness tests: the reference tree end to end

use indexed_bst::*;
use test_helpers::*;

#[test]
fn test_reference_tree_shape() {
    let tree = reference_tree();

    // 8 nodes in slots 0..=7, duplicates consumed nothing
    assert_eq!(tree.cursor(), Some(SlotIndex::new(7)));
    assert_eq!(tree.len(), 8);
    assert_eq!(
        tree.keys_by_slot().collect::<Vec<_>>(),
        vec![50, 10, 60, 25, 30, 92, 15, 67]
    );
    assert_eq!(tree.to_string(), "50 10 60 25 30 92 15 67");
    assert_eq!(tree.max_depth(SlotIndex::ROOT).unwrap(), 3);
    assert!(tree.validate_is_bst());
}

#[test]
fn test_reference_tree_in_order() {
    let tree = reference_tree();
    let keys: Vec<_> = tree.in_order(SlotIndex::ROOT).unwrap().collect();
    assert_eq!(keys, vec![10, 15, 25, 30, 50, 60, 67, 92]);
}

#[test]
fn test_reference_tree_searches() {
    let tree = reference_tree();

    for key in [92, 10, 67, 50] {
        let iterative = tree.find(key).unwrap();
        let recursive = tree.find_recursive(SlotIndex::ROOT, key).unwrap();
        assert_eq!(key_at(&tree, iterative), Some(key));
        assert_eq!(iterative, recursive, "search forms disagree on {key}");
    }

    for key in [5555, -55] {
        assert_eq!(tree.find(key).unwrap(), None);
        assert_eq!(tree.find_recursive(SlotIndex::ROOT, key).unwrap(), None);
    }
}

#[test]
fn test_reference_tree_subtree_extremes() {
    let tree = reference_tree();
    let root = tree.node(SlotIndex::ROOT).unwrap();
    let right = root.right.expect("root has a right subtree");
    let left = root.left.expect("root has a left subtree");

    let min_max = |slot| {
        (
            tree.key(tree.min_in_subtree(slot).unwrap()).unwrap(),
            tree.key(tree.max_in_subtree(slot).unwrap()).unwrap(),
        )
    };

    assert_eq!(min_max(right), (60, 92));
    assert_eq!(min_max(left), (10, 30));
    assert_eq!(min_max(SlotIndex::ROOT), (10, 92));
}

#[test]
fn test_reference_tree_sort_into_oversized_buffer() {
    let tree = reference_tree();
    let mut sorted = [0; 16];
    let written = tree.tree_sort_into(&mut sorted).unwrap();

    assert_eq!(written, 8);
    assert_eq!(
        sorted,
        [10, 15, 25, 30, 50, 60, 67, 92, 0, 0, 0, 0, 0, 0, 0, 0]
    );
    assert_eq!(&sorted[..written], tree.tree_sort().as_slice());
}

#[test]
fn test_repeated_sorts_do_not_accumulate() {
    let tree = reference_tree();
    let first = tree.tree_sort();
    let second = tree.tree_sort();
    assert_eq!(first, second);

    let mut a = [0; 8];
    let mut b = [0; 8];
    tree.tree_sort_into(&mut a).unwrap();
    tree.tree_sort_into(&mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_duplicates_leave_slots_untouched() {
    let mut tree = reference_tree();
    let before = tree.slots().to_vec();

    for key in [50, 10, 60, 25, 30, 92, 15, 67] {
        let outcome = tree.insert(key).unwrap();
        assert!(!outcome.is_inserted());
        assert_eq!(tree.key(outcome.slot()).unwrap(), key);
    }
    assert_eq!(tree.slots(), before.as_slice());
}

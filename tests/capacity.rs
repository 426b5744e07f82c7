//! Depth and capacity edge cases

use indexed_bst::*;
use test_case::test_case;
use test_helpers::*;

#[test_case(1 ; "single node")]
#[test_case(2 ; "two nodes")]
#[test_case(8 ; "short chain")]
#[test_case(100 ; "full default capacity")]
fn ascending_chain_depth(n: i32) {
    let keys: Vec<i32> = (0..n).collect();
    let tree = build_tree(&keys);
    assert_eq!(tree.max_depth(SlotIndex::ROOT).unwrap(), n as usize - 1);
    assert!(tree.validate_is_bst());
}

#[test_case(1 ; "single node")]
#[test_case(8 ; "short chain")]
#[test_case(100 ; "full default capacity")]
fn descending_chain_depth(n: i32) {
    let keys: Vec<i32> = (0..n).rev().collect();
    let tree = build_tree(&keys);
    assert_eq!(tree.max_depth(SlotIndex::ROOT).unwrap(), n as usize - 1);
    let min = tree.min_in_subtree(SlotIndex::ROOT).unwrap();
    assert_eq!(tree.key(min).unwrap(), 0);
}

#[test_case(1)]
#[test_case(3)]
#[test_case(100)]
fn insert_past_capacity_fails(capacity: usize) {
    let mut tree = IndexedBst::new(TreeConfig::with_capacity(capacity)).unwrap();
    for key in 0..capacity as i32 {
        assert!(tree.insert(key).unwrap().is_inserted());
    }
    let before = tree.slots().to_vec();

    let err = tree.insert(capacity as i32).unwrap_err();
    assert_eq!(err, TreeError::CapacityExceeded { capacity });
    assert_eq!(tree.slots(), before.as_slice());
    assert_eq!(tree.cursor(), Some(SlotIndex::new(capacity - 1)));
}

#[test]
fn default_capacity_matches_reference() {
    let mut tree = IndexedBst::create_root(0);
    for key in 1..DEFAULT_CAPACITY as i32 {
        tree.insert(key).unwrap();
    }
    assert_eq!(tree.len(), DEFAULT_CAPACITY);
    assert!(matches!(
        tree.insert(-1),
        Err(TreeError::CapacityExceeded { capacity: 100 })
    ));
}

#[test]
fn zero_capacity_is_rejected() {
    let err = IndexedBst::<i32>::new(TreeConfig::with_capacity(0)).unwrap_err();
    assert!(matches!(err, TreeError::InvalidConfiguration(_)));
    assert!(IndexedBst::create_root_with(1, TreeConfig::with_capacity(0)).is_err());
}

#[test]
fn balanced_insertion_order_keeps_depth_low() {
    let tree = build_tree(&[8, 4, 12, 2, 6, 10, 14, 1, 3, 5, 7, 9, 11, 13, 15]);
    assert_eq!(tree.max_depth(SlotIndex::ROOT).unwrap(), 3);
    assert_eq!(tree.height(), Some(3));
}

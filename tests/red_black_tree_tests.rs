#![cfg(feature = "binary-tree")]
//! Scenario tests for the red-black tree and the set and map built on it, driven through the
//! public API only.

use ordered_lib::collections::binary_tree::tree::{Color, NodeId, RangeError, RedBlackTree};
use ordered_lib::collections::binary_tree::{TreeMap, TreeSet};
use ordered_lib::collections::compare::Reverse;
use rstest::rstest;

fn set_of(items: &[i32]) -> TreeSet<i32> {
    items.iter().copied().collect()
}

fn items(set: &TreeSet<i32>) -> Vec<i32> {
    set.iter().copied().collect()
}

// =============================================================================
// Insertion
// =============================================================================

#[rstest]
#[case(1, 1, None, None)]
#[case(2, 1, None, Some(2))]
#[case(3, 2, Some(1), Some(3))]
#[case(4, 2, Some(1), Some(3))]
#[case(7, 2, Some(1), Some(4))]
fn test_ascending_insert_root(
    #[case] count: i32,
    #[case] root: i32,
    #[case] left: Option<i32>,
    #[case] right: Option<i32>,
) {
    let mut tree = RedBlackTree::new();
    for key in 1..=count {
        tree.insert(key, ());
    }

    let root_id = tree.root().unwrap();
    let key_of = |link: Option<NodeId>| link.map(|id| *tree.key(id).unwrap());
    assert_eq!(tree.key(root_id), Ok(&root));
    assert_eq!(tree.color(root_id), Ok(Color::Black), "The root should always be black.");
    assert_eq!(key_of(tree.left(root_id).unwrap()), left);
    assert_eq!(key_of(tree.right(root_id).unwrap()), right);
    assert!(tree.validate().is_ok());
}

#[rstest]
fn test_three_ascending_keys_balance() {
    let tree = [1, 2, 3].into_iter().map(|k| (k, ())).collect::<RedBlackTree<_, _>>();
    let root = tree.root().unwrap();
    let left = tree.left(root).unwrap().unwrap();
    let right = tree.right(root).unwrap().unwrap();

    assert_eq!(tree.key(root), Ok(&2));
    assert_eq!(tree.key(left), Ok(&1));
    assert_eq!(tree.key(right), Ok(&3));
    assert_eq!(tree.color(left), Ok(Color::Red));
    assert_eq!(tree.color(right), Ok(Color::Red));
}

#[rstest]
#[case(&[58490, 13829, 44828, 35725, 20384, 46283, 56369, 21807, 15590, 1520])]
#[case(&[60285, 11387, 34372, 49312, 52170, 30455, 52223, 41564, 53018, 3098])]
#[case(&[25875, 45077, 36617, 58448, 42128, 13655, 7077, 62936, 46937, 14427])]
#[case(&[5, 4, 3, 2, 1, 0, -1, -2, -3, -4])]
fn test_insert_keeps_order(#[case] keys: &[i32]) {
    let set = set_of(keys);
    let mut sorted = keys.to_vec();
    sorted.sort();

    assert_eq!(items(&set), sorted);
    assert!(set.validate().is_ok());
}

// =============================================================================
// Deletion
// =============================================================================

#[rstest]
fn test_delete_from_sample() {
    let keys = [
        58490, 13829, 44828, 35725, 20384, 46283, 56369, 21807, 15590, 1520, 60285, 11387, 34372,
        49312, 52170, 30455, 52223, 41564, 53018, 3098, 25875, 45077, 36617, 58448, 42128, 13655,
        7077, 62936, 46937, 14427,
    ];
    let mut set = set_of(&keys);

    let id = set.find(&20384).unwrap();
    assert_eq!(set.remove_node(id), Ok(20384));
    assert!(set.remove(&3098));

    assert_eq!(set.len(), 28);
    assert!(!set.contains(&20384));
    assert!(!set.contains(&3098));
    assert!(set.validate().is_ok());
}

#[rstest]
#[case(&[], 1, false)]
#[case(&[1], 1, true)]
#[case(&[1, 2, 3], 2, true)]
#[case(&[1, 2, 3], 4, false)]
fn test_remove_reports_presence(#[case] keys: &[i32], #[case] key: i32, #[case] present: bool) {
    let mut set = set_of(keys);
    assert_eq!(set.remove(&key), present);
    assert!(!set.remove(&key), "A second removal should always miss.");
    assert!(set.validate().is_ok());
}

// =============================================================================
// Range Erase
// =============================================================================

#[rstest]
#[case(10, Some(40), &[5, 40, 50])]
#[case(5, Some(5), &[5, 10, 15, 20, 24, 25, 26, 30, 40, 50])]
#[case(5, None, &[])]
#[case(30, None, &[5, 10, 15, 20, 24, 25, 26])]
#[case(20, Some(26), &[5, 10, 15, 26, 30, 40, 50])]
fn test_erase_range(#[case] begin: i32, #[case] end: Option<i32>, #[case] remaining: &[i32]) {
    let mut set = set_of(&[5, 10, 15, 20, 24, 25, 26, 30, 40, 50]);
    let begin = set.find(&begin).unwrap();
    let end = end.map(|end| set.find(&end).unwrap());

    let removed = set.erase(begin, end).unwrap();
    assert_eq!(removed, 10 - remaining.len());
    assert_eq!(items(&set), remaining);
    assert!(set.validate().is_ok());
}

#[rstest]
fn test_erase_rejects_reversed_range() {
    let mut set = set_of(&[1, 2, 3]);
    let begin = set.find(&3).unwrap();
    let end = set.find(&1);

    let error = set.erase(begin, end).unwrap_err();
    assert!(matches!(error, RangeError::InvalidRange(_)));
    assert_eq!(
        error.to_string(),
        format!("Range end {} precedes range start {}!", end.unwrap(), begin)
    );
    assert_eq!(set.len(), 3);
}

// =============================================================================
// Set Algebra
// =============================================================================

#[rstest]
#[case(&[1, 2, 3], &[3, 4, 5], &[1, 2, 3, 4, 5], &[3], &[1, 2], &[1, 2, 4, 5])]
#[case(&[], &[1, 2], &[1, 2], &[], &[], &[1, 2])]
#[case(&[1, 2], &[1, 2], &[1, 2], &[1, 2], &[], &[])]
#[case(&[1, 3, 5], &[2, 4, 6], &[1, 2, 3, 4, 5, 6], &[], &[1, 3, 5], &[1, 2, 3, 4, 5, 6])]
fn test_set_algebra(
    #[case] a: &[i32],
    #[case] b: &[i32],
    #[case] union: &[i32],
    #[case] intersection: &[i32],
    #[case] difference: &[i32],
    #[case] symmetric_difference: &[i32],
) {
    let (a, b) = (set_of(a), set_of(b));

    assert_eq!(items(&(&a | &b)), union);
    assert_eq!(items(&(&a & &b)), intersection);
    assert_eq!(items(&(&a - &b)), difference);
    assert_eq!(items(&(&a ^ &b)), symmetric_difference);
}

#[rstest]
#[case(&[1, 2], &[1, 2, 3], true, false, false)]
#[case(&[1, 2, 3], &[1, 2], false, true, false)]
#[case(&[1, 2], &[3, 4], false, false, true)]
#[case(&[], &[], true, true, true)]
fn test_set_relations(
    #[case] a: &[i32],
    #[case] b: &[i32],
    #[case] subset: bool,
    #[case] superset: bool,
    #[case] disjoint: bool,
) {
    let (a, b) = (set_of(a), set_of(b));

    assert_eq!(a.is_subset(&b), subset);
    assert_eq!(a.is_superset(&b), superset);
    assert_eq!(a.is_disjoint(&b), disjoint);
}

// =============================================================================
// Maps and Comparators
// =============================================================================

#[rstest]
fn test_map_in_reverse_order() {
    let mut map = TreeMap::with_comparator(Reverse);
    for (i, word) in ["zero", "one", "two", "three"].into_iter().enumerate() {
        map.insert(i, word);
    }

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1, 0]);
    assert_eq!(map[&2], "two");
    assert_eq!(map.to_string(), "{3: three, 2: two, 1: one, 0: zero}");
}

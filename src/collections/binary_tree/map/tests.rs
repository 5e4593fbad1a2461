#![cfg(test)]

use super::*;
use crate::collections::binary_tree::tree::StaleNode;
use crate::collections::compare::{DynComparator, Reverse};
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_insert_and_get() {
    let mut map = TreeMap::new();
    assert_eq!(map.insert("b", 2), None);
    assert_eq!(map.insert("a", 1), None);
    assert_eq!(map.insert("c", 3), None);
    assert_eq!(map.insert("b", 20), Some(2), "Re-inserting should return the old value.");

    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&"b"), Some(&20));
    assert_eq!(map.at(&"a"), Some(&1));
    assert_eq!(map.get(&"z"), None);
    assert!(map.contains_key(&"c"));
    assert!(!map.contains_key(&"d"));
    assert_eq!(map.get_key_value(&"c"), Some((&"c", &3)));

    *map.get_mut(&"a").unwrap() += 10;
    assert_eq!(map[&"a"], 11);
    map.validate().unwrap();
}

#[test]
fn test_borrowed_lookup() {
    let map = TreeMap::from([(String::from("one"), 1), (String::from("two"), 2)]);
    assert_eq!(map.get("one"), Some(&1), "String keys should be found by &str.");
    assert_eq!(map["two"], 2);
    assert!(map.find("three").is_none());
}

#[test]
fn test_index_panics_on_missing_key() {
    assert_panics!({
        let map = TreeMap::from([(1, 'a')]);
        map[&2]
    });

    assert_panics!({
        let mut map = TreeMap::from([(1, 'a'), (2, 'b')]);
        let id = map.find(&1).unwrap();
        map.remove(&1);
        map[id]
    });
}

#[test]
fn test_handles() {
    let mut map = TreeMap::new();
    let (id, old) = map.insert_entry(5, "five");
    assert_eq!(old, None);
    map.insert(3, "three");

    assert_eq!(map[id], "five");
    map[id] = "FIVE";
    assert_eq!(map.get(&5), Some(&"FIVE"));
    assert_eq!(map.entry(id), Ok((&5, &"FIVE")));

    *map.value_mut(id).unwrap() = "V";
    assert_eq!(map.remove_node(id), Ok((5, "V")));
    assert_eq!(map.remove_node(id), Err(StaleNode { id }));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_remove() {
    let mut map = (0..10).map(|i| (i, i * i)).collect::<TreeMap<_, _>>();

    assert_eq!(map.remove(&3), Some(9));
    assert_eq!(map.remove(&3), None, "A second removal should find nothing.");
    assert_eq!(map.remove_entry(&4), Some((4, 16)));
    assert_eq!(map.len(), 8);
    map.validate().unwrap();

    assert_eq!(map.pop_first(), Some((0, 0)));
    assert_eq!(map.pop_last(), Some((9, 81)));
    assert_eq!(map.first_key_value(), Some((&1, &1)));
    assert_eq!(map.last_key_value(), Some((&8, &64)));
}

#[test]
fn test_erase() {
    let mut map = (0..10).map(|i| (i, ())).collect::<TreeMap<_, _>>();
    let begin = map.find(&2).unwrap();
    let end = map.find(&8);

    assert_eq!(map.erase(begin, end), Ok(6));
    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 1, 8, 9]);

    let first = map.first().unwrap();
    let last = map.last().unwrap();
    assert!(map.erase(last, Some(first)).unwrap_err().is_invalid_range());
    assert_eq!(map.len(), 4);
}

#[test]
fn test_iterators() {
    let mut map = TreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), ['a', 'b', 'c']);
    assert_eq!(map.keys().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(map.values().len(), 3);

    for value in map.values_mut() {
        *value = value.to_ascii_uppercase();
    }
    for (key, value) in &mut map {
        if *key == 2 {
            *value = '!';
        }
    }
    assert_eq!(
        (&map).into_iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
        [(1, 'A'), (2, '!'), (3, 'C')]
    );

    assert_eq!(map.clone().into_keys().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(map.clone().into_values().rev().collect::<Vec<_>>(), ['C', '!', 'A']);
    assert_eq!(map.into_iter().next_back(), Some((3, 'C')));
}

#[test]
fn test_runtime_comparator() {
    let mut map: DynTreeMap<i32, &str> =
        TreeMap::with_comparator(DynComparator::new(|a: &i32, b: &i32| a > b));
    map.extend([(1, "one"), (3, "three"), (2, "two")]);

    assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    assert_eq!(map[&2], "two");
    map.validate().unwrap();

    let cloned = map.clone();
    assert_eq!(cloned, map);
}

#[test]
fn test_reverse_comparator() {
    let mut map = TreeMap::with_comparator(Reverse);
    for i in 0..50 {
        map.insert(i, i.to_string());
    }
    assert_eq!(map.first_key_value(), Some((&49, &String::from("49"))));
    map.validate().unwrap();
}

#[test]
fn test_values_dropped_once() {
    let counter = CountedDrop::new(0);
    let mut map = TreeMap::new();
    for i in 0..20 {
        map.insert(i, counter.clone());
    }

    map.insert(5, counter.clone());
    assert_eq!(counter.count(), 1);

    map.remove(&6);
    map.values_mut().for_each(|_| ());
    assert_eq!(counter.count(), 2, "Iterating mutably shouldn't drop anything.");

    drop(map);
    assert_eq!(counter.count(), 21);
}

#[test]
fn test_formatting() {
    let map = TreeMap::from([(2, "b"), (1, "a")]);
    assert_eq!(format!("{map}"), "{1: a, 2: b}");
    assert_eq!(
        format!("{map:?}"),
        "TreeMap { contents: {1: \"a\", 2: \"b\"}, len: 2 }"
    );
    assert_eq!(format!("{}", TreeMap::<i32, i32>::new()), "{}");
}

#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::collections::compare::{ByFn, DynComparator, Reverse};
use crate::collections::traits::set::Set;
use crate::util::alloc::CountedDrop;

fn items<T: Clone, C>(set: &TreeSet<T, C>) -> Vec<T> {
    set.iter().cloned().collect()
}

#[test]
fn test_insert_and_remove() {
    let mut set = TreeSet::new();
    assert!(set.insert(3));
    assert!(set.insert(1));
    assert!(set.insert(2));
    assert!(!set.insert(2), "Inserting a duplicate should report false.");
    assert_eq!(set.len(), 3);

    assert!(set.contains(&1));
    assert!(!set.contains(&4));
    assert!(set.remove(&1));
    assert!(!set.remove(&1), "Removing a missing element should report false.");
    assert_eq!(set.take(&2), Some(2));
    assert_eq!(set.take(&2), None);
    assert_eq!(items(&set), [3]);
    set.validate().unwrap();
}

#[test]
fn test_duplicate_keeps_original() {
    let mut set = TreeSet::with_comparator(ByFn(|a: &(i32, char), b: &(i32, char)| a.0 < b.0));
    set.insert((1, 'a'));
    assert!(!set.insert((1, 'b')));
    assert_eq!(
        set.first(),
        Some(&(1, 'a')),
        "The element already in the set should be kept."
    );
}

#[test]
fn test_handles() {
    let mut set = TreeSet::from([10, 20, 30]);
    let (id, inserted) = set.insert_entry(25);
    assert!(inserted);
    assert_eq!(set.get(id), Ok(&25));
    assert_eq!(set.find(&25), Some(id));

    let (again, inserted) = set.insert_entry(25);
    assert!(!inserted);
    assert_eq!(again, id);

    let thirty = set.find(&30).unwrap();
    assert_eq!(set.remove_node(thirty), Ok(30));
    assert!(set.get(thirty).is_err());
    assert_eq!(items(&set), [10, 20, 25]);
}

#[test]
fn test_ends() {
    let mut set = (1..=5).collect::<TreeSet<_>>();
    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&5));
    assert_eq!(set.pop_first(), Some(1));
    assert_eq!(set.pop_last(), Some(5));
    assert_eq!(items(&set), [2, 3, 4]);
    assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2]);

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.first(), None);
    assert_eq!(set.pop_last(), None);
}

#[test]
fn test_erase() {
    let mut set = TreeSet::from([5, 10, 15, 20, 24, 25, 26, 30, 40, 50]);
    let begin = set.find(&10).unwrap();
    let end = set.find(&40);

    assert_eq!(set.erase(begin, end), Ok(7));
    assert_eq!(items(&set), [5, 40, 50]);
    set.validate().unwrap();
}

#[test]
fn test_set_algebra() {
    let a = TreeSet::from([1, 2, 3]);
    let b = TreeSet::from([3, 4, 5]);

    assert_eq!(items(&a.union(&b)), [1, 2, 3, 4, 5]);
    assert_eq!(items(&a.intersection(&b)), [3]);
    assert_eq!(items(&a.difference(&b)), [1, 2]);
    assert_eq!(items(&a.symmetric_difference(&b)), [1, 2, 4, 5]);

    assert_eq!(&a | &b, a.union(&b));
    assert_eq!(&a & &b, TreeSet::from([3]));
    assert_eq!(&a - &b, TreeSet::from([1, 2]));
    assert_eq!(&a ^ &b, TreeSet::from([1, 2, 4, 5]));

    assert!(!a.is_subset(&b));
    assert!(TreeSet::from([2, 3]).is_subset(&a));
    assert!(a.is_superset(&TreeSet::from([1])));
    assert!(a.is_disjoint(&TreeSet::from([7, 8])));
    assert!(!a.is_disjoint(&b));
}

#[test]
fn test_assign_operators() {
    let mut set = TreeSet::from([1, 2, 3]);
    set |= TreeSet::from([3, 4]);
    assert_eq!(items(&set), [1, 2, 3, 4]);

    set &= TreeSet::from([2, 3, 4, 5]);
    assert_eq!(items(&set), [2, 3, 4]);

    set ^= TreeSet::from([4, 5]);
    assert_eq!(items(&set), [2, 3, 5]);

    set -= TreeSet::from([2, 9]);
    assert_eq!(items(&set), [3, 5]);
    set.validate().unwrap();
}

#[test]
fn test_algebra_uses_receiver_comparator() {
    let mut a = TreeSet::with_comparator(Reverse);
    a.extend([1, 2, 3]);
    let mut b = TreeSet::with_comparator(Reverse);
    b.extend([2, 3, 4]);

    let union = a.union(&b);
    assert_eq!(items(&union), [4, 3, 2, 1]);
    assert_eq!(items(&(&a & &b)), [3, 2]);
    union.validate().unwrap();
}

/// Exercises a set only through the shared trait.
fn check_set_laws<S: Set<i32>>(a: &S, b: &S) {
    let union = a.union(b);
    let intersection = a.intersection(b);

    assert!(a.is_subset(&union));
    assert!(union.is_superset(b));
    assert!(intersection.is_subset(a) && intersection.is_subset(b));
    assert!(a.difference(b).is_disjoint(b));
    assert_eq!(
        a.symmetric_difference(b).len(),
        union.len() - intersection.len()
    );
    for item in union.iter() {
        assert!(a.contains(item) || b.contains(item));
    }
    assert_eq!(a.is_empty(), a.len() == 0);

    assert_eq!(a.is_subset(b), a.iter().all(|item| b.contains(item)));
    assert_eq!(a.is_superset(b), b.iter().all(|item| a.contains(item)));
    assert_eq!(a.is_disjoint(b), !a.iter().any(|item| b.contains(item)));
    assert_eq!(a.is_subset(b), b.is_superset(a));
}

#[test]
fn test_set_trait() {
    let a = TreeSet::from([1, 3, 5, 7, 9]);
    let b = TreeSet::from([3, 4, 5, 6]);
    check_set_laws(&a, &b);
    check_set_laws(&b, &a);
    check_set_laws(&a, &TreeSet::new());

    let erased = DynComparator::new(|x: &i32, y: &i32| x > y);
    let mut c: DynTreeSet<i32> = TreeSet::with_comparator(erased.clone());
    let mut d: DynTreeSet<i32> = TreeSet::with_comparator(erased);
    c.extend([1, 2, 3]);
    d.extend([2, 3, 4]);
    check_set_laws(&c, &d);
    assert_eq!(items(&Set::union(&c, &d)), [4, 3, 2, 1]);
}

/// A natural ordering that counts how often it is asked.
fn counting() -> (Rc<Cell<usize>>, DynComparator<i32>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let comparator = DynComparator::new(move |a: &i32, b: &i32| {
        counter.set(counter.get() + 1);
        a < b
    });
    (calls, comparator)
}

#[test]
fn test_set_trait_predicates_scan_once() {
    let (calls, comparator) = counting();
    let mut a: DynTreeSet<i32> = TreeSet::with_comparator(comparator.clone());
    let mut b: DynTreeSet<i32> = TreeSet::with_comparator(comparator.clone());
    let mut c: DynTreeSet<i32> = TreeSet::with_comparator(comparator);
    a.extend(0..1000);
    b.extend(0..1000);
    c.extend(1000..2000);
    let bound = 2 * (a.len() + b.len());

    calls.set(0);
    assert!(Set::is_subset(&a, &b));
    assert!(
        calls.get() <= bound,
        "Subset through the trait should be a single merge, made {} comparisons.",
        calls.get()
    );

    calls.set(0);
    assert!(Set::is_superset(&b, &a));
    assert!(calls.get() <= bound);

    calls.set(0);
    assert!(Set::is_disjoint(&a, &c));
    assert!(calls.get() <= bound);
}

#[test]
fn test_superset_uses_receiver_comparator() {
    let (own_calls, own) = counting();
    let (other_calls, other) = counting();
    let mut a: DynTreeSet<i32> = TreeSet::with_comparator(own);
    let mut b: DynTreeSet<i32> = TreeSet::with_comparator(other);
    a.extend([1, 2, 3, 4]);
    b.extend([2, 4]);

    own_calls.set(0);
    other_calls.set(0);
    assert!(a.is_superset(&b));
    assert!(own_calls.get() > 0);
    assert_eq!(other_calls.get(), 0, "Only the receiver's comparator should be used.");

    other_calls.set(0);
    assert!(!b.is_superset(&a));
    assert_eq!(other_calls.get(), 0, "A smaller set can't be a superset.");
}

#[test]
fn test_elements_dropped_once() {
    let counter = CountedDrop::new(0);
    let mut set =
        TreeSet::with_comparator(ByFn(|a: &(i32, CountedDrop), b: &(i32, CountedDrop)| a.0 < b.0));
    for i in 0..10 {
        set.insert((i, counter.clone()));
    }

    assert!(!set.insert((5, counter.clone())));
    assert_eq!(counter.count(), 1, "A rejected duplicate should be dropped.");

    set.pop_first();
    assert_eq!(counter.count(), 2);

    drop(set);
    assert_eq!(counter.count(), 11);
}

#[test]
fn test_formatting() {
    let set = TreeSet::from(["b", "a", "c"]);
    assert_eq!(format!("{set}"), "{a, b, c}");
    assert_eq!(
        format!("{set:?}"),
        "TreeSet { contents: {\"a\", \"b\", \"c\"}, len: 3 }"
    );
}

#[test]
fn test_owned_iteration() {
    let set = TreeSet::from([3, 1, 2]);
    let mut iter = set.clone().into_iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.collect::<Vec<_>>(), [1, 2]);

    let mut total = 0;
    for item in &set {
        total += item;
    }
    assert_eq!(total, 6);
}

use std::cmp::Ordering;
use std::iter::FusedIterator;

use log::debug;

use super::{Link, NodeStore, RedBlackTree};
use crate::collections::compare::Comparator;

/// Which of two merged trees an element was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    Left,
    Both,
    Right,
}

/// Which merge outcomes end up in the result of a set operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Policy {
    pub left: bool,
    pub both: bool,
    pub right: bool,
}

impl Policy {
    pub const UNION: Policy = Policy { left: true, both: true, right: true };
    pub const INTERSECTION: Policy = Policy { left: false, both: true, right: false };
    pub const DIFFERENCE: Policy = Policy { left: true, both: false, right: false };
    pub const SYMMETRIC_DIFFERENCE: Policy = Policy { left: true, both: false, right: true };

    pub const fn includes(self, origin: Origin) -> bool {
        match origin {
            Origin::Left => self.left,
            Origin::Both => self.both,
            Origin::Right => self.right,
        }
    }
}

/// Walks two trees in key order at once, like the merge step of a merge sort. Equal keys are
/// yielded once, with the entry from the left tree.
pub(crate) struct Merge<'a, K, V, C> {
    left: &'a NodeStore<K, V>,
    right: &'a NodeStore<K, V>,
    comparator: &'a C,
    a: Link,
    b: Link,
}

impl<'a, K, V, C: Comparator<K>> Iterator for Merge<'a, K, V, C> {
    type Item = (Origin, &'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let origin = match (self.a, self.b) {
            (Some(a), Some(b)) => {
                match self.comparator.compare(&self.left[a].key, &self.right[b].key) {
                    Ordering::Less => Origin::Left,
                    Ordering::Greater => Origin::Right,
                    Ordering::Equal => Origin::Both,
                }
            },
            (Some(_), None) => Origin::Left,
            (None, Some(_)) => Origin::Right,
            (None, None) => return None,
        };

        let (key, value) = match origin {
            Origin::Right => {
                let b = self.b?;
                self.b = self.right.next(b);
                self.right[b].tuple()
            },
            Origin::Left | Origin::Both => {
                let a = self.a?;
                self.a = self.left.next(a);
                if origin == Origin::Both {
                    self.b = self.b.and_then(|b| self.right.next(b));
                }
                self.left[a].tuple()
            },
        };
        Some((origin, key, value))
    }
}

impl<'a, K, V, C: Comparator<K>> FusedIterator for Merge<'a, K, V, C> {}

impl<K, V, C: Comparator<K>> RedBlackTree<K, V, C> {
    /// Merges the key sequences of `self` and `other`, using `self`'s comparator for both.
    pub(crate) fn merge<'a>(&'a self, other: &'a RedBlackTree<K, V, C>) -> Merge<'a, K, V, C> {
        Merge {
            left: &self.nodes,
            right: &other.nodes,
            comparator: &self.comparator,
            a: self.first(),
            b: other.first(),
        }
    }

    /// Builds a new tree from the merge outcomes that `policy` keeps.
    pub(crate) fn combine(&self, other: &RedBlackTree<K, V, C>, policy: Policy) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
    {
        let mut result = RedBlackTree::with_comparator(self.comparator.clone());
        for (origin, key, value) in self.merge(other) {
            if policy.includes(origin) {
                result.insert(key.clone(), value.clone());
            }
        }
        debug!(
            "combined trees of {} and {} elements into {} with {:?}",
            self.len(),
            other.len(),
            result.len(),
            policy
        );
        result
    }

    /// Returns a new tree with every element of `self` and `other`. Keys found in both keep the
    /// value from `self`.
    pub fn union(&self, other: &RedBlackTree<K, V, C>) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
    {
        self.combine(other, Policy::UNION)
    }

    /// Returns a new tree with the elements of `self` whose keys are also in `other`.
    pub fn intersection(&self, other: &RedBlackTree<K, V, C>) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
    {
        self.combine(other, Policy::INTERSECTION)
    }

    /// Returns a new tree with the elements of `self` whose keys aren't in `other`.
    pub fn difference(&self, other: &RedBlackTree<K, V, C>) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
    {
        self.combine(other, Policy::DIFFERENCE)
    }

    /// Returns a new tree with the elements whose keys are in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &RedBlackTree<K, V, C>) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
    {
        self.combine(other, Policy::SYMMETRIC_DIFFERENCE)
    }

    /// Returns true if every key of `self` is in `other`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &RedBlackTree<K, V, C>) -> bool {
        if self.len() > other.len() {
            return false;
        }
        !self.merge(other).any(|(origin, ..)| origin == Origin::Left)
    }

    /// Returns true if every key of `other` is in `self`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &RedBlackTree<K, V, C>) -> bool {
        if self.len() < other.len() {
            return false;
        }
        !self.merge(other).any(|(origin, ..)| origin == Origin::Right)
    }

    /// Returns true if `self` and `other` have no keys in common.
    pub fn is_disjoint(&self, other: &RedBlackTree<K, V, C>) -> bool {
        !self.merge(other).any(|(origin, ..)| origin == Origin::Both)
    }
}

use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::Iter;
use crate::collections::binary_tree::tree::{
    InvariantViolation, NodeId, RangeError, RedBlackTree, StaleNode,
};
use crate::collections::compare::{Comparator, DynComparator, Natural};
use crate::collections::traits::set::Set;
use crate::util::fmt::DebugRaw;

/// An ordered set, storing its elements in a [`RedBlackTree`] with no values attached.
pub struct TreeSet<T, C = Natural> {
    // The unit type takes no space in the nodes.
    pub(crate) inner: RedBlackTree<T, (), C>,
}

/// A [`TreeSet`] ordered by a comparator chosen at runtime.
pub type DynTreeSet<T> = TreeSet<T, DynComparator<T>>;

impl<T> TreeSet<T, Natural> {
    pub const fn new() -> TreeSet<T, Natural> {
        TreeSet {
            inner: RedBlackTree::new(),
        }
    }
}

impl<T, C> TreeSet<T, C> {
    pub const fn with_comparator(comparator: C) -> TreeSet<T, C> {
        TreeSet {
            inner: RedBlackTree::with_comparator(comparator),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn comparator(&self) -> &C {
        self.inner.comparator()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns the element that `id` refers to.
    ///
    /// # Errors
    /// Returns [`StaleNode`] if `id` doesn't refer to an element of this set.
    pub fn get(&self, id: NodeId) -> Result<&T, StaleNode> {
        self.inner.key(id)
    }

    /// Removes the element that `id` refers to, returning it. See [`NodeId`] for which other
    /// handles this can invalidate.
    ///
    /// # Errors
    /// Returns [`StaleNode`] if `id` doesn't refer to an element of this set.
    pub fn remove_node(&mut self, id: NodeId) -> Result<T, StaleNode> {
        self.inner.remove_node(id).map(|e| e.0)
    }

    pub fn first(&self) -> Option<&T> {
        self.inner.first_entry().map(|e| e.0)
    }

    pub fn last(&self) -> Option<&T> {
        self.inner.last_entry().map(|e| e.0)
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.inner.pop_first().map(|e| e.0)
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.inner.pop_last().map(|e| e.0)
    }

    /// Returns an iterator over the elements in order. Reverse it for descending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T, C: Comparator<T>> TreeSet<T, C> {
    /// Adds `item` to the set, returning true if it wasn't already present. An equal element
    /// that is already present is kept, and `item` is dropped.
    pub fn insert(&mut self, item: T) -> bool {
        self.insert_entry(item).1
    }

    /// Like [`insert`](Self::insert), but also returns a handle to the element.
    pub fn insert_entry(&mut self, item: T) -> (NodeId, bool) {
        let (id, old) = self.inner.insert(item, ());
        (id, old.is_none())
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.contains(item)
    }

    pub fn find<Q>(&self, item: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.find(item)
    }

    /// Removes the element equal to `item`, returning true if there was one.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.take(item).is_some()
    }

    /// Removes the element equal to `item` and returns it.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.remove(item).map(|e| e.0)
    }

    /// Removes every element in `[begin, end)`, returning how many were removed. See
    /// [`RedBlackTree::erase`].
    ///
    /// # Errors
    /// Fails without removing anything if either handle is stale or `end` comes before `begin`.
    pub fn erase(&mut self, begin: NodeId, end: Option<NodeId>) -> Result<usize, RangeError>
    where
        T: Clone,
    {
        self.inner.erase(begin, end)
    }

    /// Returns a new set with every element in `self` or `other`. (`self ∪ other`)
    pub fn union(&self, other: &TreeSet<T, C>) -> TreeSet<T, C>
    where
        T: Clone,
        C: Clone,
    {
        TreeSet {
            inner: self.inner.union(&other.inner),
        }
    }

    /// Returns a new set with every element in both `self` and `other`. (`self ∩ other`)
    pub fn intersection(&self, other: &TreeSet<T, C>) -> TreeSet<T, C>
    where
        T: Clone,
        C: Clone,
    {
        TreeSet {
            inner: self.inner.intersection(&other.inner),
        }
    }

    /// Returns a new set with every element in `self` but not `other`. (`self \ other`)
    pub fn difference(&self, other: &TreeSet<T, C>) -> TreeSet<T, C>
    where
        T: Clone,
        C: Clone,
    {
        TreeSet {
            inner: self.inner.difference(&other.inner),
        }
    }

    /// Returns a new set with every element in exactly one of `self` and `other`. (`self △ other`)
    pub fn symmetric_difference(&self, other: &TreeSet<T, C>) -> TreeSet<T, C>
    where
        T: Clone,
        C: Clone,
    {
        TreeSet {
            inner: self.inner.symmetric_difference(&other.inner),
        }
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &TreeSet<T, C>) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &TreeSet<T, C>) -> bool {
        self.inner.is_superset(&other.inner)
    }

    /// Returns true if `self` and `other` have no elements in common.
    pub fn is_disjoint(&self, other: &TreeSet<T, C>) -> bool {
        self.inner.is_disjoint(&other.inner)
    }

    /// Checks the invariants of the underlying tree. See [`RedBlackTree::validate`].
    ///
    /// # Errors
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        self.inner.validate()
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Set<T> for TreeSet<T, C> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn contains(&self, item: &T) -> bool {
        self.inner.contains(item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.into_iter()
    }

    fn union(&self, other: &Self) -> Self {
        TreeSet::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        TreeSet::intersection(self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        TreeSet::difference(self, other)
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        TreeSet::symmetric_difference(self, other)
    }

    fn is_subset(&self, other: &Self) -> bool {
        self.inner.is_subset(&other.inner)
    }

    fn is_superset(&self, other: &Self) -> bool {
        self.inner.is_superset(&other.inner)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        self.inner.is_disjoint(&other.inner)
    }
}

impl<T, C: Default> Default for TreeSet<T, C> {
    fn default() -> Self {
        TreeSet {
            inner: RedBlackTree::default(),
        }
    }
}

impl<T: Clone, C: Clone> Clone for TreeSet<T, C> {
    fn clone(&self) -> Self {
        TreeSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq, C> PartialEq for TreeSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq, C> Eq for TreeSet<T, C> {}

impl<T: Ord, const N: usize> From<[T; N]> for TreeSet<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for TreeSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TreeSet::default();
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Clone, C: Comparator<T> + Clone> BitOr for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T, C: Comparator<T>> BitOrAssign for TreeSet<T, C> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs)
    }
}

impl<T: Clone, C: Comparator<T> + Clone> BitAnd for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T, C: Comparator<T>> BitAndAssign for TreeSet<T, C> {
    fn bitand_assign(&mut self, rhs: Self) {
        let mut kept = Vec::with_capacity(self.len());
        while let Some(item) = self.pop_first() {
            if rhs.contains(&item) {
                kept.push(item);
            }
        }
        self.extend(kept)
    }
}

impl<T: Clone, C: Comparator<T> + Clone> BitXor for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T, C: Comparator<T>> BitXorAssign for TreeSet<T, C> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if !self.remove(&item) {
                self.insert(item);
            }
        }
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Sub for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T, C: Comparator<T>> SubAssign for TreeSet<T, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Debug, C> Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSet")
            .field(
                "contents",
                &DebugRaw(format!(
                    "{{{}}}",
                    self.iter()
                        .map(|i| format!("{i:?}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
            )
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display, C> Display for TreeSet<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

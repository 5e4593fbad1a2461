//! Orderings for the tree-based collections.
//!
//! The trees only ever ask one question of their keys: is `a` strictly less than `b`? Equality is
//! derived from two such questions, so a [`Comparator`] must describe a strict weak ordering. A
//! comparator that doesn't won't cause memory unsafety, but keys can end up misplaced.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// A strict-less-than ordering over `T`.
pub trait Comparator<T: ?Sized> {
    /// Returns true if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Three way comparison built from at most two calls to [`less`](Comparator::less).
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Returns true if neither value is ordered before the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The ordering given by [`Ord`]. This is the default comparator for every tree type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of the ordering given by [`Ord`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reverse;

impl<T: Ord + ?Sized> Comparator<T> for Reverse {
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// A comparator backed by a closure, dispatched statically.
///
/// # Examples
/// ```
/// # use ordered_lib::collections::binary_tree::TreeSet;
/// # use ordered_lib::collections::compare::ByFn;
/// let mut set = TreeSet::with_comparator(ByFn(|a: &i32, b: &i32| a.abs() < b.abs()));
/// set.extend([-3, 1, 2]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, -3]);
/// ```
#[derive(Clone, Copy)]
pub struct ByFn<F>(pub F);

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Comparator<T> for ByFn<F> {
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> Debug for ByFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("ByFn(..)")
    }
}

/// A type-erased comparator, for when the ordering is only known at runtime or the comparator
/// type can't be named. Cloning shares the underlying closure.
pub struct DynComparator<T: ?Sized>(Rc<dyn Fn(&T, &T) -> bool>);

impl<T: ?Sized> DynComparator<T> {
    pub fn new(less: impl Fn(&T, &T) -> bool + 'static) -> DynComparator<T> {
        DynComparator(Rc::new(less))
    }
}

impl<T: ?Sized> Comparator<T> for DynComparator<T> {
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<T: ?Sized> Clone for DynComparator<T> {
    fn clone(&self) -> Self {
        DynComparator(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Debug for DynComparator<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("DynComparator(..)")
    }
}

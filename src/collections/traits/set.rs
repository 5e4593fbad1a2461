/// The operations every set type supports, whatever its ordering or storage.
///
/// The set algebra methods build a new set of the same type, so implementors decide how the result
/// is ordered and what it costs to produce.
pub trait Set<T>: IntoIterator<Item = T> + Sized {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, item: &T) -> bool;

    /// Returns an iterator over all elements in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Creates a set of all items that are in either `self` or `other`. (`self ∪ other`)
    fn union(&self, other: &Self) -> Self;

    /// Creates a set of all items that are in both `self` and `other`. (`self ∩ other`)
    fn intersection(&self, other: &Self) -> Self;

    /// Creates a set of all items that are in `self` but not `other`. (`self \ other`)
    fn difference(&self, other: &Self) -> Self;

    /// Creates a set of all items that are in `self` or `other` but not both. (`self △ other`)
    fn symmetric_difference(&self, other: &Self) -> Self;

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns true if no element is in both `self` and `other`.
    fn is_disjoint(&self, other: &Self) -> bool {
        !self.iter().any(|item| other.contains(item))
    }
}

use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use super::{IntoKeys, IntoValues, Keys, KeyNotFound, Values, ValuesMut};
use crate::collections::binary_tree::tree::{
    InvariantViolation, Iter, IterMut, NodeId, RangeError, RedBlackTree, StaleNode,
};
use crate::collections::compare::{Comparator, DynComparator, Natural};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

/// An ordered map, storing its entries in a [`RedBlackTree`] sorted by key.
///
/// Entries can be reached by key, or by the [`NodeId`] handle returned when they were inserted.
/// See [`NodeId`] for when handles go stale.
pub struct TreeMap<K, V, C = Natural> {
    pub(crate) inner: RedBlackTree<K, V, C>,
}

/// A [`TreeMap`] ordered by a comparator chosen at runtime.
pub type DynTreeMap<K, V> = TreeMap<K, V, DynComparator<K>>;

impl<K, V> TreeMap<K, V, Natural> {
    pub const fn new() -> TreeMap<K, V, Natural> {
        TreeMap {
            inner: RedBlackTree::new(),
        }
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    pub const fn with_comparator(comparator: C) -> TreeMap<K, V, C> {
        TreeMap {
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

    pub fn entry(&self, id: NodeId) -> Result<(&K, &V), StaleNode> {
        self.inner.entry(id)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Result<&mut V, StaleNode> {
        self.inner.value_mut(id)
    }

    /// Removes the entry that `id` refers to, returning it.
    ///
    /// # Errors
    /// Returns [`StaleNode`] if `id` doesn't refer to an entry of this map.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(K, V), StaleNode> {
        self.inner.remove_node(id)
    }

    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.inner.first_entry()
    }

    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.inner.last_entry()
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.inner.pop_first()
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.inner.pop_last()
    }

    /// Returns a handle to the entry with the smallest key.
    pub fn first(&self) -> Option<NodeId> {
        self.inner.first()
    }

    /// Returns a handle to the entry with the greatest key.
    pub fn last(&self) -> Option<NodeId> {
        self.inner.last()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.inner.iter_mut()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.inner.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.inner.iter())
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.inner.iter_mut())
    }

    pub fn into_keys(self) -> IntoKeys<K, V, C> {
        IntoKeys(self.inner.into_iter())
    }

    pub fn into_values(self) -> IntoValues<K, V, C> {
        IntoValues(self.inner.into_iter())
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Inserts `value` under `key`, returning the value previously stored under an equal key.
    /// The stored key is kept in that case.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value).1
    }

    /// Like [`insert`](Self::insert), but also returns a handle to the entry.
    pub fn insert_entry(&mut self, key: K, value: V) -> (NodeId, Option<V>) {
        self.inner.insert(key, value)
    }

    pub fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.find(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.get(key)
    }

    /// An alias for [`get`](Self::get).
    pub fn at<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.get(key)
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.get_entry(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.contains(key)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.remove_entry(key).map(|e| e.1)
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.inner.remove(key)
    }

    /// Removes every entry in `[begin, end)`, returning how many were removed. See
    /// [`RedBlackTree::erase`].
    ///
    /// # Errors
    /// Fails without removing anything if either handle is stale or `end` comes before `begin`.
    pub fn erase(&mut self, begin: NodeId, end: Option<NodeId>) -> Result<usize, RangeError>
    where
        K: Clone,
    {
        self.inner.erase(begin, end)
    }

    /// Checks the invariants of the underlying tree. See [`RedBlackTree::validate`].
    ///
    /// # Errors
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        self.inner.validate()
    }
}

impl<K, V, C: Default> Default for TreeMap<K, V, C> {
    fn default() -> Self {
        TreeMap {
            inner: RedBlackTree::default(),
        }
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for TreeMap<K, V, C> {
    fn clone(&self) -> Self {
        TreeMap {
            inner: self.inner.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Eq, V: Eq, C> Eq for TreeMap<K, V, C> {}

impl<K, V, C, Q> Index<&Q> for TreeMap<K, V, C>
where
    K: Borrow<Q>,
    C: Comparator<K> + Comparator<Q>,
    Q: ?Sized,
{
    type Output = V;

    /// # Panics
    /// Panics if the map doesn't contain `key`.
    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).ok_or(KeyNotFound).throw()
    }
}

impl<K, V, C> Index<NodeId> for TreeMap<K, V, C> {
    type Output = V;

    /// # Panics
    /// Panics if `id` is stale.
    fn index(&self, id: NodeId) -> &Self::Output {
        self.inner.value(id).throw()
    }
}

impl<K, V, C> IndexMut<NodeId> for TreeMap<K, V, C> {
    /// # Panics
    /// Panics if `id` is stale.
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.inner.value_mut(id).throw()
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreeMap<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        TreeMap {
            inner: RedBlackTree::from(value),
        }
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for TreeMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TreeMap {
            inner: RedBlackTree::from_iter(iter),
        }
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner.extend(iter)
    }
}

impl<K: Debug, V: Debug, C> Debug for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeMap")
            .field(
                "contents",
                &DebugRaw(format!(
                    "{{{}}}",
                    self.iter()
                        .map(|(k, v)| format!("{k:?}: {v:?}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
            )
            .field("len", &self.len())
            .finish()
    }
}

impl<K: Display, V: Display, C> Display for TreeMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

use std::iter::FusedIterator;

use super::{Link, NodeId, NodeStore, RedBlackTree, Slot};

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Returns an iterator over all entries in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            front: self.first(),
            back: self.last(),
            len: self.len(),
        }
    }

    /// Returns an iterator over handles to all elements in key order. Like [`iter`](Self::iter),
    /// but yielding [`NodeId`]s for use with [`erase`](Self::erase) and friends.
    pub fn handles(&self) -> Handles<'_, K, V> {
        Handles {
            nodes: &self.nodes,
            front: self.first(),
            back: self.last(),
            len: self.len(),
        }
    }

    /// Returns an iterator over all entries in key order, with mutable access to the values.
    ///
    /// The order is worked out up front, so creating this iterator takes `O(n)` time and space.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let order = self.handles().map(|id| id.0).collect::<Vec<_>>();

        let mut by_slot = self
            .nodes
            .slots
            .iter_mut()
            .map(|slot| match slot {
                Slot::Occupied(node) => Some((&node.key, &mut node.value)),
                Slot::Vacant(_) => None,
            })
            .collect::<Vec<_>>();

        IterMut {
            inner: order
                .into_iter()
                .filter_map(|index| by_slot[index].take())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl<K, V, C> IntoIterator for RedBlackTree<K, V, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owned iterator over the entries of a tree, in key order.
pub struct IntoIter<K, V, C>(pub(crate) RedBlackTree<K, V, C>);

impl<K, V, C> Iterator for IntoIter<K, V, C> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        // Each step is a full delete, but deleting the minimum never needs a successor swap.
        let first = self.0.first()?;
        Some(self.0.delete(first))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<K, V, C> DoubleEndedIterator for IntoIter<K, V, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let last = self.0.last()?;
        Some(self.0.delete(last))
    }
}

impl<K, V, C> ExactSizeIterator for IntoIter<K, V, C> {}

impl<K, V, C> FusedIterator for IntoIter<K, V, C> {}

impl<'a, K, V, C> IntoIterator for &'a RedBlackTree<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Both borrowed iterators walk a pair of in-order cursors that close in on each other.
fn walk_front<K, V>(
    nodes: &NodeStore<K, V>,
    front: &mut Link,
    back: &mut Link,
    len: &mut usize,
) -> Option<NodeId> {
    if *len == 0 {
        return None;
    }
    let current = (*front)?;
    *len -= 1;
    if *len == 0 {
        *front = None;
        *back = None;
    } else {
        *front = nodes.next(current);
    }
    Some(current)
}

fn walk_back<K, V>(
    nodes: &NodeStore<K, V>,
    front: &mut Link,
    back: &mut Link,
    len: &mut usize,
) -> Option<NodeId> {
    if *len == 0 {
        return None;
    }
    let current = (*back)?;
    *len -= 1;
    if *len == 0 {
        *front = None;
        *back = None;
    } else {
        *back = nodes.prev(current);
    }
    Some(current)
}

/// A borrowed iterator over the entries of a tree, in key order.
pub struct Iter<'a, K, V> {
    pub(crate) nodes: &'a NodeStore<K, V>,
    pub(crate) front: Link,
    pub(crate) back: Link,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = walk_front(self.nodes, &mut self.front, &mut self.back, &mut self.len)?;
        Some(self.nodes[id].tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = walk_back(self.nodes, &mut self.front, &mut self.back, &mut self.len)?;
        Some(self.nodes[id].tuple())
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

/// A borrowed iterator over handles to the elements of a tree, in key order.
pub struct Handles<'a, K, V> {
    pub(crate) nodes: &'a NodeStore<K, V>,
    pub(crate) front: Link,
    pub(crate) back: Link,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Handles<'a, K, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        walk_front(self.nodes, &mut self.front, &mut self.back, &mut self.len)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> DoubleEndedIterator for Handles<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        walk_back(self.nodes, &mut self.front, &mut self.back, &mut self.len)
    }
}

impl<'a, K, V> ExactSizeIterator for Handles<'a, K, V> {}

impl<'a, K, V> FusedIterator for Handles<'a, K, V> {}

/// A borrowed iterator over the entries of a tree, in key order, with mutable values.
pub struct IterMut<'a, K, V> {
    pub(crate) inner: std::vec::IntoIter<(&'a K, &'a mut V)>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

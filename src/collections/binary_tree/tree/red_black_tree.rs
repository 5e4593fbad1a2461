use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use log::trace;

use super::{Color, Link, Node, NodeId, NodeStore, Side, StaleNode};
use crate::collections::compare::{Comparator, Natural};
use crate::util::fmt::DebugRaw;

/// A self-balancing binary search tree, keeping the red-black invariants:
/// - the root is black,
/// - a red node never has a red child,
/// - every path from the root to an empty subtree passes through the same number of black nodes.
///
/// Keys are unique according to the tree's [`Comparator`], `C`. Each key carries a value of type
/// `V`, which is `()` for sets.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the tree.
/// - `k`: The number of elements in a range.
/// - `m`: The number of elements in the second tree.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `find` | `O(log n)` |
/// | `insert` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `remove_node` | `O(log n)` |
/// | `next`, `prev` | `O(1)`*, `O(log n)` |
/// | `first`, `last` | `O(log n)` |
/// | `erase` | `O(k log n)` |
/// | `union` etc. | `O((n+m) log(n+m))` |
/// | `is_subset` etc. | `O(n+m)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized over a full traversal.
pub struct RedBlackTree<K, V, C = Natural> {
    pub(crate) nodes: NodeStore<K, V>,
    pub(crate) root: Link,
    pub(crate) comparator: C,
}

/// Where a key lives, or would live, in a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Search {
    Found(NodeId),
    Vacant { parent: NodeId, side: Side },
    Empty,
}

impl<K, V> RedBlackTree<K, V, Natural> {
    /// Creates a new, empty tree ordered by [`Ord`]. Nothing is allocated until the first insert.
    pub const fn new() -> RedBlackTree<K, V, Natural> {
        RedBlackTree::with_comparator(Natural)
    }
}

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Creates a new, empty tree ordered by `comparator`.
    pub const fn with_comparator(comparator: C) -> RedBlackTree<K, V, C> {
        RedBlackTree {
            nodes: NodeStore::new(),
            root: None,
            comparator,
        }
    }

    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    pub const fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Removes every element, dropping all keys and values.
    pub fn clear(&mut self) {
        trace!("clearing red-black tree of {} nodes", self.len());
        self.root = None;
        self.nodes.clear();
    }

    pub fn key(&self, id: NodeId) -> Result<&K, StaleNode> {
        self.entry(id).map(|e| e.0)
    }

    pub fn value(&self, id: NodeId) -> Result<&V, StaleNode> {
        self.entry(id).map(|e| e.1)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Result<&mut V, StaleNode> {
        self.nodes
            .get_mut(id)
            .map(|n| &mut n.value)
            .ok_or(StaleNode { id })
    }

    pub fn entry(&self, id: NodeId) -> Result<(&K, &V), StaleNode> {
        self.nodes.get(id).map(Node::tuple).ok_or(StaleNode { id })
    }

    pub fn color(&self, id: NodeId) -> Result<Color, StaleNode> {
        self.nodes.get(id).map(|n| n.color).ok_or(StaleNode { id })
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, StaleNode> {
        self.nodes.get(id).map(|n| n.parent).ok_or(StaleNode { id })
    }

    pub fn left(&self, id: NodeId) -> Result<Option<NodeId>, StaleNode> {
        self.nodes.get(id).map(|n| n.left).ok_or(StaleNode { id })
    }

    pub fn right(&self, id: NodeId) -> Result<Option<NodeId>, StaleNode> {
        self.nodes.get(id).map(|n| n.right).ok_or(StaleNode { id })
    }

    /// Returns a handle to the smallest element.
    pub fn first(&self) -> Option<NodeId> {
        self.root.map(|root| self.nodes.leftmost(root))
    }

    /// Returns a handle to the greatest element.
    pub fn last(&self) -> Option<NodeId> {
        self.root.map(|root| self.nodes.rightmost(root))
    }

    /// Returns a handle to the element after `id` in key order, or None if `id` is the greatest.
    pub fn next(&self, id: NodeId) -> Result<Option<NodeId>, StaleNode> {
        self.nodes.get(id).ok_or(StaleNode { id })?;
        Ok(self.nodes.next(id))
    }

    /// Returns a handle to the element before `id` in key order, or None if `id` is the smallest.
    pub fn prev(&self, id: NodeId) -> Result<Option<NodeId>, StaleNode> {
        self.nodes.get(id).ok_or(StaleNode { id })?;
        Ok(self.nodes.prev(id))
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.first().map(|id| self.nodes[id].tuple())
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.last().map(|id| self.nodes[id].tuple())
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some()
    }
}

impl<K, V, C: Comparator<K>> RedBlackTree<K, V, C> {
    /// Descends from the root towards `key`. On a miss, the result names the node that the key
    /// would be attached to and on which side.
    pub(crate) fn search<Q>(&self, key: &Q) -> Search
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let Some(mut current) = self.root else {
            return Search::Empty;
        };

        loop {
            let node = &self.nodes[current];
            let ordering = Comparator::<Q>::compare(&self.comparator, key, node.key.borrow());
            let side = match ordering {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return Search::Found(current),
            };
            match node.child(side) {
                Some(child) => current = child,
                None => return Search::Vacant { parent: current, side },
            }
        }
    }

    /// Returns a handle to the element equal to `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        match self.search(key) {
            Search::Found(id) => Some(id),
            _ => None,
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.get_entry(key).map(|e| e.1)
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.find(key).map(|id| self.nodes[id].tuple())
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let id = self.find(key)?;
        Some(&mut self.nodes[id].value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        self.find(key).is_some()
    }

    /// Inserts `value` under `key`, returning a handle to the element and the value it replaced,
    /// if any.
    ///
    /// When an equal key is already present, only its value is replaced: the stored key is kept
    /// and `key` is dropped, and the shape of the tree doesn't change.
    pub fn insert(&mut self, key: K, value: V) -> (NodeId, Option<V>) {
        match self.search(&key) {
            Search::Found(id) => {
                let old = mem::replace(&mut self.nodes[id].value, value);
                (id, Some(old))
            },
            Search::Empty => {
                let id = self.nodes.alloc(Node::new(key, value, Color::Black, None));
                self.root = Some(id);
                (id, None)
            },
            Search::Vacant { parent, side } => {
                let id = self.nodes.alloc(Node::new(key, value, Color::Red, Some(parent)));
                *self.nodes[parent].child_mut(side) = Some(id);
                self.fix_red_red(id);
                (id, None)
            },
        }
    }

    /// Removes the element equal to `key`, returning it. Does nothing if there isn't one.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        C: Comparator<Q>,
        Q: ?Sized,
    {
        let id = self.find(key)?;
        Some(self.delete(id))
    }
}

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Removes the element that `id` refers to, returning it.
    ///
    /// If the node had two children, the handle of its in-order successor is invalidated and `id`
    /// now refers to the successor's key. See [`NodeId`].
    pub fn remove_node(&mut self, id: NodeId) -> Result<(K, V), StaleNode> {
        self.nodes.get(id).ok_or(StaleNode { id })?;
        Ok(self.delete(id))
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.first()?;
        Some(self.delete(first))
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.last()?;
        Some(self.delete(last))
    }

    /// Unlinks and frees the element held by `target`.
    pub(crate) fn delete(&mut self, target: NodeId) -> (K, V) {
        let mut v = target;

        // With two children, the successor's data moves up into `target` and the successor's node,
        // which has no left child, is the one actually removed.
        if let Node { left: Some(_), right: Some(right), .. } = self.nodes[v] {
            let successor = self.nodes.leftmost(right);
            self.nodes.swap_payload(v, successor);
            v = successor;
        }

        let u = self.nodes[v].left.or(self.nodes[v].right);
        let both_black = !self.nodes.is_red(u) && self.nodes[v].color.is_black();

        match u {
            None => {
                if self.nodes[v].parent.is_none() {
                    self.root = None;
                } else {
                    if both_black {
                        // Fix up while v is still attached, it needs a sibling and parent.
                        self.fix_double_black(v);
                    } else if let Some(sibling) = self.nodes.sibling(v) {
                        self.nodes[sibling].color = Color::Red;
                    }
                    let parent = self.nodes[v].parent;
                    self.replace_child(parent, v, None);
                }
            },
            Some(u) => {
                let parent = self.nodes[v].parent;
                self.replace_child(parent, v, Some(u));
                self.nodes[u].parent = parent;
                if both_black {
                    self.fix_double_black(u);
                } else {
                    self.nodes[u].color = Color::Black;
                }
            },
        }

        self.nodes.dealloc(v).into_tuple()
    }

    /// Points whichever link referred to `old` (its parent's child link or the root) at `new`.
    pub(crate) fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = new,
            Some(p) => self.nodes[p].right = new,
            None => self.root = new,
        }
    }
}

impl<K, V, C: Default> Default for RedBlackTree<K, V, C> {
    fn default() -> Self {
        RedBlackTree::with_comparator(C::default())
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for RedBlackTree<K, V, C> {
    /// Clones the arena as is, so handles into `self` refer to the same elements in the clone.
    fn clone(&self) -> Self {
        RedBlackTree {
            nodes: self.nodes.clone(),
            root: self.root,
            comparator: self.comparator.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for RedBlackTree<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for RedBlackTree<K, V, C> {}

impl<K: Debug, V: Debug, C> RedBlackTree<K, V, C> {
    fn draw(&self, link: Link) -> String {
        match link {
            Some(id) => {
                let node = &self.nodes[id];
                let color = match node.color {
                    Color::Red => 'R',
                    Color::Black => 'B',
                };
                format!(
                    "{}\n{}({:?}: {:?})\n{}",
                    self.draw(node.left)
                        .lines()
                        .map(|l| String::from("┌    ") + l)
                        .collect::<Vec<_>>()
                        .join("\n"),
                    color,
                    node.key,
                    node.value,
                    self.draw(node.right)
                        .lines()
                        .map(|l| String::from("└    ") + l)
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
            },
            None => String::from("-"),
        }
    }
}

impl<K: Debug, V: Debug, C> Debug for RedBlackTree<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedBlackTree")
            .field("nodes", &DebugRaw(format!("\n{}\n", self.draw(self.root))))
            .field("len", &self.len())
            .finish()
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for RedBlackTree<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K, V, C: Comparator<K> + Default> FromIterator<(K, V)> for RedBlackTree<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = RedBlackTree::default();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for RedBlackTree<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

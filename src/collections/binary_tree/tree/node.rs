use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

/// A handle to a node in a [`RedBlackTree`](super::RedBlackTree).
///
/// Handles are plain indices into the tree's node arena. They stay valid until the node they refer
/// to is removed, after which the slot may be reused by a later insertion. Note that removing a
/// node with two children moves its in-order successor's data into it, so a handle to that
/// successor goes stale and the removed handle now holds the successor's key. Code holding handles
/// across a removal should look them up again by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Color {
    Red,
    Black,
}

pub(crate) type Link = Option<NodeId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub color: Color,
    pub parent: Link,
    pub left: Link,
    pub right: Link,
}

impl<K, V> Node<K, V> {
    pub const fn new(key: K, value: V, color: Color, parent: Link) -> Node<K, V> {
        Node {
            key,
            value,
            color,
            parent,
            left: None,
            right: None,
        }
    }

    pub const fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub const fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

#[derive(Clone)]
pub(crate) enum Slot<K, V> {
    Occupied(Node<K, V>),
    // Vacant slots form a singly linked free list.
    Vacant(Link),
}

/// The arena that owns every node of a tree. Nodes never own each other: `left`, `right` and
/// `parent` are all plain [`NodeId`]s into this store.
#[derive(Clone)]
pub(crate) struct NodeStore<K, V> {
    pub(crate) slots: Vec<Slot<K, V>>,
    pub(crate) free: Link,
    pub(crate) len: usize,
}

impl<K, V> NodeStore<K, V> {
    pub const fn new() -> NodeStore<K, V> {
        NodeStore {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<K, V>> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Moves `node` into the arena, reusing a vacant slot if there is one.
    pub fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        self.len += 1;
        match self.free {
            Some(id) => {
                let slot = mem::replace(&mut self.slots[id.0], Slot::Occupied(node));
                self.free = match slot {
                    Slot::Vacant(next) => next,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                id
            },
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            },
        }
    }

    /// Takes the node out of the arena, pushing its slot onto the free list. The node's links are
    /// returned as they were; unlinking it from its neighbours is the caller's job.
    pub fn dealloc(&mut self, id: NodeId) -> Node<K, V> {
        match mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free)) {
            Slot::Occupied(node) => {
                self.free = Some(id);
                self.len -= 1;
                node
            },
            Slot::Vacant(next) => {
                self.slots[id.0] = Slot::Vacant(next);
                panic!("attempted to free vacant node {id}")
            },
        }
    }

    /// Swaps the keys and values of two distinct nodes, leaving colors and links in place.
    pub fn swap_payload(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);
        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(high);
        match (&mut head[low], &mut tail[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => {
                mem::swap(&mut x.key, &mut y.key);
                mem::swap(&mut x.value, &mut y.value);
            },
            _ => panic!("attempted to swap a vacant node"),
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    /// The color of a link, where an absent node counts as black.
    pub fn color(&self, link: Link) -> Color {
        match link {
            Some(id) => self[id].color,
            None => Color::Black,
        }
    }

    pub fn is_red(&self, link: Link) -> bool {
        self.color(link).is_red()
    }

    pub fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self[id].parent?;
        if self[parent].left == Some(id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    pub fn is_left_child(&self, id: NodeId) -> bool {
        self.side_of(id) == Some(Side::Left)
    }

    pub fn sibling(&self, id: NodeId) -> Link {
        let parent = self[id].parent?;
        match self.side_of(id)? {
            Side::Left => self[parent].right,
            Side::Right => self[parent].left,
        }
    }

    /// The minimum of the subtree rooted at `id`.
    pub fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    /// The maximum of the subtree rooted at `id`.
    pub fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self[id].right {
            id = right;
        }
        id
    }

    /// The in-order successor of `id`, or None if it holds the greatest key.
    pub fn next(&self, id: NodeId) -> Link {
        if let Some(right) = self[id].right {
            return Some(self.leftmost(right));
        }

        let mut current = id;
        let mut parent = self[current].parent;
        while let Some(p) = parent
            && self[p].right == Some(current)
        {
            current = p;
            parent = self[p].parent;
        }
        parent
    }

    /// The in-order predecessor of `id`, or None if it holds the smallest key.
    pub fn prev(&self, id: NodeId) -> Link {
        if let Some(left) = self[id].left {
            return Some(self.rightmost(left));
        }

        let mut current = id;
        let mut parent = self[current].parent;
        while let Some(p) = parent
            && self[p].left == Some(current)
        {
            current = p;
            parent = self[p].parent;
        }
        parent
    }
}

impl<K, V> Index<NodeId> for NodeStore<K, V> {
    type Output = Node<K, V>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node {id} is not in the tree"),
        }
    }
}

impl<K, V> IndexMut<NodeId> for NodeStore<K, V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("node {id} is not in the tree"),
        }
    }
}

impl<K, V> Default for NodeStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

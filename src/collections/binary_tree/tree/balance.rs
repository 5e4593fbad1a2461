use std::mem;

use super::{Color, NodeId, RedBlackTree, Side};
use crate::util::option::OptionExtension;

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Promotes the right child of `x` into its place, making `x` that child's left child.
    ///
    /// ```text
    ///     x              y
    ///    / \            / \
    ///   a   y    =>    x   c
    ///      / \        / \
    ///     b   c      a   b
    /// ```
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        // SAFETY: Only called on nodes with a right child.
        let y = unsafe { self.nodes[x].right.unreachable() };
        self.rotate(x, y, Side::Left);
    }

    /// Promotes the left child of `x` into its place, making `x` that child's right child.
    pub(crate) fn rotate_right(&mut self, x: NodeId) {
        // SAFETY: Only called on nodes with a left child.
        let y = unsafe { self.nodes[x].left.unreachable() };
        self.rotate(x, y, Side::Right);
    }

    /// Moves `x` down to the `down` side of `y`, where `y` is currently `x`'s child on the other
    /// side. The subtree between them changes parent from `y` to `x`.
    fn rotate(&mut self, x: NodeId, y: NodeId, down: Side) {
        let up = match down {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };

        let parent = self.nodes[x].parent;
        self.replace_child(parent, x, Some(y));
        self.nodes[y].parent = parent;

        let moved = self.nodes[y].child(down);
        *self.nodes[x].child_mut(up) = moved;
        if let Some(moved) = moved {
            self.nodes[moved].parent = Some(x);
        }

        *self.nodes[y].child_mut(down) = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn swap_colors(&mut self, a: NodeId, b: NodeId) {
        let b_color = self.nodes[b].color;
        let a_color = mem::replace(&mut self.nodes[a].color, b_color);
        self.nodes[b].color = a_color;
    }

    /// Restores the invariants after `x` was attached as a red leaf. The only one that can be
    /// broken is "no red node has a red child", between `x` and its parent.
    pub(crate) fn fix_red_red(&mut self, mut x: NodeId) {
        loop {
            let Some(parent) = self.nodes[x].parent else {
                self.nodes[x].color = Color::Black;
                return;
            };
            if self.nodes[parent].color.is_black() {
                return;
            }

            // SAFETY: The root is always black, so a red parent has a parent of its own.
            let grandparent = unsafe { self.nodes[parent].parent.unreachable() };
            let uncle = self.nodes.sibling(parent);

            if let Some(uncle) = uncle
                && self.nodes[uncle].color.is_red()
            {
                // Recoloring keeps black heights intact but may create the same violation two
                // levels up.
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                x = grandparent;
                continue;
            }

            if self.nodes.is_left_child(parent) {
                if self.nodes.is_left_child(x) {
                    self.swap_colors(parent, grandparent);
                } else {
                    self.rotate_left(parent);
                    self.swap_colors(x, grandparent);
                }
                self.rotate_right(grandparent);
            } else {
                if self.nodes.is_left_child(x) {
                    self.rotate_right(parent);
                    self.swap_colors(x, grandparent);
                } else {
                    self.swap_colors(parent, grandparent);
                }
                self.rotate_left(grandparent);
            }
            return;
        }
    }

    /// Repays a missing black node on the path through `x`, either by rotating and recoloring
    /// around its parent or by pushing the deficit up to the parent.
    pub(crate) fn fix_double_black(&mut self, mut x: NodeId) {
        loop {
            let Some(parent) = self.nodes[x].parent else {
                return;
            };

            let Some(sibling) = self.nodes.sibling(x) else {
                x = parent;
                continue;
            };

            if self.nodes[sibling].color.is_red() {
                self.nodes[parent].color = Color::Red;
                self.nodes[sibling].color = Color::Black;
                if self.nodes.is_left_child(sibling) {
                    self.rotate_right(parent);
                } else {
                    self.rotate_left(parent);
                }
                // x now has a black sibling.
                continue;
            }

            let near_left = self.nodes[sibling].left;
            let near_right = self.nodes[sibling].right;

            if self.nodes.is_red(near_left) || self.nodes.is_red(near_right) {
                let sibling_on_left = self.nodes.is_left_child(sibling);
                let parent_color = self.nodes[parent].color;

                if let Some(red) = near_left.filter(|&l| self.nodes[l].color.is_red()) {
                    if sibling_on_left {
                        self.nodes[red].color = self.nodes[sibling].color;
                        self.nodes[sibling].color = parent_color;
                        self.rotate_right(parent);
                    } else {
                        self.nodes[red].color = parent_color;
                        self.rotate_right(sibling);
                        self.rotate_left(parent);
                    }
                } else {
                    // SAFETY: One of the sibling's children is red and it isn't the left one.
                    let red = unsafe { near_right.unreachable() };
                    if sibling_on_left {
                        self.nodes[red].color = parent_color;
                        self.rotate_left(sibling);
                        self.rotate_right(parent);
                    } else {
                        self.nodes[red].color = self.nodes[sibling].color;
                        self.nodes[sibling].color = parent_color;
                        self.rotate_left(parent);
                    }
                }
                self.nodes[parent].color = Color::Black;
                return;
            }

            self.nodes[sibling].color = Color::Red;
            if self.nodes[parent].color.is_black() {
                x = parent;
            } else {
                self.nodes[parent].color = Color::Black;
                return;
            }
        }
    }
}

use super::{InvariantViolation, NodeId, RedBlackTree};
use crate::collections::compare::Comparator;

impl<K, V, C: Comparator<K>> RedBlackTree<K, V, C> {
    /// Checks every structural invariant of the tree, returning its black height (counting the
    /// empty leaves) if they all hold.
    ///
    /// This walks the whole tree and is meant for tests and debugging. A tree only built through
    /// this crate's methods with a comparator that really is a strict weak ordering always passes.
    ///
    /// # Errors
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            if self.len() != 0 {
                return Err(InvariantViolation::Len { len: self.len(), reachable: 0 });
            }
            return Ok(1);
        };

        if self.nodes[root].parent.is_some() {
            return Err(InvariantViolation::Parent {
                child: root,
                parent: self.nodes[root].parent,
            });
        }
        if self.nodes[root].color.is_red() {
            return Err(InvariantViolation::RedRoot { root });
        }

        let mut reachable = 0;
        let height = self.validate_subtree(root, &mut reachable)?;

        let mut previous: Option<NodeId> = None;
        for id in self.handles() {
            if let Some(previous) = previous
                && !self.comparator.less(&self.nodes[previous].key, &self.nodes[id].key)
            {
                return Err(InvariantViolation::Order { node: id, neighbour: previous });
            }
            previous = Some(id);
        }

        if reachable != self.len() {
            return Err(InvariantViolation::Len { len: self.len(), reachable });
        }
        Ok(height)
    }

    fn validate_subtree(
        &self,
        id: NodeId,
        reachable: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        *reachable += 1;
        let node = &self.nodes[id];

        let mut heights = [1, 1];
        for (height, child) in heights.iter_mut().zip([node.left, node.right]) {
            let Some(child) = child else {
                continue;
            };
            if self.nodes[child].parent != Some(id) {
                return Err(InvariantViolation::Parent {
                    child,
                    parent: self.nodes[child].parent,
                });
            }
            if node.color.is_red() && self.nodes[child].color.is_red() {
                return Err(InvariantViolation::RedRed { parent: id, child });
            }
            *height = self.validate_subtree(child, reachable)?;
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantViolation::BlackHeight { node: id, left, right });
        }
        Ok(left + usize::from(node.color.is_black()))
    }
}

use log::{debug, trace};

use super::{InvalidRange, NodeId, RangeError, RedBlackTree, StaleNode};
use crate::collections::compare::Comparator;

impl<K, V, C> RedBlackTree<K, V, C> {
    /// Checks that `begin` and `end` are live and that `end` doesn't come before `begin`.
    fn check_range(&self, begin: NodeId, end: Option<NodeId>) -> Result<(), RangeError>
    where
        C: Comparator<K>,
    {
        let start = self.nodes.get(begin).ok_or(StaleNode { id: begin })?;
        if let Some(end) = end {
            let stop = self.nodes.get(end).ok_or(StaleNode { id: end })?;
            if self.comparator.less(&stop.key, &start.key) {
                return Err(InvalidRange { begin, end }.into());
            }
        }
        Ok(())
    }

    /// Removes every element in `[begin, end)`, in key order, returning how many were removed. An
    /// `end` of None removes everything from `begin` onwards.
    ///
    /// Removing a node can move another node's data (see [`NodeId`]), so the range can't be walked
    /// while deleting. Instead, the keys in the range are cloned into a scratch buffer first and
    /// then removed one at a time by key.
    ///
    /// # Errors
    /// Returns [`RangeError::StaleNode`] if either handle doesn't refer to an element of this tree
    /// and [`RangeError::InvalidRange`] if `end` is ordered before `begin`. The tree is unchanged
    /// in both cases.
    pub fn erase(&mut self, begin: NodeId, end: Option<NodeId>) -> Result<usize, RangeError>
    where
        K: Clone,
        C: Comparator<K>,
    {
        self.check_range(begin, end)?;

        let mut staged = Vec::with_capacity(self.len());
        let mut cursor = Some(begin);
        while let Some(id) = cursor
            && cursor != end
        {
            staged.push(self.nodes[id].key.clone());
            cursor = self.nodes.next(id);
        }
        trace!("staged {} keys for erasure from {}", staged.len(), begin);

        for key in &staged {
            self.remove(key);
        }
        debug!("erased {} elements, {} remain", staged.len(), self.len());
        Ok(staged.len())
    }

    /// Inserts a clone of every entry in `[begin, end)` of `other`, returning how many entries were
    /// visited. An `end` of None runs through the greatest element of `other`.
    ///
    /// # Errors
    /// Fails without inserting anything under the same conditions as [`erase`](Self::erase), with
    /// the handles checked against `other`.
    pub fn extend_from_range(
        &mut self,
        other: &RedBlackTree<K, V, C>,
        begin: NodeId,
        end: Option<NodeId>,
    ) -> Result<usize, RangeError>
    where
        K: Clone,
        V: Clone,
        C: Comparator<K>,
    {
        other.check_range(begin, end)?;

        let mut count = 0;
        let mut cursor = Some(begin);
        while let Some(id) = cursor
            && cursor != end
        {
            let node = &other.nodes[id];
            self.insert(node.key.clone(), node.value.clone());
            cursor = other.nodes.next(id);
            count += 1;
        }
        Ok(count)
    }
}

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

use super::NodeId;

/// A [`NodeId`] was used after the node it referred to was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleNode {
    pub id: NodeId,
}

impl Display for StaleNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Node {} does not refer to an element of this tree!", self.id)
    }
}

impl Error for StaleNode {}

/// The end of a range was ordered before its beginning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    pub begin: NodeId,
    pub end: NodeId,
}

impl Display for InvalidRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Range end {} precedes range start {}!", self.end, self.begin)
    }
}

impl Error for InvalidRange {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum RangeError {
    StaleNode(StaleNode),
    InvalidRange(InvalidRange),
}

/// The first broken invariant found by [`RedBlackTree::validate`](super::RedBlackTree::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum InvariantViolation {
    #[display("Root {root} is red!")]
    RedRoot { root: NodeId },
    #[display("Red node {parent} has red child {child}!")]
    RedRed { parent: NodeId, child: NodeId },
    #[display("Children of {node} have black heights {left} and {right}!")]
    BlackHeight { node: NodeId, left: usize, right: usize },
    #[display("Node {node} is out of order with {neighbour}!")]
    Order { node: NodeId, neighbour: NodeId },
    #[display("Node {child} does not link back to its parent {parent:?}!")]
    Parent { child: NodeId, parent: Option<NodeId> },
    #[display("Tree reports {len} elements but {reachable} are reachable!")]
    Len { len: usize, reachable: usize },
}

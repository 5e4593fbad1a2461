//! A module containing [`RedBlackTree`] and associated types.
//!
//! The tree is the shared core of [`TreeSet`](super::TreeSet) and [`TreeMap`](super::TreeMap), but
//! it is also usable directly when node handles ([`NodeId`]) are wanted, for example to erase a
//! range between two elements that were found earlier.
//!
//! Nodes live in an arena owned by the tree and refer to each other by index. Insertion attaches a
//! red leaf and repairs any red-red violation on the way back up; deletion reduces the two child
//! case to the one child case by moving the in-order successor's data, then repays any lost black
//! height.

mod balance;
mod erase;
mod error;
mod iter;
mod merge;
mod node;
mod red_black_tree;
mod validate;

pub use error::*;
pub use iter::*;
pub use node::{Color, NodeId};
pub(crate) use node::{Link, Node, NodeStore, Side, Slot};
pub use red_black_tree::*;

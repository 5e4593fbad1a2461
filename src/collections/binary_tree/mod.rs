//! Ordered collections built on a red-black tree.
//!
//! [`tree::RedBlackTree`] is the shared core. It works with [`NodeId`](tree::NodeId) handles as
//! well as keys, which is what range erasure needs. [`TreeSet`] and [`TreeMap`] wrap it with the
//! interfaces of the standard ordered collections.

pub mod map;
pub mod set;
pub mod tree;

#[doc(inline)]
pub use map::{DynTreeMap, TreeMap};
#[doc(inline)]
pub use set::{DynTreeSet, TreeSet};

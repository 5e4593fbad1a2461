//! A module containing [`TreeMap`] and associated types.
//!
//! The iterators here are thin wrappers over those of [`RedBlackTree`](super::tree::RedBlackTree),
//! projecting out keys or values where needed. All of them visit entries in key order and can be
//! run from either end.
//!
//! [`TreeMap`] is also re-exported under the parent module.

mod error;
mod iter;
mod tests;
mod tree_map;

pub use error::*;
pub use iter::*;
pub use tree_map::*;

//! Ordered collection types.
//!
//! # Purpose
//! Everything here is built on one red-black tree, which is exposed directly as
//! [`RedBlackTree`](binary_tree::tree::RedBlackTree) for callers that want node handles, and
//! wrapped as [`TreeSet`](binary_tree::TreeSet) and [`TreeMap`](binary_tree::TreeMap) for everyone
//! else.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
pub mod compare;
#[cfg(feature = "traits")]
pub mod traits;

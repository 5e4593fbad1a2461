//! A module containing [`TreeSet`] and associated types.
//!
//! Unlike a hash set, the set operations here return new sets rather than lazy iterators: both
//! operands are already sorted, so a single merge pass over them builds the result in order.
//!
//! There is no mutable iterator over the elements of a set, because mutating them in place could
//! break the ordering the tree relies on.
//!
//! [`TreeSet`] is also re-exported under the parent module.

mod iter;
mod tests;
mod tree_set;

pub use iter::*;
pub use tree_set::*;

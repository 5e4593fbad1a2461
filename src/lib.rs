//! This crate is my attempt at writing the ordered half of a collections library: a red-black tree
//! and the ordered set and map built on top of it.
//!
//! # Purpose
//! Like the rest of my collection types, these exist as a learning exercise first. A balanced
//! binary search tree is the one structure in a collections library where correctness depends on
//! an invariant that has to be restored after every mutation, which makes it worth writing by
//! hand at least once.
//!
//! # Method
//! The tree stores its nodes in an arena and links them by index, rather than by pointer. Parent
//! links are plain indices that never own anything, so rotations stay `O(1)` without any of the
//! aliasing problems of a pointer-linked tree. Both rebalancing procedures are written as loops
//! that walk a cursor towards the root.
//!
//! Ordering is pluggable through [`Comparator`](collections::compare::Comparator). The default,
//! [`Natural`](collections::compare::Natural), uses [`Ord`], but any strict-less-than closure works,
//! either statically ([`ByFn`](collections::compare::ByFn)) or type-erased
//! ([`DynComparator`](collections::compare::DynComparator)).
//!
//! # Error Handling
//! Looking up or removing a key that isn't there is not an error, so those methods return
//! [`Option`]s or simply do nothing. Errors are reserved for misuse of node handles (a handle whose
//! node has since been removed) and for malformed ranges. As elsewhere, these are small structs
//! implementing [`Error`](std::error::Error), combined with enums for static dispatch where an
//! operation can fail in more than one way.
//!
//! Allocation failure is not reported at all: like [`Vec`], the process aborts.
//!
//! # Dependencies
//! `derive_more` for error boilerplate and variant predicates, and `log` for the few diagnostics
//! emitted by bulk operations. No logger is installed by this crate.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

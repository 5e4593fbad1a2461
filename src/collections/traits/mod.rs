//! Traits shared between collection types.

pub mod set;

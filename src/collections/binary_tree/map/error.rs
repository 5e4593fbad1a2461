use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A [`TreeMap`](super::TreeMap) was indexed with a key it doesn't contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to index TreeMap with a key it doesn't contain!")
    }
}

impl Error for KeyNotFound {}

use std::fmt::{self, Debug, Formatter};

/// Writes a pre-rendered string verbatim when used as a [`Debug`] field, so multi-line tree
/// drawings survive `debug_struct`.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

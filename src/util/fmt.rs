use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, so pre-rendered entries don't get
/// quoted a second time.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

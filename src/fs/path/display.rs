use std::fmt::{self, Display, Formatter};

use super::OwnedPath;

/// Displays the visible part of a path. Created by
/// [`OwnedPath::display`](super::OwnedPath::display).
pub struct DisplayPath<'a> {
    pub(crate) inner: &'a OwnedPath,
}

/// Displays the whole buffer of a path, including components hidden by a pop.
pub struct DisplayFull<'a> {
    pub(crate) inner: &'a OwnedPath,
}

/// Displays the visible part of a path without its leading slash.
pub struct DisplayNoLead<'a> {
    pub(crate) inner: &'a OwnedPath,
}

impl<'a> DisplayPath<'a> {
    pub const fn full(&self) -> DisplayFull<'a> {
        DisplayFull {
            inner: self.inner,
        }
    }

    pub const fn no_lead(&self) -> DisplayNoLead<'a> {
        DisplayNoLead {
            inner: self.inner,
        }
    }
}

impl Display for DisplayPath<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.as_str())
    }
}

impl Display for DisplayFull<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.full())
    }
}

impl Display for DisplayNoLead<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let visible = self.inner.as_str();
        write!(f, "{}", visible.strip_prefix('/').unwrap_or(visible))
    }
}

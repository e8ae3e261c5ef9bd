use std::fmt::{self, Display, Formatter};

use super::{Ancestors, Components, DisplayPath, PathError, canonicalize_str, is_canonical};

/// An owned, mutable path string with a cursor over its components.
///
/// The cursor marks how much of the buffer is visible: [`pop`](OwnedPath::pop) hides the last
/// visible component and [`push`](OwnedPath::push) restores it again, so a consumer can walk up
/// towards the root and back down without reallocating or reparsing. Everything that reads the
/// path ([`as_str`](OwnedPath::as_str), [`components`](OwnedPath::components), [`Display`], ...)
/// sees only the visible part; [`full`](OwnedPath::full) sees the whole buffer.
///
/// # Invariants
/// - The visible length is at most the length of the buffer.
/// - The visible length is either the full length or the index of a `/` in the buffer.
///
/// After [`canonicalize`](OwnedPath::canonicalize), the buffer also:
/// - Is empty or starts with '/'.
/// - Contains no repeated '/' characters and no `.` or `..` components.
/// - Contains no trailing '/', unless it is exactly "/".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnedPath {
    pub(crate) inner: String,
    pub(crate) visible: usize,
}

impl OwnedPath {
    /// Creates a new path from `value` as given, with the whole path visible. The value isn't
    /// canonicalized.
    pub fn new(value: impl Into<String>) -> OwnedPath {
        let inner = value.into();
        OwnedPath {
            visible: inner.len(),
            inner,
        }
    }

    /// Creates a new path from an optional string, yielding None for an absent one.
    pub fn from_opt(value: Option<&str>) -> Option<OwnedPath> {
        value.map(OwnedPath::new)
    }

    /// Returns the root path, "/".
    pub fn root() -> OwnedPath {
        OwnedPath::new("/")
    }

    /// Returns the visible part of the path.
    pub fn as_str(&self) -> &str {
        &self.inner[..self.visible]
    }

    /// Returns the whole buffer, including any components hidden by [`pop`](OwnedPath::pop).
    pub fn full(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the visible part of the path, in bytes.
    pub const fn len(&self) -> usize {
        self.visible
    }

    /// Returns true if the visible part of the path is empty.
    pub const fn is_empty(&self) -> bool {
        self.visible == 0
    }

    /// Returns true if the visible part of the path is exactly "/".
    pub fn is_root(&self) -> bool {
        self.as_str() == "/"
    }

    /// Returns true if the whole buffer is in canonical form.
    pub fn is_canonical(&self) -> bool {
        is_canonical(&self.inner)
    }

    /// Returns the number of visible components.
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// Canonicalizes the whole buffer in place (see [`canonicalize_str`]) and makes all of it
    /// visible again.
    ///
    /// An [`Err`] is only returned if memory for the result couldn't be allocated, in which case
    /// the path is left untouched.
    pub fn canonicalize(&mut self) -> Result<(), PathError> {
        let canonical = canonicalize_str(&self.inner)?;
        log::trace!("canonicalized {:?} to {:?}", self.inner, canonical);

        self.inner = canonical;
        self.visible = self.inner.len();
        Ok(())
    }

    /// Hides the last visible component, so that "/var/clockwork" becomes "/var".
    ///
    /// Returns true if a component was hidden, or false (leaving the path unchanged) if at most one
    /// component is visible.
    pub fn pop(&mut self) -> bool {
        match self.as_str().rfind('/') {
            Some(index) if index > 0 => {
                self.visible = index;
                log::trace!("popped path to {:?}", self.as_str());
                true
            },
            _ => false,
        }
    }

    /// Restores the component most recently hidden by [`pop`](OwnedPath::pop).
    ///
    /// Returns true if a component was restored, or false if the whole path is already visible.
    pub fn push(&mut self) -> bool {
        if self.visible >= self.inner.len() {
            return false;
        }

        // The byte at `visible` is the '/' that the last pop stopped at.
        let start = self.visible + 1;
        self.visible = match self.inner[start..].find('/') {
            Some(offset) => start + offset,
            None => self.inner.len(),
        };
        log::trace!("pushed path to {:?}", self.as_str());
        true
    }

    /// Makes the whole path visible again.
    pub fn reset(&mut self) {
        self.visible = self.inner.len();
    }

    /// Returns an iterator over the visible components, without their slashes.
    pub fn components(&self) -> Components<'_> {
        Components {
            path: self.as_str(),
            head: 0,
            tail: self.visible,
        }
    }

    /// Returns an iterator over the visible path's ancestors, from its first component down to the
    /// visible path itself.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            path: self.as_str(),
            index: 0,
        }
    }

    /// Returns a value that can display the path in different ways. Displaying it directly shows
    /// the visible path.
    pub const fn display(&self) -> DisplayPath<'_> {
        DisplayPath {
            inner: self,
        }
    }

    /// Consumes the path, returning the whole buffer.
    pub fn into_string(self) -> String {
        self.inner
    }
}

impl From<&str> for OwnedPath {
    fn from(value: &str) -> Self {
        OwnedPath::new(value)
    }
}

impl From<String> for OwnedPath {
    fn from(value: String) -> Self {
        OwnedPath::new(value)
    }
}

impl AsRef<str> for OwnedPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for OwnedPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

use std::iter::FusedIterator;

/// An iterator over the components of a path, without their separating slashes. Created by
/// [`OwnedPath::components`](super::OwnedPath::components).
#[derive(Debug, Clone)]
pub struct Components<'a> {
    pub(crate) path: &'a str,
    pub(crate) head: usize,
    pub(crate) tail: usize,
}

impl<'a> Components<'a> {
    fn bytes(&self) -> &'a [u8] {
        self.path.as_bytes()
    }
}

impl<'a> Iterator for Components<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.head < self.tail && self.bytes()[self.head] == b'/' {
            self.head += 1;
        }
        if self.head >= self.tail {
            None?
        }

        let mut end = self.head + 1;
        while end < self.tail && self.bytes()[end] != b'/' {
            end += 1;
        }

        let res = &self.path[self.head..end];
        self.head = end;
        Some(res)
    }
}

impl DoubleEndedIterator for Components<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while self.tail > self.head && self.bytes()[self.tail - 1] == b'/' {
            self.tail -= 1;
        }
        if self.tail <= self.head {
            None?
        }

        let mut start = self.tail - 1;
        while start > self.head && self.bytes()[start - 1] != b'/' {
            start -= 1;
        }

        let res = &self.path[start..self.tail];
        self.tail = start;
        Some(res)
    }
}

impl FusedIterator for Components<'_> {}

/// An iterator over the ancestors of a path, from the first component down to the path itself.
/// Created by [`OwnedPath::ancestors`](super::OwnedPath::ancestors).
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    pub(crate) path: &'a str,
    pub(crate) index: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.path.as_bytes();
        if self.index >= bytes.len() {
            None?
        }
        self.index += 1;

        while self.index < bytes.len() && bytes[self.index] != b'/' {
            self.index += 1;
        }

        Some(&self.path[..self.index])
    }
}

impl FusedIterator for Ancestors<'_> {}

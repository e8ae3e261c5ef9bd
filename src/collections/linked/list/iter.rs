use std::iter::FusedIterator;

use super::{Links, Node, NodeKey};

/// A double-ended iterator over the records of one list, created by [`Links::iter`].
pub struct Iter<'a, T> {
    pub(crate) links: &'a Links<T>,
    // The next nodes to yield from either end. Both become None together once they meet.
    pub(crate) front: Option<NodeKey>,
    pub(crate) back: Option<NodeKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.front?;

        if self.back == Some(key) {
            self.front = None;
            self.back = None;
        } else {
            self.front = Some(self.links.link(key).next);
        }

        self.links.nodes.get(key).and_then(Node::value)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.back?;

        if self.front == Some(key) {
            self.front = None;
            self.back = None;
        } else {
            self.back = Some(self.links.link(key).prev);
        }

        self.links.nodes.get(key).and_then(Node::value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            links: self.links,
            front: self.front,
            back: self.back,
        }
    }
}

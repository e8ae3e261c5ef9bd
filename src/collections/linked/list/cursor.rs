use super::{EntryId, Link, Links, ListId, NodeKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub const fn step(self, link: Link) -> NodeKey {
        match self {
            Direction::Forward => link.next,
            Direction::Backward => link.prev,
        }
    }
}

/// A cursor over the entries of one list that reads the following handle before yielding the
/// current one.
///
/// Because the cursor only borrows the arena for the duration of each
/// [`advance`](SafeCursor::advance), the entry it just yielded may be deleted, moved to another
/// list or removed from the arena before advancing again. Any other change to the list being
/// walked, including moving the current entry to the far end of the same list, leaves the rest of
/// the walk unspecified.
#[derive(Debug, Clone)]
pub struct SafeCursor {
    pub(crate) list: NodeKey,
    pub(crate) next: NodeKey,
    pub(crate) direction: Direction,
}

impl SafeCursor {
    pub(crate) fn new<T>(links: &Links<T>, list: ListId, direction: Direction) -> SafeCursor {
        let next = match links.nodes.get(list.0) {
            Some(node) if node.kind.is_head() => direction.step(node.link),
            _ => list.0,
        };

        SafeCursor {
            list: list.0,
            next,
            direction,
        }
    }

    /// Returns the next entry of the list, or None once the walk is back at the header.
    pub fn advance<T>(&mut self, links: &Links<T>) -> Option<EntryId> {
        if self.next == self.list {
            None?
        }
        let current = self.next;
        let node = links.nodes.get(current)?;

        self.next = self.direction.step(node.link);
        Some(EntryId(current))
    }
}

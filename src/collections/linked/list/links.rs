use std::fmt::{self, Debug, Formatter};

use slotmap::SlotMap;

use super::{Direction, EntryId, Iter, Link, LinkError, ListId, Node, NodeKey, NodeKind, SafeCursor};
use crate::util::result::ResultExtension;

/// An arena of owner records and the circular, doubly-linked lists threading through them.
///
/// This is an intrusive list expressed with handles rather than embedded pointers: every record
/// and every list header is a node in the same arena, and each node carries its own `prev`/`next`
/// link. A list is a header whose links form a cycle through its entries, so an empty list is a
/// header linked to itself, and an entry that isn't in any list is likewise linked to itself.
///
/// The list operations ([`add_head`](Links::add_head), [`del`](Links::del),
/// [`move_tail`](Links::move_tail), [`join`](Links::join), ...) only ever rewrite links. They never
/// create or destroy records; that is done separately with [`insert`](Links::insert) and
/// [`remove`](Links::remove).
///
/// Each list operation comes in two forms: a `try_*` method returning a [`LinkError`] for stale
/// handles or misuse, and a plain method that panics with the same error.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the list in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert/remove` | `O(1)` |
/// | `add_head/tail` | `O(1)` |
/// | `del` | `O(1)` |
/// | `move_head/tail` | `O(1)` |
/// | `replace` | `O(1)` |
/// | `join` | `O(1)` |
/// | `head/tail` | `O(1)` |
/// | `len` | `O(n)` |
/// | `remove_list` | `O(n)` |
pub struct Links<T> {
    pub(crate) nodes: SlotMap<NodeKey, Node<T>>,
}

impl<T> Links<T> {
    /// Creates a new, empty arena.
    pub fn new() -> Links<T> {
        Links {
            nodes: SlotMap::with_key(),
        }
    }

    /// Creates a new, empty arena with room for `cap` nodes (records and headers combined).
    pub fn with_capacity(cap: usize) -> Links<T> {
        Links {
            nodes: SlotMap::with_capacity_and_key(cap),
        }
    }

    /// Creates a new, empty list.
    pub fn new_list(&mut self) -> ListId {
        ListId(self.alloc(NodeKind::Head))
    }

    /// Destroys the header of `list`. Any entries still in the list are unlinked and stay in the
    /// arena.
    pub fn remove_list(&mut self, list: ListId) -> Result<(), LinkError> {
        self.check_list(list).map_err(|e| rejected("remove_list", e))?;

        let mut cursor = self.cursor(list);
        while let Some(entry) = cursor.advance(self) {
            *self.link_mut(entry.0) = Link::detached(entry.0);
        }
        self.nodes.remove(list.0);
        Ok(())
    }

    /// Adds `value` to the arena as a record that isn't in any list yet.
    pub fn insert(&mut self, value: T) -> EntryId {
        EntryId(self.alloc(NodeKind::Entry(value)))
    }

    /// Removes the record for `entry` from the arena, unlinking it from its list first. Returns
    /// None if the handle is stale.
    pub fn remove(&mut self, entry: EntryId) -> Option<T> {
        self.check_entry(entry).ok()?;
        self.unlink(entry.0);

        match self.nodes.remove(entry.0)?.kind {
            NodeKind::Entry(value) => Some(value),
            NodeKind::Head => None,
        }
    }

    /// Returns a reference to the record for `entry`, or None if the handle is stale.
    pub fn get(&self, entry: EntryId) -> Option<&T> {
        self.nodes.get(entry.0)?.value()
    }

    /// Returns a mutable reference to the record for `entry`, or None if the handle is stale.
    pub fn get_mut(&mut self, entry: EntryId) -> Option<&mut T> {
        self.nodes.get_mut(entry.0)?.value_mut()
    }

    /// Returns true if `entry` is a live record that currently sits in a list.
    pub fn is_linked(&self, entry: EntryId) -> bool {
        match self.nodes.get(entry.0) {
            Some(node) if node.kind.is_entry() => node.link.next != entry.0,
            _ => false,
        }
    }

    /// Returns true if `list` contains no entries. A stale list handle is considered empty.
    pub fn is_empty(&self, list: ListId) -> bool {
        self.head_id(list).is_none()
    }

    /// Counts the entries in `list`.
    pub fn len(&self, list: ListId) -> usize {
        self.iter(list).count()
    }

    /// Returns the handle of the first entry in `list`, if there is one.
    pub fn head_id(&self, list: ListId) -> Option<EntryId> {
        self.end_of(list, Direction::Forward)
    }

    /// Returns the handle of the last entry in `list`, if there is one.
    pub fn tail_id(&self, list: ListId) -> Option<EntryId> {
        self.end_of(list, Direction::Backward)
    }

    /// Returns a reference to the first record in `list`, if there is one.
    pub fn head(&self, list: ListId) -> Option<&T> {
        self.get(self.head_id(list)?)
    }

    /// Returns a reference to the last record in `list`, if there is one.
    pub fn tail(&self, list: ListId) -> Option<&T> {
        self.get(self.tail_id(list)?)
    }

    /// Adds the unlinked `entry` at the head of `list`.
    ///
    /// # Panics
    /// Panics if either handle is stale or if `entry` is already in a list.
    pub fn add_head(&mut self, entry: EntryId, list: ListId) {
        self.try_add_head(entry, list).throw()
    }

    /// Adds the unlinked `entry` at the head of `list`, returning an [`Err`] rather than
    /// panicking.
    pub fn try_add_head(&mut self, entry: EntryId, list: ListId) -> Result<(), LinkError> {
        self.check_unlinked(entry)
            .and(self.check_list(list))
            .map_err(|e| rejected("add_head", e))?;

        let next = self.link(list.0).next;
        self.splice(entry.0, list.0, next);
        Ok(())
    }

    /// Adds the unlinked `entry` at the tail of `list`.
    ///
    /// # Panics
    /// Panics if either handle is stale or if `entry` is already in a list.
    pub fn add_tail(&mut self, entry: EntryId, list: ListId) {
        self.try_add_tail(entry, list).throw()
    }

    /// Adds the unlinked `entry` at the tail of `list`, returning an [`Err`] rather than
    /// panicking.
    pub fn try_add_tail(&mut self, entry: EntryId, list: ListId) -> Result<(), LinkError> {
        self.check_unlinked(entry)
            .and(self.check_list(list))
            .map_err(|e| rejected("add_tail", e))?;

        let prev = self.link(list.0).prev;
        self.splice(entry.0, prev, list.0);
        Ok(())
    }

    /// Unlinks `entry` from its list, leaving it linked to itself. Deleting an entry that isn't in
    /// a list does nothing.
    ///
    /// # Panics
    /// Panics if `entry` is stale.
    pub fn del(&mut self, entry: EntryId) {
        self.try_del(entry).throw()
    }

    /// Unlinks `entry` from its list, returning an [`Err`] rather than panicking.
    pub fn try_del(&mut self, entry: EntryId) -> Result<(), LinkError> {
        self.check_entry(entry).map_err(|e| rejected("del", e))?;
        self.unlink(entry.0);
        Ok(())
    }

    /// Moves `entry` from wherever it is (this list, another one or none at all) to the head of
    /// `list`.
    ///
    /// # Panics
    /// Panics if either handle is stale.
    pub fn move_head(&mut self, entry: EntryId, list: ListId) {
        self.try_move_head(entry, list).throw()
    }

    /// Moves `entry` to the head of `list`, returning an [`Err`] rather than panicking.
    pub fn try_move_head(&mut self, entry: EntryId, list: ListId) -> Result<(), LinkError> {
        self.check_entry(entry)
            .and(self.check_list(list))
            .map_err(|e| rejected("move_head", e))?;

        self.unlink(entry.0);
        let next = self.link(list.0).next;
        self.splice(entry.0, list.0, next);
        Ok(())
    }

    /// Moves `entry` from wherever it is (this list, another one or none at all) to the tail of
    /// `list`.
    ///
    /// # Panics
    /// Panics if either handle is stale.
    pub fn move_tail(&mut self, entry: EntryId, list: ListId) {
        self.try_move_tail(entry, list).throw()
    }

    /// Moves `entry` to the tail of `list`, returning an [`Err`] rather than panicking.
    pub fn try_move_tail(&mut self, entry: EntryId, list: ListId) -> Result<(), LinkError> {
        self.check_entry(entry)
            .and(self.check_list(list))
            .map_err(|e| rejected("move_tail", e))?;

        self.unlink(entry.0);
        let prev = self.link(list.0).prev;
        self.splice(entry.0, prev, list.0);
        Ok(())
    }

    /// Puts the unlinked entry `new` exactly where `old` is, leaving `old` linked to itself.
    ///
    /// # Panics
    /// Panics if either handle is stale, if `old` isn't in a list or if `new` already is.
    pub fn replace(&mut self, old: EntryId, new: EntryId) {
        self.try_replace(old, new).throw()
    }

    /// Puts the unlinked entry `new` exactly where `old` is, returning an [`Err`] rather than
    /// panicking.
    pub fn try_replace(&mut self, old: EntryId, new: EntryId) -> Result<(), LinkError> {
        self.check_linked(old)
            .and(self.check_unlinked(new))
            .map_err(|e| rejected("replace", e))?;

        let Link { prev, next } = self.link(old.0);
        self.splice(new.0, prev, next);
        *self.link_mut(old.0) = Link::detached(old.0);
        Ok(())
    }

    /// Appends every entry of `src` to the tail of `dst`, keeping their order, and leaves `src`
    /// empty.
    ///
    /// # Panics
    /// Panics if either handle is stale or if both refer to the same list.
    pub fn join(&mut self, dst: ListId, src: ListId) {
        self.try_join(dst, src).throw()
    }

    /// Appends every entry of `src` to the tail of `dst`, returning an [`Err`] rather than
    /// panicking.
    pub fn try_join(&mut self, dst: ListId, src: ListId) -> Result<(), LinkError> {
        self.check_list(dst)
            .and(self.check_list(src))
            .and(match dst == src {
                true => Err(LinkError::SelfJoin),
                false => Ok(()),
            })
            .map_err(|e| rejected("join", e))?;

        let Link { prev: last, next: first } = self.link(src.0);
        if first == src.0 {
            return Ok(());
        }
        let dst_tail = self.link(dst.0).prev;

        self.link_mut(dst_tail).next = first;
        self.link_mut(first).prev = dst_tail;
        self.link_mut(last).next = dst.0;
        self.link_mut(dst.0).prev = last;
        *self.link_mut(src.0) = Link::detached(src.0);
        Ok(())
    }

    /// Returns a double-ended iterator over the records in `list`, from head to tail.
    pub fn iter(&self, list: ListId) -> Iter<'_, T> {
        Iter {
            links: self,
            front: self.head_id(list).map(|e| e.0),
            back: self.tail_id(list).map(|e| e.0),
        }
    }

    /// Returns a cursor walking `list` from head to tail that tolerates the current entry being
    /// deleted, moved or removed.
    pub fn cursor(&self, list: ListId) -> SafeCursor {
        SafeCursor::new(self, list, Direction::Forward)
    }

    /// Returns a cursor walking `list` from tail to head that tolerates the current entry being
    /// deleted, moved or removed.
    pub fn cursor_back(&self, list: ListId) -> SafeCursor {
        SafeCursor::new(self, list, Direction::Backward)
    }
}

impl<T> Links<T> {
    pub(crate) fn alloc(&mut self, kind: NodeKind<T>) -> NodeKey {
        self.nodes.insert_with_key(|key| Node {
            link: Link::detached(key),
            kind,
        })
    }

    /// Returns the link of a node that has already been checked to be live.
    pub(crate) fn link(&self, key: NodeKey) -> Link {
        self.nodes[key].link
    }

    pub(crate) fn link_mut(&mut self, key: NodeKey) -> &mut Link {
        &mut self.nodes[key].link
    }

    /// Links the detached node `key` in between `prev` and `next`, which must be adjacent.
    pub(crate) fn splice(&mut self, key: NodeKey, prev: NodeKey, next: NodeKey) {
        *self.link_mut(key) = Link { prev, next };
        self.link_mut(prev).next = key;
        self.link_mut(next).prev = key;
    }

    /// Closes the gap around `key` and links it to itself. Does nothing for a detached node.
    pub(crate) fn unlink(&mut self, key: NodeKey) {
        let Link { prev, next } = self.link(key);
        if next == key {
            return;
        }
        self.link_mut(prev).next = next;
        self.link_mut(next).prev = prev;
        *self.link_mut(key) = Link::detached(key);
    }

    pub(crate) fn end_of(&self, list: ListId, direction: Direction) -> Option<EntryId> {
        let node = self.nodes.get(list.0)?;
        if !node.kind.is_head() {
            None?
        }

        let end = direction.step(node.link);
        match end == list.0 {
            true => None,
            false => Some(EntryId(end)),
        }
    }

    pub(crate) fn check_list(&self, list: ListId) -> Result<(), LinkError> {
        match self.nodes.get(list.0) {
            Some(node) if node.kind.is_head() => Ok(()),
            _ => Err(LinkError::StaleHandle),
        }
    }

    pub(crate) fn check_entry(&self, entry: EntryId) -> Result<(), LinkError> {
        match self.nodes.get(entry.0) {
            Some(node) if node.kind.is_entry() => Ok(()),
            _ => Err(LinkError::StaleHandle),
        }
    }

    pub(crate) fn check_linked(&self, entry: EntryId) -> Result<(), LinkError> {
        self.check_entry(entry)?;
        match self.is_linked(entry) {
            true => Ok(()),
            false => Err(LinkError::NotLinked),
        }
    }

    pub(crate) fn check_unlinked(&self, entry: EntryId) -> Result<(), LinkError> {
        self.check_entry(entry)?;
        match self.is_linked(entry) {
            true => Err(LinkError::AlreadyLinked),
            false => Ok(()),
        }
    }

    /// Walks every list in the arena, asserting that each `next` is mirrored by a `prev`.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        for (key, node) in self.nodes.iter() {
            let next = self.nodes.get(node.link.next).unwrap();
            let prev = self.nodes.get(node.link.prev).unwrap();
            assert!(next.link.prev == key);
            assert!(prev.link.next == key);
        }
    }
}

fn rejected(op: &str, error: LinkError) -> LinkError {
    log::debug!("list {op} rejected: {error}");
    error
}

impl<T> Default for Links<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Links<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Links")
            .field("lists", &self.nodes.values().filter(|n| n.kind.is_head()).count())
            .field("records", &self.nodes.values().filter_map(Node::value).collect::<Vec<_>>())
            .finish()
    }
}

use super::NodeKey;

/// A handle to a list header stored in a [`Links`](super::Links) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(pub(crate) NodeKey);

/// A handle to an owner record stored in a [`Links`](super::Links) arena.
///
/// Handles are generational: once the record is removed, the handle is stale for good, even if
/// the slot is reused for another record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) NodeKey);

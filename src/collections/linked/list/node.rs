use derive_more::IsVariant;

slotmap::new_key_type! {
    pub(crate) struct NodeKey;
}

pub(crate) struct Node<T> {
    pub link: Link,
    pub kind: NodeKind<T>,
}

#[derive(IsVariant)]
pub(crate) enum NodeKind<T> {
    Head,
    Entry(T),
}

/// The embedded half of every node. A node whose link points back at itself is either an empty
/// list header or an entry that isn't in any list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    pub prev: NodeKey,
    pub next: NodeKey,
}

impl Link {
    pub const fn detached(key: NodeKey) -> Link {
        Link {
            prev: key,
            next: key,
        }
    }
}

impl<T> Node<T> {
    pub const fn value(&self) -> Option<&T> {
        match &self.kind {
            NodeKind::Entry(value) => Some(value),
            NodeKind::Head => None,
        }
    }

    pub const fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.kind {
            NodeKind::Entry(value) => Some(value),
            NodeKind::Head => None,
        }
    }
}

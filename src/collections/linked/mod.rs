//! Linked collection types. Revolves around [`Links`], an arena of owner records and circular list
//! headers, addressed through [`ListId`] and [`EntryId`] handles.

pub mod list;

#[doc(inline)]
pub use list::{EntryId, LinkError, Links, ListId, SafeCursor};

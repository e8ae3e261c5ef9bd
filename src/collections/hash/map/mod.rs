//! A module containing [`BucketMap`] and associated types.
//!
//! Alongside the map itself, this module provides the [`digest`] function used to place keys into
//! buckets and the iterators over entries, keys or values in a map.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating the keys of a
//! BucketMap in place would cause a logic error.
//!
//! [`BucketMap`] is also re-exported under the parent module.

mod bucket_map;
mod digest;
mod iter;

pub use bucket_map::*;
pub use digest::*;
pub use iter::*;

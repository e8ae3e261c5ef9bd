//! A handful of the utility primitives that a general-purpose support library hands to the rest of
//! a program: a fixed-keyspace hash map, an intrusive list and a path value that can be normalized
//! and walked component by component.
//!
//! # Purpose
//! Each primitive is small and stands on its own. None of them depends on another, so each one can
//! be switched off with its Cargo feature (`hash`, `linked` and `fs`) without affecting the rest.
//!
//! # Method
//! - [`BucketMap`](collections::hash::BucketMap) keeps a fixed array of buckets chosen at
//!   construction and never resizes. Keys that land in the same bucket are chained.
//! - [`Links`](collections::linked::Links) stores owner records and list headers side by side in
//!   an arena. Lists are circular and every operation on them only rewrites handles, so adding,
//!   removing, moving and splicing are all `O(1)`.
//! - [`OwnedPath`](fs::path::OwnedPath) canonicalizes lexically (no filesystem access, no symlink
//!   resolution) and carries a cursor that hides and restores trailing components.
//!
//! # Error Handling
//! Misses are [`Option`]s. Operations that can be misused (stale handles, double linking) have a
//! `try_*` form returning a strongly typed [`Result`] and a plain form that panics with the
//! error's message, in the same way that indexing out of bounds panics.
//!
//! # Logging
//! The crate emits events through the [`log`] facade and never installs a logger itself.
//! Canonicalization and cursor movement log at `trace`, bucket collisions and rejected list
//! operations at `debug`.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "fs")]
pub mod fs;

pub(crate) mod util;

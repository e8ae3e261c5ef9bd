//! General-purpose collection types.
//!
//! [`hash::BucketMap`] never resizes and [`linked::Links`] never allocates or frees anything
//! during list operations.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;

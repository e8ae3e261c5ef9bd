//! Filesystem-adjacent types.
//!
//! Nothing in here touches the filesystem: [`path::OwnedPath`] is a purely lexical value, so
//! canonicalizing `/etc/../tmp` never checks whether `/etc` exists or follows any symlinks.

pub mod path;

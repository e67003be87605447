//! Local Profile Cache
//!
//! Holds the profiles of users served by this node. It is the only tier the
//! inbound remote server ever consults.
//!
//! ## Locking discipline
//! The mapping is a sharded concurrent map. Each operation holds a shard lock
//! only for its own duration; callers never hold a cache guard across a remote
//! or store call.

pub mod local;

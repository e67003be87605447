//! Profile Resolution Engine
//!
//! Answers "give me the profile of user X" on any node, wherever X is
//! connected.
//!
//! ## Resolution tiers
//! 1. **Local**: this node's `LocalCache`. A hit does no further work.
//! 2. **Directory**: the `NodeDirectory` names the node serving X, if any.
//! 3. **Store**: no owner and fallback allowed, so X is offline and the durable
//!    store holds the latest profile.
//! 4. **Remote**: an owner exists, so the profile is fetched from that node's
//!    cache. A failed fetch is an error, never a silent store fallback, and the
//!    fetched copy is never cached here.
//!
//! ## Submodules
//! - **`engine`**: `ProfileResolver`, the tiers above plus the cache write path
//!   (cache, uncache, push, refresh).
//! - **`protocol`** / **`handlers`**: The public HTTP surface of a node.

pub mod engine;
pub mod handlers;
pub mod protocol;

//! Tiered Profile Resolution Library
//!
//! Resolves a user's profile on any node of a fleet of cooperating servers,
//! whichever node the user is actually connected to.
//!
//! ## Architecture Modules
//! - **`profile`**: The profile record, its identifier, and the `ProfileKind`
//!   hooks a concrete profile flavour implements.
//! - **`cache`**: This node's concurrent local cache of profiles.
//! - **`store`**: The narrow boundary to the durable document store.
//! - **`directory`**: The boundary to the presence service mapping users to nodes.
//! - **`remote`**: Peer channels, the outbound fetch client and the inbound
//!   fetch server.
//! - **`resolver`**: The tiered resolution engine and the node's public HTTP API.
//! - **`config`** / **`error`**: Tuning knobs and the error taxonomy.

pub mod cache;
pub mod config;
pub mod directory;
pub mod error;
pub mod profile;
pub mod remote;
pub mod resolver;
pub mod store;

#[cfg(test)]
mod test_support;

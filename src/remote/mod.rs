//! Peer Remote-Call Layer
//!
//! Fetches profiles from the node that currently serves a user, and answers
//! the same request when a peer asks this node.
//!
//! ## Submodules
//! - **`protocol`**: Endpoint and DTOs of the fetch-by-identifier call.
//! - **`pool`**: `PeerChannelPool`, one reusable channel per node id.
//! - **`client`**: `RemoteProfileClient`, a single outbound fetch.
//! - **`server`**: `RemoteProfileServer`, the inbound side. It answers from the
//!   local cache only, so a fetch never recurses across the cluster.

pub mod client;
pub mod pool;
pub mod protocol;
pub mod server;

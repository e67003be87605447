//! Public Node API
//!
//! Endpoints and DTOs a client uses to talk to any node of the fleet.

use crate::profile::types::Profile;
use serde::{Deserialize, Serialize};

/// `PUT` caches the profile in the request body on this node.
pub const ENDPOINT_PROFILE: &str = "/profile";
/// `GET` resolves, `DELETE` uncaches.
pub const ENDPOINT_PROFILE_BY_ID: &str = "/profile/:uuid";
/// `POST` writes a cached profile to the store.
pub const ENDPOINT_PUSH: &str = "/profile/:uuid/push";
/// `POST` runs the update hook on every cached profile.
pub const ENDPOINT_REFRESH: &str = "/profiles/refresh";

/// Query of a resolve request.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ResolveParams {
    /// Consult the durable store when no node owns the profile. Defaults to true.
    pub fallback: Option<bool>,
}

/// Reply of a resolve request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResponse {
    /// The resolved profile. `None` with no `error` means it exists nowhere.
    pub profile: Option<Profile>,
    /// Set when a tier failed to answer.
    pub error: Option<String>,
}

/// Query of a push request.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PushParams {
    /// Evict the profile from this node once the store write completed.
    /// Defaults to false.
    pub uncache: Option<bool>,
}

/// Standard acknowledgment for cache and store writes.
#[derive(Debug, Serialize, Deserialize)]
pub struct AckResponse {
    /// For uncache, false means nothing was cached under the id.
    pub success: bool,
}

/// Reply of a refresh request.
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Number of cached profiles the update hook ran on.
    pub updated: usize,
}

//! Remote Fetch Protocol
//!
//! Request/response pair exchanged between nodes when one of them resolves a
//! profile owned by the other. Bodies are JSON over HTTP.
//!
//! A peer that does not hold the identifier answers `404 Not Found` with no
//! body; a malformed identifier is answered with `400 Bad Request`.

use serde::{Deserialize, Serialize};

/// Internal endpoint for fetching a profile from the node that serves it.
pub const ENDPOINT_FETCH_PROFILE: &str = "/internal/profile/fetch";

/// Fetch request. `uuid` is the string form of the profile identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileRequest {
    /// Identifier of the requested profile.
    pub uuid: String,
}

/// Fetch reply carrying the serialized profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileReply {
    /// The profile in its `Profile::serialize` form.
    pub json_profile: String,
}

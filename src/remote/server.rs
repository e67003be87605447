use super::protocol::{ENDPOINT_FETCH_PROFILE, ProfileReply, ProfileRequest};
use crate::cache::local::LocalCache;
use crate::profile::types::ProfileId;

use axum::{Extension, Json, Router, http::StatusCode, routing::post};
use std::sync::Arc;

/// Inbound side of the remote fetch call.
///
/// Answers from this node's local cache and nothing else: no directory, no
/// store and no further peers. A node only ever reports on users it serves.
pub struct RemoteProfileServer {
    cache: LocalCache,
}

impl RemoteProfileServer {
    pub fn new(cache: LocalCache) -> Arc<Self> {
        Arc::new(Self { cache })
    }

    pub fn answer(&self, request: &ProfileRequest) -> Result<ProfileReply, StatusCode> {
        let uuid: ProfileId = match request.uuid.parse() {
            Ok(uuid) => uuid,
            Err(e) => {
                tracing::warn!("Rejected fetch for malformed uuid '{}': {}", request.uuid, e);
                return Err(StatusCode::BAD_REQUEST);
            }
        };

        let profile = match self.cache.get(&uuid) {
            Some(profile) => profile,
            None => {
                tracing::debug!("Peer asked for {} which is not cached here", uuid);
                return Err(StatusCode::NOT_FOUND);
            }
        };

        match profile.serialize() {
            Ok(json_profile) => Ok(ProfileReply { json_profile }),
            Err(e) => {
                tracing::error!("Failed to serialize profile {}: {}", uuid, e);
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    /// Router exposing the fetch endpoint, ready to merge into a node's app.
    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route(ENDPOINT_FETCH_PROFILE, post(handle_fetch_profile))
            .layer(Extension(self))
    }
}

pub async fn handle_fetch_profile(
    Extension(server): Extension<Arc<RemoteProfileServer>>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<ProfileReply>, StatusCode> {
    server.answer(&req).map(Json)
}

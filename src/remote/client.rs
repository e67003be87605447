use super::pool::PeerChannel;
use super::protocol::{ENDPOINT_FETCH_PROFILE, ProfileReply, ProfileRequest};
use crate::error::RemoteError;
use crate::profile::types::{Profile, ProfileId};

use std::time::Duration;

/// Issues one fetch-by-identifier call against a peer channel.
///
/// There is no retry: a failed call is reported once and the caller decides.
#[derive(Debug, Clone)]
pub struct RemoteProfileClient {
    timeout: Duration,
}

impl RemoteProfileClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn fetch(
        &self,
        channel: &PeerChannel,
        uuid: &ProfileId,
    ) -> Result<Profile, RemoteError> {
        let request = ProfileRequest {
            uuid: uuid.to_string(),
        };

        let response = channel
            .http_client()
            .post(channel.url(ENDPOINT_FETCH_PROFILE))
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RemoteError::NotFound);
        }
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let body = response.bytes().await?;
        let reply: ProfileReply = serde_json::from_slice(&body)?;
        let profile = Profile::deserialize(&reply.json_profile)?;

        if profile.uuid != *uuid {
            return Err(RemoteError::UnexpectedProfile(profile.uuid));
        }

        tracing::debug!("REMOTE: Fetched {} from {}", uuid, channel.node());
        Ok(profile)
    }
}

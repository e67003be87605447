//! Error Taxonomy
//!
//! Every failure the resolution layer can surface. Absence of a profile is
//! never an error: resolution returns `Ok(None)` for "no profile anywhere".
//! The variants here are reserved for tiers that could not give an answer.

use crate::directory::types::NodeId;
use crate::profile::types::ProfileId;
use thiserror::Error;

/// Failure of the durable document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("stored document for '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Failure of the node directory service.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Failure of a single remote fetch against a peer node.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Connect, IO or timeout failure. The peer never answered.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The peer answered but does not hold the profile locally.
    #[error("peer does not hold the profile")]
    NotFound,

    #[error("peer answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode peer reply: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("peer answered with profile {0}")]
    UnexpectedProfile(ProfileId),
}

/// Outcome of a resolution that could not decide between "found" and "absent".
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("remote fetch from {node} failed: {source}")]
    RemoteUnavailable {
        node: NodeId,
        #[source]
        source: RemoteError,
    },

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    #[error(transparent)]
    DirectoryUnavailable(#[from] DirectoryError),
}

impl ResolveError {
    /// True when the failure came from the peer tier.
    pub fn is_remote(&self) -> bool {
        matches!(self, ResolveError::RemoteUnavailable { .. })
    }

    /// True when the failure came from the durable store.
    pub fn is_store(&self) -> bool {
        matches!(self, ResolveError::StoreUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;

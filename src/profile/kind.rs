//! Profile Kind Hooks
//!
//! The resolution engine is generic over a `ProfileKind`. A kind decides how a
//! fresh profile looks, what "update" means for a cached profile, and how a
//! stored document becomes a profile again.

use super::types::{DATA_FIELD, Document, Profile, ProfileId};
use crate::error::StoreError;

pub trait ProfileKind: Send + Sync + 'static {
    /// Builds the profile for a user seen for the first time.
    fn create_profile(&self, uuid: ProfileId) -> Profile;

    /// Re-derives whatever a cached profile computes from its own state.
    /// Called for every cached profile by `refresh_all`.
    fn update_profile(&self, profile: &mut Profile);

    /// Decodes a document loaded from the store.
    fn pull_profile(&self, uuid: ProfileId, stored: &Document) -> Result<Profile, StoreError> {
        let corrupt = |reason: String| StoreError::Corrupt {
            key: uuid.to_string(),
            reason,
        };

        let json = stored
            .get(DATA_FIELD)
            .and_then(|value| value.as_str())
            .ok_or_else(|| corrupt(format!("missing string field '{}'", DATA_FIELD)))?;

        let profile = Profile::deserialize(json).map_err(|e| corrupt(e.to_string()))?;
        if profile.uuid != uuid {
            return Err(corrupt(format!("document holds profile {}", profile.uuid)));
        }

        Ok(profile)
    }

    /// Encodes a profile into the fields written on push.
    fn to_document(&self, profile: &Profile) -> Result<Document, StoreError> {
        let json = profile.serialize().map_err(|e| StoreError::Corrupt {
            key: profile.uuid.to_string(),
            reason: e.to_string(),
        })?;

        let mut document = Document::new();
        document.insert(DATA_FIELD.to_string(), serde_json::Value::String(json));
        Ok(document)
    }
}

/// Plain kind: new profiles start as an empty JSON object and updates are no-ops.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProfileKind;

impl ProfileKind for JsonProfileKind {
    fn create_profile(&self, uuid: ProfileId) -> Profile {
        Profile::new(uuid, serde_json::json!({}))
    }

    fn update_profile(&self, _profile: &mut Profile) {}
}

use super::document::DocumentStore;
use crate::error::StoreError;
use crate::profile::kind::ProfileKind;
use crate::profile::types::{Profile, ProfileId};

use std::sync::Arc;

/// Profile-level view of one collection of the durable store.
pub struct ProfileStore<P> {
    documents: Arc<dyn DocumentStore>,
    collection: String,
    kind: Arc<P>,
}

impl<P: ProfileKind> ProfileStore<P> {
    pub fn new(documents: Arc<dyn DocumentStore>, collection: &str, kind: Arc<P>) -> Self {
        Self {
            documents,
            collection: collection.to_string(),
            kind,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Loads and decodes the stored profile. `Ok(None)` means it was never pushed.
    pub async fn load(&self, uuid: &ProfileId) -> Result<Option<Profile>, StoreError> {
        let key = uuid.to_string();
        match self.documents.load(&self.collection, &key).await? {
            Some(document) => {
                let profile = self.kind.pull_profile(*uuid, &document)?;
                tracing::debug!("STORE: Loaded {} from '{}'", key, self.collection);
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }

    pub async fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        let fields = self.kind.to_document(profile)?;
        self.documents
            .save(&self.collection, &profile.uuid.to_string(), fields)
            .await?;
        tracing::debug!("STORE: Saved {} to '{}'", profile.uuid, self.collection);
        Ok(())
    }
}

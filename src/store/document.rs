use crate::error::StoreError;
use crate::profile::types::Document;

use async_trait::async_trait;
use dashmap::DashMap;

/// Opaque key-value document interface of the durable store.
///
/// `save` merges the given fields into the stored document, creating it when
/// missing. Failures must be reported as `StoreError`, never as absence.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(&self, collection: &str, key: &str) -> Result<Option<Document>, StoreError>;

    async fn save(&self, collection: &str, key: &str, fields: Document) -> Result<(), StoreError>;
}

/// Process-local document store, used by the node binary and in tests.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: DashMap<(String, String), Document>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn load(&self, collection: &str, key: &str) -> Result<Option<Document>, StoreError> {
        Ok(self
            .documents
            .get(&(collection.to_string(), key.to_string()))
            .map(|entry| entry.value().clone()))
    }

    async fn save(&self, collection: &str, key: &str, fields: Document) -> Result<(), StoreError> {
        self.documents
            .entry((collection.to_string(), key.to_string()))
            .or_default()
            .extend(fields);
        Ok(())
    }
}

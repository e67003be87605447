//! Store Module Tests
//!
//! ## Test Scopes
//! - **MemoryDocumentStore**: Field-merging upserts keyed by collection and key.
//! - **ProfileStore**: Profiles survive a save/load cycle unchanged and store
//!   failures surface as errors, not absence.

#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::profile::kind::JsonProfileKind;
    use crate::profile::types::{Document, Profile, ProfileId};
    use crate::store::adapter::ProfileStore;
    use crate::store::document::{DocumentStore, MemoryDocumentStore};
    use crate::test_support::CountingStore;
    use serde_json::json;
    use std::sync::Arc;

    fn fields(pairs: &[(&str, serde_json::Value)]) -> Document {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    // ============================================================
    // DOCUMENT STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_memory_store_load_missing_is_none() {
        let store = MemoryDocumentStore::new();
        assert!(store.load("profiles", "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_save_merges_fields() {
        let store = MemoryDocumentStore::new();

        store
            .save("profiles", "k", fields(&[("data", json!("v1")), ("extra", json!(7))]))
            .await
            .unwrap();
        store
            .save("profiles", "k", fields(&[("data", json!("v2"))]))
            .await
            .unwrap();

        let document = store.load("profiles", "k").await.unwrap().unwrap();
        assert_eq!(document.get("data"), Some(&json!("v2")));
        assert_eq!(document.get("extra"), Some(&json!(7)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_store_collections_are_separate() {
        let store = MemoryDocumentStore::new();
        store
            .save("profiles", "k", fields(&[("data", json!("p"))]))
            .await
            .unwrap();

        assert!(store.load("other", "k").await.unwrap().is_none());
    }

    // ============================================================
    // PROFILE STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_profile_store_round_trip() {
        let documents = Arc::new(MemoryDocumentStore::new());
        let store = ProfileStore::new(documents, "profiles", Arc::new(JsonProfileKind));
        let profile = Profile::new(ProfileId::new(), json!({"x": 1, "nested": {"y": [1, 2]}}));

        store.save(&profile).await.unwrap();
        let loaded = store.load(&profile.uuid).await.unwrap();

        assert_eq!(loaded, Some(profile));
        assert_eq!(store.collection(), "profiles");
    }

    #[tokio::test]
    async fn test_profile_store_missing_is_none() {
        let store = ProfileStore::new(
            Arc::new(MemoryDocumentStore::new()),
            "profiles",
            Arc::new(JsonProfileKind),
        );

        assert_eq!(store.load(&ProfileId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_profile_store_failure_is_error_not_absence() {
        let documents = Arc::new(CountingStore::default());
        documents.fail();
        let store = ProfileStore::new(documents.clone(), "profiles", Arc::new(JsonProfileKind));

        let load = store.load(&ProfileId::new()).await;
        assert!(matches!(load, Err(StoreError::Unavailable(_))));

        let save = store.save(&Profile::new(ProfileId::new(), json!({}))).await;
        assert!(matches!(save, Err(StoreError::Unavailable(_))));
        assert_eq!(documents.load_count(), 1);
        assert_eq!(documents.save_count(), 1);
    }

    #[tokio::test]
    async fn test_profile_store_corrupt_document_is_error() {
        let documents = Arc::new(MemoryDocumentStore::new());
        let uuid = ProfileId::new();
        documents
            .save("profiles", &uuid.to_string(), fields(&[("data", json!("{broken"))]))
            .await
            .unwrap();
        let store = ProfileStore::new(documents, "profiles", Arc::new(JsonProfileKind));

        let result = store.load(&uuid).await;

        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }
}

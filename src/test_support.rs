//! Shared test doubles: call-counting store and directory, and an in-process
//! peer node serving the remote fetch endpoint.

use crate::cache::local::LocalCache;
use crate::directory::service::{InMemoryDirectory, NodeDirectory};
use crate::directory::types::NodeId;
use crate::error::{DirectoryError, StoreError};
use crate::profile::types::{Document, ProfileId};
use crate::remote::server::RemoteProfileServer;
use crate::store::document::{DocumentStore, MemoryDocumentStore};

use async_trait::async_trait;
use axum::Router;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Notify;

#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryDocumentStore,
    pub loads: AtomicUsize,
    pub saves: AtomicUsize,
    pub failing: AtomicBool,
}

impl CountingStore {
    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn load(&self, collection: &str, key: &str) -> Result<Option<Document>, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        self.inner.load(collection, key).await
    }

    async fn save(&self, collection: &str, key: &str, fields: Document) -> Result<(), StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        self.inner.save(collection, key, fields).await
    }
}

/// Store whose `save` signals `entered` and then waits for `release`.
#[derive(Default)]
pub struct ParkedStore {
    pub inner: MemoryDocumentStore,
    pub entered: Notify,
    pub release: Notify,
}

#[async_trait]
impl DocumentStore for ParkedStore {
    async fn load(&self, collection: &str, key: &str) -> Result<Option<Document>, StoreError> {
        self.inner.load(collection, key).await
    }

    async fn save(&self, collection: &str, key: &str, fields: Document) -> Result<(), StoreError> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.save(collection, key, fields).await
    }
}

#[derive(Default)]
pub struct CountingDirectory {
    pub inner: InMemoryDirectory,
    pub lookups: AtomicUsize,
    pub failing: AtomicBool,
}

impl CountingDirectory {
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NodeDirectory for CountingDirectory {
    async fn owner_of(&self, uuid: &ProfileId) -> Result<Option<NodeId>, DirectoryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DirectoryError::Unavailable("presence service down".to_string()));
        }
        self.inner.owner_of(uuid).await
    }

    async fn live_node_ids(&self) -> Result<HashSet<NodeId>, DirectoryError> {
        self.inner.live_node_ids().await
    }
}

/// Serves `router` on an ephemeral localhost port; the returned id is its address.
pub async fn spawn_node(router: Router) -> NodeId {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test node");
    });

    NodeId(addr.to_string())
}

/// A peer node answering remote fetches from `cache`.
pub async fn spawn_peer(cache: LocalCache) -> NodeId {
    spawn_node(RemoteProfileServer::new(cache).router()).await
}

/// An address nothing listens on.
pub async fn dead_node() -> NodeId {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    NodeId(addr.to_string())
}

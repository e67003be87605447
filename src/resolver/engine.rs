use crate::cache::local::LocalCache;
use crate::config::ResolverConfig;
use crate::directory::service::NodeDirectory;
use crate::directory::types::NodeId;
use crate::error::{RemoteError, ResolveError, Result};
use crate::profile::kind::ProfileKind;
use crate::profile::types::{Profile, ProfileId};
use crate::remote::client::RemoteProfileClient;
use crate::remote::pool::PeerChannelPool;
use crate::store::adapter::ProfileStore;
use crate::store::document::DocumentStore;

use std::sync::Arc;

/// Tiered profile resolver of one node, generic over the profile kind.
pub struct ProfileResolver<P> {
    local_node: NodeId,
    kind: Arc<P>,
    cache: LocalCache,
    directory: Arc<dyn NodeDirectory>,
    peers: Arc<PeerChannelPool>,
    remote: RemoteProfileClient,
    store: ProfileStore<P>,
    config: ResolverConfig,
}

impl<P: ProfileKind> ProfileResolver<P> {
    pub fn new(
        local_node: NodeId,
        kind: Arc<P>,
        cache: LocalCache,
        directory: Arc<dyn NodeDirectory>,
        peers: Arc<PeerChannelPool>,
        documents: Arc<dyn DocumentStore>,
        config: ResolverConfig,
    ) -> Self {
        let store = ProfileStore::new(documents, &config.collection, kind.clone());
        let remote = RemoteProfileClient::new(config.remote_timeout);

        Self {
            local_node,
            kind,
            cache,
            directory,
            peers,
            remote,
            store,
            config,
        }
    }

    pub fn local_node(&self) -> &NodeId {
        &self.local_node
    }

    pub fn local_cache(&self) -> &LocalCache {
        &self.cache
    }

    pub fn peers(&self) -> &PeerChannelPool {
        &self.peers
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    // --- Local cache lifecycle ---

    pub fn get(&self, uuid: &ProfileId) -> Option<Profile> {
        self.cache.get(uuid)
    }

    pub fn is_cached(&self, uuid: &ProfileId) -> bool {
        self.cache.contains(uuid)
    }

    pub fn cache(&self, profile: Profile) {
        tracing::debug!("Caching profile {}", profile.uuid);
        self.cache.put(profile);
    }

    pub fn uncache(&self, uuid: &ProfileId) -> Option<Profile> {
        tracing::debug!("Uncaching profile {}", uuid);
        self.cache.remove(uuid)
    }

    /// Builds a fresh profile through the kind and caches it.
    pub fn create(&self, uuid: ProfileId) -> Profile {
        let profile = self.kind.create_profile(uuid);
        self.cache(profile.clone());
        tracing::info!("Created profile {}", uuid);
        profile
    }

    /// Runs the kind's update hook on every cached profile.
    pub fn refresh_all(&self) -> usize {
        let kind = self.kind.clone();
        let updated = self.cache.update_all(|profile| kind.update_profile(profile));
        tracing::debug!("Refreshed {} cached profile(s)", updated);
        updated
    }

    // --- Durable store ---

    /// Writes the profile to the store, then evicts it if asked to.
    ///
    /// Eviction happens only after the write completed, so a reader that
    /// misses the cache falls through to the store and sees the new value.
    /// Only the written snapshot is evicted: a newer profile cached while the
    /// write was in flight stays cached. A failed write leaves the cache
    /// untouched.
    pub async fn push(&self, profile: &Profile, uncache_after: bool) -> Result<()> {
        self.store.save(profile).await?;

        if uncache_after && !self.cache.remove_if_unchanged(profile) {
            tracing::debug!(
                "Profile {} changed during push, keeping the cached copy",
                profile.uuid
            );
        }

        tracing::debug!("Pushed profile {} (uncache={})", profile.uuid, uncache_after);
        Ok(())
    }

    /// Loads a profile straight from the store, optionally caching it.
    pub async fn pull(&self, uuid: &ProfileId, cache: bool) -> Result<Option<Profile>> {
        let profile = self.store.load(uuid).await?;

        if cache && let Some(profile) = &profile {
            self.cache(profile.clone());
        }

        Ok(profile)
    }

    // --- Resolution ---

    /// Resolves a profile through the local, directory, store and remote tiers.
    ///
    /// `Ok(None)` means the profile exists nowhere reachable. A peer or store
    /// that could not answer is an `Err`, never `None`.
    pub async fn resolve(
        &self,
        uuid: &ProfileId,
        allow_store_fallback: bool,
    ) -> Result<Option<Profile>> {
        if let Some(profile) = self.cache.get(uuid) {
            tracing::debug!("RESOLVE: {} found locally", uuid);
            return Ok(Some(profile));
        }

        let owner = self.directory.owner_of(uuid).await?;

        let owner = match owner {
            Some(owner) => owner,
            None => {
                if !allow_store_fallback {
                    tracing::debug!("RESOLVE: {} has no owner, store fallback disabled", uuid);
                    return Ok(None);
                }

                tracing::debug!("RESOLVE: {} has no owner, loading from store", uuid);
                return self.pull(uuid, self.config.cache_on_store_fallback).await;
            }
        };

        // The local cache was already checked; the mapping is stale.
        if owner == self.local_node {
            tracing::warn!(
                "RESOLVE: Directory maps {} to this node but it is not cached",
                uuid
            );
            return Err(ResolveError::RemoteUnavailable {
                node: owner,
                source: RemoteError::NotFound,
            });
        }

        let channel = self.peers.channel_for(&owner);
        match self.remote.fetch(&channel, uuid).await {
            Ok(profile) => {
                tracing::debug!("RESOLVE: {} fetched from {}", uuid, owner);
                Ok(Some(profile))
            }
            Err(e) => {
                tracing::error!("RESOLVE: Failed to fetch {} from {}: {}", uuid, owner, e);
                Err(ResolveError::RemoteUnavailable {
                    node: owner,
                    source: e,
                })
            }
        }
    }

    /// `resolve` collapsed to the plain "profile or nothing" answer.
    /// Failures are logged and reported as absence.
    pub async fn resolve_or_absent(
        &self,
        uuid: &ProfileId,
        allow_store_fallback: bool,
    ) -> Option<Profile> {
        match self.resolve(uuid, allow_store_fallback).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!("Treating {} as absent: {}", uuid, e);
                None
            }
        }
    }

    /// Reconciles the peer pool with the directory's current live set.
    pub async fn refresh_peers(&self) -> Result<(usize, usize)> {
        let mut live = self.directory.live_node_ids().await?;
        live.remove(&self.local_node);
        Ok(self.peers.refresh(&live))
    }
}

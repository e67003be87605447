use crate::directory::service::NodeDirectory;
use crate::directory::types::NodeId;
use crate::error::DirectoryError;

use dashmap::DashMap;
use std::collections::HashSet;

/// Remote-call channel to one peer node.
///
/// Cheap to clone: the HTTP client underneath is shared by every channel of a
/// pool and keeps its own connection pool per host.
#[derive(Debug, Clone)]
pub struct PeerChannel {
    node: NodeId,
    base_url: String,
    http_client: reqwest::Client,
}

impl PeerChannel {
    fn open(node: NodeId, http_client: reqwest::Client) -> Self {
        let trimmed = node.as_str().trim_end_matches('/');
        let base_url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };

        Self {
            node,
            base_url,
            http_client,
        }
    }

    pub fn node(&self) -> &NodeId {
        &self.node
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }
}

/// Registry of peer channels keyed by node id.
///
/// A channel is created the first time its node id is seen and reused for as
/// long as that id stays known, even if the node's address changes underneath.
/// `refresh` is the only operation that drops channels.
pub struct PeerChannelPool {
    channels: DashMap<NodeId, PeerChannel>,
    http_client: reqwest::Client,
}

impl PeerChannelPool {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self {
            channels: DashMap::new(),
            http_client,
        }
    }

    /// Builds the pool from a snapshot of live node ids.
    pub fn from_live_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let pool = Self::new();
        for node in nodes {
            pool.channel_for(&node);
        }
        pool
    }

    pub async fn from_directory(directory: &dyn NodeDirectory) -> Result<Self, DirectoryError> {
        let live = directory.live_node_ids().await?;
        tracing::info!("Opening peer channels for {} live node(s)", live.len());
        Ok(Self::from_live_nodes(live))
    }

    /// Returns the channel for `node`, opening it on first use.
    pub fn channel_for(&self, node: &NodeId) -> PeerChannel {
        if let Some(channel) = self.channels.get(node) {
            return channel.value().clone();
        }

        self.channels
            .entry(node.clone())
            .or_insert_with(|| {
                tracing::debug!("Opening peer channel to {}", node);
                PeerChannel::open(node.clone(), self.http_client.clone())
            })
            .value()
            .clone()
    }

    /// Reconciles the pool with a new live set.
    ///
    /// Ids new to the pool get a channel, ids no longer live lose theirs, ids
    /// present in both keep their existing channel. Returns `(opened, evicted)`.
    ///
    /// Not atomic against `channel_for`: a lookup for an evicted id racing the
    /// refresh reopens its channel, and the next refresh evicts it again.
    pub fn refresh(&self, live: &HashSet<NodeId>) -> (usize, usize) {
        let mut evicted = 0;
        self.channels.retain(|node, _| {
            let keep = live.contains(node);
            if !keep {
                evicted += 1;
            }
            keep
        });

        let mut opened = 0;
        for node in live {
            if !self.channels.contains_key(node) {
                self.channel_for(node);
                opened += 1;
            }
        }

        if opened > 0 || evicted > 0 {
            tracing::info!(
                "Peer pool refreshed: {} opened, {} evicted, {} total",
                opened,
                evicted,
                self.channels.len()
            );
        }

        (opened, evicted)
    }

    pub async fn refresh_from(
        &self,
        directory: &dyn NodeDirectory,
    ) -> Result<(usize, usize), DirectoryError> {
        let live = directory.live_node_ids().await?;
        Ok(self.refresh(&live))
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.channels.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.channels.iter().map(|entry| entry.key().clone()).collect()
    }
}

impl Default for PeerChannelPool {
    fn default() -> Self {
        Self::new()
    }
}

use super::types::NodeId;
use crate::error::DirectoryError;
use crate::profile::types::ProfileId;

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use std::collections::HashSet;

/// Boundary consumed by the resolver.
#[async_trait]
pub trait NodeDirectory: Send + Sync {
    /// Node currently serving `uuid`. `None` means no node reports the user
    /// as active, which is the store case.
    async fn owner_of(&self, uuid: &ProfileId) -> Result<Option<NodeId>, DirectoryError>;

    /// Current set of live node ids.
    async fn live_node_ids(&self) -> Result<HashSet<NodeId>, DirectoryError>;
}

/// Directory held in process memory. Backs single-process deployments and
/// tests; a fleet would plug its presence service in behind `NodeDirectory`.
#[derive(Default)]
pub struct InMemoryDirectory {
    nodes: DashSet<NodeId>,
    owners: DashMap<ProfileId, NodeId>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        let directory = Self::new();
        for node in nodes {
            directory.add_node(node);
        }
        directory
    }

    pub fn add_node(&self, node: NodeId) {
        if self.nodes.insert(node.clone()) {
            tracing::info!("Directory: node {} joined", node);
        }
    }

    /// Removes a node and every user mapping that pointed at it.
    pub fn remove_node(&self, node: &NodeId) {
        if self.nodes.remove(node).is_some() {
            self.owners.retain(|_, owner| *owner != *node);
            tracing::info!("Directory: node {} left", node);
        }
    }

    /// Records `node` as the owner of `uuid`, registering the node if needed.
    pub fn assign(&self, uuid: ProfileId, node: NodeId) {
        self.add_node(node.clone());
        self.owners.insert(uuid, node);
    }

    pub fn release(&self, uuid: &ProfileId) -> Option<NodeId> {
        self.owners.remove(uuid).map(|(_, node)| node)
    }
}

#[async_trait]
impl NodeDirectory for InMemoryDirectory {
    async fn owner_of(&self, uuid: &ProfileId) -> Result<Option<NodeId>, DirectoryError> {
        Ok(self.owners.get(uuid).map(|entry| entry.value().clone()))
    }

    async fn live_node_ids(&self) -> Result<HashSet<NodeId>, DirectoryError> {
        Ok(self.nodes.iter().map(|node| node.key().clone()).collect())
    }
}

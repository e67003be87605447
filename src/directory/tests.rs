//! Directory Module Tests
//!
//! ## Test Scopes
//! - **NodeId**: Equality, hashing and display.
//! - **InMemoryDirectory**: Owner lookups, live set and node departure.

#[cfg(test)]
mod tests {
    use crate::directory::service::{InMemoryDirectory, NodeDirectory};
    use crate::directory::types::NodeId;
    use crate::profile::types::ProfileId;
    use std::collections::HashSet;

    // ============================================================
    // NODE ID TESTS
    // ============================================================

    #[test]
    fn test_node_id_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(NodeId::from("10.0.0.1:7000"));
        set.insert(NodeId::from("10.0.0.1:7000".to_string()));
        set.insert(NodeId::from("10.0.0.2:7000"));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::from("node-a").to_string(), "node-a");
    }

    // ============================================================
    // IN-MEMORY DIRECTORY TESTS
    // ============================================================

    #[tokio::test]
    async fn test_unknown_user_has_no_owner() {
        let directory = InMemoryDirectory::new();
        assert_eq!(directory.owner_of(&ProfileId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_assign_registers_owner_and_node() {
        let directory = InMemoryDirectory::new();
        let uuid = ProfileId::new();
        let node = NodeId::from("10.0.0.1:7000");

        directory.assign(uuid, node.clone());

        assert_eq!(directory.owner_of(&uuid).await.unwrap(), Some(node.clone()));
        assert!(directory.live_node_ids().await.unwrap().contains(&node));
    }

    #[tokio::test]
    async fn test_release_clears_owner() {
        let directory = InMemoryDirectory::new();
        let uuid = ProfileId::new();
        directory.assign(uuid, NodeId::from("a"));

        assert_eq!(directory.release(&uuid), Some(NodeId::from("a")));
        assert_eq!(directory.owner_of(&uuid).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_node_drops_its_users() {
        let directory = InMemoryDirectory::with_nodes(vec![NodeId::from("a"), NodeId::from("b")]);
        let on_a = ProfileId::new();
        let on_b = ProfileId::new();
        directory.assign(on_a, NodeId::from("a"));
        directory.assign(on_b, NodeId::from("b"));

        directory.remove_node(&NodeId::from("a"));

        assert_eq!(directory.owner_of(&on_a).await.unwrap(), None);
        assert_eq!(directory.owner_of(&on_b).await.unwrap(), Some(NodeId::from("b")));
        let live = directory.live_node_ids().await.unwrap();
        assert_eq!(live, HashSet::from([NodeId::from("b")]));
    }
}

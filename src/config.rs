//! Node and Resolver Configuration
//!
//! `ResolverConfig` tunes the resolution engine. `NodeConfig` is what the
//! `profile-node` binary builds from its command line.

use crate::directory::types::NodeId;
use crate::profile::types::ProfileId;

use anyhow::{Context, Result, anyhow};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_COLLECTION: &str = "profiles";
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_millis(500);

pub const USAGE: &str = "Usage: profile-node --bind <addr:port> [--advertise <node-id>] [--peer <node-id>]... \
[--owner <uuid>@<node-id>]... [--remote-timeout-ms <ms>] [--cache-on-fallback] [--verbose]";

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Store collection profiles are pushed to and pulled from.
    pub collection: String,
    /// Per-call timeout of a remote fetch.
    pub remote_timeout: Duration,
    /// Cache a profile found through the store tier of `resolve`.
    pub cache_on_store_fallback: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
            cache_on_store_fallback: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    /// Id peers know this node by. Defaults to the bind address.
    pub advertise: Option<NodeId>,
    pub peers: Vec<NodeId>,
    pub owners: Vec<(ProfileId, NodeId)>,
    pub resolver: ResolverConfig,
    pub verbose: bool,
}

impl NodeConfig {
    /// Parses the arguments following the program name.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut bind_addr: Option<SocketAddr> = None;
        let mut advertise: Option<NodeId> = None;
        let mut peers = Vec::new();
        let mut owners = Vec::new();
        let mut resolver = ResolverConfig::default();
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = value_of(args, i)?;
                    bind_addr = Some(
                        value
                            .parse()
                            .with_context(|| format!("invalid --bind address '{}'", value))?,
                    );
                    i += 2;
                }
                "--advertise" => {
                    advertise = Some(NodeId::from(value_of(args, i)?));
                    i += 2;
                }
                "--peer" => {
                    peers.push(NodeId::from(value_of(args, i)?));
                    i += 2;
                }
                "--owner" => {
                    owners.push(parse_owner(value_of(args, i)?)?);
                    i += 2;
                }
                "--remote-timeout-ms" => {
                    let value = value_of(args, i)?;
                    let ms: u64 = value
                        .parse()
                        .with_context(|| format!("invalid --remote-timeout-ms '{}'", value))?;
                    resolver.remote_timeout = Duration::from_millis(ms);
                    i += 2;
                }
                "--cache-on-fallback" => {
                    resolver.cache_on_store_fallback = true;
                    i += 1;
                }
                "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                other => {
                    tracing::warn!("Ignoring unknown argument '{}'", other);
                    i += 1;
                }
            }
        }

        let bind_addr = bind_addr.ok_or_else(|| anyhow!("--bind is required"))?;

        if bind_addr.ip().is_unspecified() && advertise.is_none() {
            return Err(anyhow!(
                "--bind {} is not reachable by peers, pass --advertise <node-id>",
                bind_addr
            ));
        }

        Ok(Self {
            bind_addr,
            advertise,
            peers,
            owners,
            resolver,
            verbose,
        })
    }

    /// This node's id: the address peers reach it on.
    pub fn node_id(&self) -> NodeId {
        self.advertise
            .clone()
            .unwrap_or_else(|| NodeId(self.bind_addr.to_string()))
    }
}

fn value_of(args: &[String], flag_idx: usize) -> Result<&str> {
    args.get(flag_idx + 1)
        .map(|value| value.as_str())
        .ok_or_else(|| anyhow!("{} expects a value", args[flag_idx]))
}

fn parse_owner(value: &str) -> Result<(ProfileId, NodeId)> {
    let (uuid, node) = value
        .split_once('@')
        .ok_or_else(|| anyhow!("--owner expects <uuid>@<node-id>, got '{}'", value))?;
    let uuid: ProfileId = uuid
        .parse()
        .with_context(|| format!("invalid uuid in --owner '{}'", value))?;
    if node.is_empty() {
        return Err(anyhow!("empty node id in --owner '{}'", value));
    }
    Ok((uuid, NodeId::from(node)))
}

use axum::Router;
use profile_cluster::cache::local::LocalCache;
use profile_cluster::config::{NodeConfig, USAGE};
use profile_cluster::directory::service::InMemoryDirectory;
use profile_cluster::profile::kind::JsonProfileKind;
use profile_cluster::remote::pool::PeerChannelPool;
use profile_cluster::remote::server::RemoteProfileServer;
use profile_cluster::resolver::engine::ProfileResolver;
use profile_cluster::resolver::handlers::router;
use profile_cluster::store::document::MemoryDocumentStore;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match NodeConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            eprintln!("Example: profile-node --bind 127.0.0.1:7001 --peer 127.0.0.1:7000");
            std::process::exit(1);
        }
    };

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let local_node = config.node_id();
    tracing::info!("Starting profile node {}", local_node);

    // 1. Directory, seeded from the command line:
    let directory = Arc::new(InMemoryDirectory::with_nodes(
        std::iter::once(local_node.clone()).chain(config.peers.iter().cloned()),
    ));
    for (uuid, node) in &config.owners {
        directory.assign(*uuid, node.clone());
    }

    // 2. Peer channels for every live node but this one:
    let peers = Arc::new(PeerChannelPool::from_live_nodes(
        config.peers.iter().filter(|peer| **peer != local_node).cloned(),
    ));
    tracing::info!("Opened {} peer channel(s)", peers.len());

    // 3. Resolver:
    let cache = LocalCache::new();
    let resolver = Arc::new(ProfileResolver::new(
        local_node.clone(),
        Arc::new(JsonProfileKind),
        cache.clone(),
        directory.clone(),
        peers.clone(),
        Arc::new(MemoryDocumentStore::new()),
        config.resolver.clone(),
    ));

    // 4. HTTP router: public API + inbound peer fetch:
    let app = Router::new()
        .merge(router(resolver.clone()))
        .merge(RemoteProfileServer::new(cache).router());

    // 5. Spawn stats reporter:
    let stats_resolver = resolver.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30));

        loop {
            interval.tick().await;
            tracing::info!(
                "Node stats: {} cached profile(s), {} peer channel(s)",
                stats_resolver.local_cache().len(),
                stats_resolver.peers().len()
            );
        }
    });

    // 6. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

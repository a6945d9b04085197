//! hn_cache - A read-through caching service for Hacker News newest stories
//!
//! Serves paginated listing and search of the newest stories, backed by a
//! weight-bounded in-memory cache in front of the upstream item API.

mod api;
mod cache;
mod client;
mod config;
mod error;
mod models;
mod service;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::CacheStore;
use client::HnClient;
use config::Config;
use service::StoryCacheService;
use tasks::spawn_cleanup_task;

/// Main entry point for the story cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache pool and upstream client
/// 4. Start background expiry cleanup task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hn_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Hacker News story cache server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: upstream={}, max_weight={}, story_ttl={}s, sliding={}s, port={}",
        config.base_url,
        config.cache_max_weight,
        config.story_ttl_secs,
        config.story_sliding_secs,
        config.server_port
    );

    // Create the shared cache pool and upstream client
    let cache = Arc::new(RwLock::new(CacheStore::new(
        config.cache_max_weight,
        config.compaction_fraction,
    )));
    let hn_client = HnClient::new(
        config.base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    );
    let state = AppState::new(StoryCacheService::new(
        hn_client,
        Arc::clone(&cache),
        &config,
    ));
    info!("Story cache service initialized");

    // Start background cleanup task
    let cleanup_handle = spawn_cleanup_task(cache, config.cleanup_interval_secs);
    info!("Background cleanup task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the cleanup task
    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}

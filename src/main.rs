//! Livros Cache - A book catalog service with a cache-aside layer
//!
//! Serves `GET /books` and `POST /books` over an in-memory store, with the
//! book list cached in Redis for five minutes.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use livros_cache::api::create_router;
use livros_cache::cache::{CacheBackend, RedisBackend};
use livros_cache::store::InMemoryBookStore;
use livros_cache::{AppState, Config};

/// Main entry point for the book service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Build the fixed configuration
/// 3. Create the seeded book store and the Redis backend
/// 4. Serve HTTP until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "livros_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Livros Cache service");

    let config = Config::default();
    info!(
        "Configuration: redis={}, port={}",
        config.redis_url(),
        config.server_port
    );

    let backend: Arc<dyn CacheBackend> = Arc::new(
        RedisBackend::new(&config.redis_url()).context("invalid Redis connection settings")?,
    );
    info!("Cache backend initialized: {}", backend.name());

    let state = AppState::new(Arc::new(InMemoryBookStore::seeded()), backend);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
}

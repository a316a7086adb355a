//! Storefront - e-commerce backend service
//!
//! Serves catalog listings through an ephemeral lookup cache, runs the
//! promotional game, and gates the admin surface behind a shared-secret
//! cookie.

mod api;
mod cache;
mod config;
mod datastore;
mod error;
mod gate;
mod models;
mod tasks;

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::{Config, DEFAULT_ADMIN_SECRET};
use datastore::seed_demo;
use tasks::spawn_sweep_task;

/// Main entry point for the storefront service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create app state (lookup cache + datastore) and seed demo data
/// 4. Start background expiry sweep task
/// 5. Create Axum router with all endpoints and the admin gate
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Storefront Service");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={}s, port={}, cleanup_interval={}s",
        config.default_ttl, config.server_port, config.cleanup_interval
    );
    if config.admin_secret == DEFAULT_ADMIN_SECRET {
        warn!("ADMIN_SECRET not set; running with the insecure demo secret");
    }

    // Create application state and seed the demo catalog
    let state = AppState::from_config(&config);
    seed_demo(&state.store)
        .await
        .context("failed to seed demo data")?;
    info!("Lookup cache and datastore initialized");

    // Start background sweep task
    let sweep_handle = spawn_sweep_task(state.cache.clone(), config.cleanup_interval);
    info!("Background expiry sweep task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweep_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(sweep_handle: tokio::task::JoinHandle<()>) {
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

    // Abort the sweep task
    sweep_handle.abort();
    warn!("Sweep task aborted");
}

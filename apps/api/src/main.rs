//! # Bazaar API
//!
//! HTTP server for the in-memory product, cart and user store.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          API Server                                     │
//! │                                                                         │
//! │  load config ─► init tracing ─► build Store ─► bind ─► serve           │
//! │                                                          │              │
//! │                              Ctrl+C / SIGTERM ───────────┤              │
//! │                                                          ▼              │
//! │                  stop accepting, drain in-flight (≤ shutdown_timeout)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bazaar_api::{app, ApiConfig, AppState};
use bazaar_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load(ApiConfig::path_from_env()).context("loading configuration")?;

    // RUST_LOG wins over the configured filter
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log.filter)
            .with_context(|| format!("invalid log filter: {}", config.log.filter))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting Bazaar API server...");
    info!(
        addr = %config.server.bind_address(),
        seed = config.store.seed,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    let store = if config.store.seed {
        Store::seeded().context("seeding store")?
    } else {
        Store::empty()
    };

    let router = app(AppState::new(store)).layer(TimeoutLayer::new(config.server.request_timeout()));

    let bind_addr = config.server.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    info!(addr = %bind_addr, "Listening");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            result.context("server task failed")?.context("server error")?;
            warn!("Server stopped without a shutdown signal");
            return Ok(());
        }
        () = shutdown_signal() => {}
    }

    let _ = shutdown_tx.send(());

    let grace = config.server.shutdown_timeout();
    match tokio::time::timeout(grace, server).await {
        Ok(result) => {
            result.context("server task failed")?.context("server error")?;
            info!("Server shutdown complete");
        }
        Err(_) => warn!(
            grace_secs = grace.as_secs(),
            "In-flight requests did not finish in time, exiting anyway"
        ),
    }

    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

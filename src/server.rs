//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory store, spawns the expiry reaper, and runs the
//! Axum server.

use crate::application::reaper::run_reaper;
use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::{AliasStore, TagIndex};
use crate::infrastructure::persistence::{MemoryAliasStore, MemoryTagIndex};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory alias store and tag index
/// - Background expiry reaper
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or
/// the server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn AliasStore> = Arc::new(MemoryAliasStore::new());
    let tags: Arc<dyn TagIndex> = Arc::new(MemoryTagIndex::new());

    tokio::spawn(run_reaper(
        store.clone(),
        tags.clone(),
        Duration::from_secs(config.reaper_interval_seconds),
    ));
    tracing::info!(
        interval_seconds = config.reaper_interval_seconds,
        "Expiry reaper started"
    );

    let link_service = Arc::new(LinkService::new(store, tags));

    let state = AppState {
        link_service,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

//! HTTP API surface.
//!
//! Routes mirror what the platform backend calls: game event notifications
//! under `/notify`, revenue reconciliation under `/revenue`, and a couple of
//! operational probes.

pub mod health;
pub mod notify;
pub mod revenue;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::{DiscordConfig, RevenueConfig};
use crate::error::Result;
use crate::notify::Dispatcher;
use crate::revenue::{ReconciliationDebouncer, RevenueService};

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "herald";

/// Shared state behind every route handler.
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub service: Arc<RevenueService>,
    pub debouncer: ReconciliationDebouncer,
    pub discord: DiscordConfig,
    pub revenue: RevenueConfig,
}

/// Assemble the full application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(notify::router())
        .merge(revenue::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}

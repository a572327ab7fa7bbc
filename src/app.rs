//! App orchestration module.
//!
//! Wires the mirror node client, snapshot tracker, Discord sink and
//! revenue service together, then hands the assembled state to the
//! HTTP server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::ledger::MirrorNodeClient;
use crate::notify::{Dispatcher, DiscordSink, NotificationDeduplicator};
use crate::revenue::{ReconciliationDebouncer, RevenueService, SnapshotTracker, WatchedAccount};
use crate::server::{self, AppState};

/// Main application struct.
pub struct App;

impl App {
    /// Run the notification relay until a shutdown signal arrives.
    ///
    /// This builds every component from the loaded config, binds the
    /// listener and serves requests. Missing webhooks are tolerated so
    /// the relay can run in a degraded, log-only mode.
    pub async fn run(config: Config) -> Result<()> {
        let state = build_state(&config)?;
        log_webhook_presence(&config);

        let addr = config.server.bind_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(
            addr = %addr,
            accounts = config.ledger.accounts.len(),
            "Notification relay listening"
        );

        server::serve(listener, state).await
    }
}

/// Assemble the shared application state from config.
pub fn build_state(config: &Config) -> Result<Arc<AppState>> {
    let sink = Arc::new(DiscordSink::new(&config.discord)?);
    let dedup = Arc::new(NotificationDeduplicator::new(
        config.revenue.dedup_window(),
    ));
    let dispatcher = Arc::new(Dispatcher::new(sink, dedup));

    let source = Arc::new(MirrorNodeClient::new(&config.ledger)?);
    let accounts = config
        .watched_accounts()
        .into_iter()
        .map(|(label, account)| WatchedAccount::new(label, account))
        .collect();
    let tracker = SnapshotTracker::new(source, accounts);

    let service = Arc::new(RevenueService::new(
        tracker,
        dispatcher.clone(),
        config.revenue.notify_threshold,
    ));
    let debouncer =
        ReconciliationDebouncer::new(service.clone(), config.revenue.debounce_bucket());

    Ok(Arc::new(AppState {
        dispatcher,
        service,
        debouncer,
        discord: config.discord.clone(),
        revenue: config.revenue.clone(),
    }))
}

/// Warn at startup about webhooks that are not configured.
fn log_webhook_presence(config: &Config) {
    if config.discord.games_webhook.is_none() {
        warn!("Games webhook not configured, game notifications will be skipped");
    }
    if config.discord.revenue_webhook.is_none() {
        if config.discord.games_webhook.is_some() {
            warn!("Revenue webhook not configured, falling back to games webhook");
        } else {
            warn!("Revenue webhook not configured, revenue notifications will be skipped");
        }
    }
}

//! Health and webhook status probes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::server::{AppState, SERVICE_NAME};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/status", get(status))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "service": SERVICE_NAME,
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

async fn status(State(state): State<Arc<AppState>>) -> Json<Value> {
    let presence = |configured: bool| if configured { "configured" } else { "missing" };

    Json(json!({
        "webhooks": {
            "games": presence(state.discord.games_webhook.is_some()),
            "revenue": presence(state.discord.revenue_webhook.is_some()),
        },
        "service": "running",
    }))
}

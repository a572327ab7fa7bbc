//! Revenue reconciliation routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::CheckReason;
use crate::server::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notify/revenue/check", post(trigger_check))
        .route("/revenue/stats", get(current_stats))
        .route("/revenue/reset", post(reset_baseline))
}

#[derive(Debug, Default, Deserialize)]
struct CheckRequest {
    #[serde(rename = "gameType")]
    game_type: Option<String>,
}

/// Run a revenue check immediately, bypassing the debounce window.
///
/// The body is optional; when present, `gameType` labels the check in the
/// resulting notification.
async fn trigger_check(
    State(state): State<Arc<AppState>>,
    body: Option<Json<CheckRequest>>,
) -> (StatusCode, Json<Value>) {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let reason = match request.game_type {
        Some(raw) => match CheckReason::parse(&raw) {
            Ok(reason) => reason,
            Err(err) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "error": err.to_string() })),
                );
            }
        },
        None => CheckReason::manual(),
    };

    let result = state.service.check_and_notify(&reason).await;
    (
        StatusCode::OK,
        Json(json!({ "success": true, "result": result })),
    )
}

async fn current_stats(State(state): State<Arc<AppState>>) -> Json<Value> {
    let stats = state.service.current_stats().await;
    Json(json!({ "success": true, "stats": stats }))
}

async fn reset_baseline(State(state): State<Arc<AppState>>) -> Json<Value> {
    state.service.reset();
    Json(json!({ "success": true, "message": "Balance baseline reset" }))
}

//! Game event notification routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::domain::{
    samples, CheckReason, CoinflipCreated, CoinflipSettled, JackpotEntry, JackpotWinner,
};
use crate::notify::{render, DispatchOutcome};
use crate::server::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notify/coinflip/created", post(coinflip_created))
        .route("/notify/coinflip/settled", post(coinflip_settled))
        .route("/notify/jackpot/entry", post(jackpot_entry))
        .route("/notify/jackpot/winner", post(jackpot_winner))
        .route("/test/{kind}", post(test_notification))
}

async fn coinflip_created(
    State(state): State<Arc<AppState>>,
    Json(event): Json<CoinflipCreated>,
) -> (StatusCode, Json<Value>) {
    let outcome = state
        .dispatcher
        .dispatch(&render::coinflip_created(&event))
        .await;
    respond(outcome, "Coinflip creation notification sent")
}

async fn coinflip_settled(
    State(state): State<Arc<AppState>>,
    Json(event): Json<CoinflipSettled>,
) -> (StatusCode, Json<Value>) {
    let outcome = state
        .dispatcher
        .dispatch(&render::coinflip_settled(&event))
        .await;

    if !outcome.is_failure() {
        state
            .debouncer
            .trigger(CheckReason::coinflip(), state.revenue.coinflip_delay());
    }

    respond(outcome, "Coinflip settlement notification sent")
}

async fn jackpot_entry(
    State(state): State<Arc<AppState>>,
    Json(event): Json<JackpotEntry>,
) -> (StatusCode, Json<Value>) {
    let outcome = state
        .dispatcher
        .dispatch(&render::jackpot_entry(&event))
        .await;
    respond(outcome, "Jackpot entry notification sent")
}

async fn jackpot_winner(
    State(state): State<Arc<AppState>>,
    Json(event): Json<JackpotWinner>,
) -> (StatusCode, Json<Value>) {
    let outcome = state
        .dispatcher
        .dispatch(&render::jackpot_winner(&event))
        .await;

    if !outcome.is_failure() {
        state
            .debouncer
            .trigger(CheckReason::jackpot(), state.revenue.jackpot_delay());
    }

    respond(outcome, "Jackpot winner notification sent")
}

async fn test_notification(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> (StatusCode, Json<Value>) {
    match kind.as_str() {
        "coinflip" => {
            let outcome = state
                .dispatcher
                .dispatch(&render::coinflip_created(&samples::coinflip_created()))
                .await;
            respond(outcome, "coinflip test notification sent")
        }
        "jackpot" => {
            let outcome = state
                .dispatcher
                .dispatch(&render::jackpot_entry(&samples::jackpot_entry()))
                .await;
            respond(outcome, "jackpot test notification sent")
        }
        "revenue" => {
            let result = state.service.check_and_notify(&CheckReason::test()).await;
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "message": "revenue test notification sent",
                    "result": result,
                })),
            )
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Invalid test type" })),
        ),
    }
}

/// Map a dispatch outcome onto the HTTP reply shape callers expect.
fn respond(outcome: DispatchOutcome, message: &str) -> (StatusCode, Json<Value>) {
    match outcome {
        DispatchOutcome::Delivered => (
            StatusCode::OK,
            Json(json!({ "success": true, "message": message, "outcome": outcome.as_str() })),
        ),
        DispatchOutcome::Suppressed => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Duplicate notification suppressed",
                "outcome": outcome.as_str(),
            })),
        ),
        DispatchOutcome::Skipped => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "No webhook configured, notification skipped",
                "outcome": outcome.as_str(),
            })),
        ),
        DispatchOutcome::Failed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "error": "Notification delivery failed",
                "outcome": outcome.as_str(),
            })),
        ),
    }
}

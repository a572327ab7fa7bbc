mod harness;

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use herald::config::{DiscordConfig, RevenueConfig};
use herald::domain::AccountId;
use herald::notify::{Dispatcher, NotificationDeduplicator};
use herald::revenue::{ReconciliationDebouncer, RevenueService, SnapshotTracker, WatchedAccount};
use herald::server::{router, AppState};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tower::ServiceExt;

use harness::recording_sink::RecordingSink;
use harness::scripted_ledger::ScriptedLedger;

fn account(id: &str) -> AccountId {
    AccountId::parse(id).unwrap()
}

fn make_state() -> (Arc<AppState>, RecordingSink, Arc<ScriptedLedger>) {
    let sink = RecordingSink::new();
    let ledger = Arc::new(ScriptedLedger::new());

    let dedup = Arc::new(NotificationDeduplicator::new(Duration::from_secs(300)));
    let dispatcher = Arc::new(Dispatcher::new(Arc::new(sink.clone()), dedup));

    let accounts = vec![
        WatchedAccount::new("coinflip", account("0.0.1001")),
        WatchedAccount::new("jackpot", account("0.0.1002")),
    ];
    let tracker = SnapshotTracker::new(ledger.clone(), accounts);
    let service = Arc::new(RevenueService::new(tracker, dispatcher.clone(), dec!(0.001)));
    let debouncer = ReconciliationDebouncer::new(service.clone(), Duration::from_secs(3600));

    let state = Arc::new(AppState {
        dispatcher,
        service,
        debouncer,
        discord: DiscordConfig::default(),
        revenue: RevenueConfig::default(),
    });
    (state, sink, ledger)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn decimal(value: &Value) -> Decimal {
    value.as_str().expect("decimal as string").parse().unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (state, _sink, _ledger) = make_state();
    let app = router(state);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["status"], "OK");
    assert_eq!(json["service"], "herald");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn status_endpoint_reports_webhook_presence() {
    let (state, _sink, _ledger) = make_state();
    let app = router(state);

    let response = app.oneshot(get("/status")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["service"], "running");
    assert_eq!(json["webhooks"]["games"], "missing");
    assert_eq!(json["webhooks"]["revenue"], "missing");
}

#[tokio::test]
async fn coinflip_created_delivers_then_suppresses_duplicate() {
    let (state, sink, _ledger) = make_state();
    let app = router(state);

    let event = json!({
        "id": "game-1",
        "betAmount": 25,
        "creator": "0.0.777",
        "creatorChoice": 0
    });

    let response = app
        .clone()
        .oneshot(post_json("/notify/coinflip/created", event.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["outcome"], "delivered");

    let delivered = sink.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].title, "🎮 New Coinflip Game Created!");
    assert_eq!(
        delivered[0].key.to_string(),
        "games:coinflip-created:evt:game-1"
    );

    let response = app
        .oneshot(post_json("/notify/coinflip/created", event))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["outcome"], "suppressed");
    assert_eq!(sink.calls(), 1);
}

#[tokio::test]
async fn settlement_schedules_debounced_revenue_check() {
    let (state, sink, _ledger) = make_state();
    let app = router(state.clone());

    let event = json!({
        "gameId": "game-9",
        "wagerAmount": 50,
        "winnerId": "0.0.777",
        "winningSide": "HEADS",
        "challengedByBot": false,
        "feeCharged": 2.5
    });

    let response = app
        .oneshot(post_json("/notify/coinflip/settled", event))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let delivered = sink.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].title, "🏆 Coinflip Game Completed!");
    assert_eq!(state.debouncer.pending_len(), 1);
}

#[tokio::test]
async fn jackpot_winner_schedules_debounced_revenue_check() {
    let (state, _sink, _ledger) = make_state();
    let app = router(state.clone());

    let event = json!({
        "winnerUsername": "Lucky",
        "winnerId": "0.0.888",
        "prizeAmount": 420,
        "winChance": 12.5,
        "roundId": "round-3",
        "participantCount": 8,
        "totalPot": 440
    });

    let response = app
        .oneshot(post_json("/notify/jackpot/winner", event))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.debouncer.pending_len(), 1);
}

#[tokio::test]
async fn failed_delivery_maps_to_server_error() {
    let (state, sink, _ledger) = make_state();
    sink.set_mode(harness::recording_sink::SinkMode::Fail);
    let app = router(state.clone());

    let event = json!({
        "gameId": "game-2",
        "wagerAmount": 10,
        "winnerId": "0.0.777",
        "winningSide": "TAILS"
    });

    let response = app
        .oneshot(post_json("/notify/coinflip/settled", event))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = read_json(response).await;
    assert_eq!(json["success"], false);

    // Failed deliveries never schedule a revenue check.
    assert_eq!(state.debouncer.pending_len(), 0);
}

#[tokio::test]
async fn test_endpoint_sends_sample_notifications() {
    let (state, sink, _ledger) = make_state();
    let app = router(state);

    let response = app
        .clone()
        .oneshot(post_empty("/test/coinflip"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_empty("/test/jackpot"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let delivered = sink.delivered();
    assert_eq!(delivered.len(), 2);
    assert_eq!(delivered[0].title, "🎮 New Coinflip Game Created!");
    assert_eq!(delivered[1].title, "🎰 New Jackpot Entry!");
}

#[tokio::test]
async fn test_endpoint_rejects_unknown_kind() {
    let (state, sink, _ledger) = make_state();
    let app = router(state);

    let response = app.oneshot(post_empty("/test/blackjack")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = read_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid test type");
    assert_eq!(sink.calls(), 0);
}

#[tokio::test]
async fn revenue_stats_reads_live_balances_without_storing() {
    let (state, _sink, ledger) = make_state();
    ledger.set_balance(&account("0.0.1001"), dec!(10.5));
    ledger.set_balance(&account("0.0.1002"), dec!(4.5));
    let app = router(state.clone());

    let response = app.oneshot(get("/revenue/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(decimal(&json["stats"]["total"]), dec!(15));
    assert_eq!(json["stats"]["accounts"][0]["label"], "coinflip");

    // A stats read must not establish a baseline.
    assert!(state.service.last_snapshot().is_unobserved());
}

#[tokio::test]
async fn revenue_check_establishes_baseline_then_detects_increase() {
    let (state, sink, ledger) = make_state();
    ledger.set_balance(&account("0.0.1001"), dec!(100));
    ledger.set_balance(&account("0.0.1002"), dec!(50));
    let app = router(state);

    let response = app
        .clone()
        .oneshot(post_empty("/notify/revenue/check"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["result"]["message"], "Baseline established");
    assert_eq!(json["result"]["notificationSent"], false);

    ledger.set_balance(&account("0.0.1001"), dec!(106));

    let response = app
        .clone()
        .oneshot(post_json("/notify/revenue/check", json!({"gameType": "Coinflip"})))
        .await
        .unwrap();
    let json = read_json(response).await;
    assert_eq!(
        json["result"]["message"],
        "Revenue increase detected and notification sent"
    );
    assert_eq!(json["result"]["notificationSent"], true);
    assert_eq!(decimal(&json["result"]["increase"]), dec!(6));

    let delivered = sink.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].title, "💰 Platform Revenue Updated!");
}

#[tokio::test]
async fn revenue_check_rejects_invalid_game_type() {
    let (state, sink, _ledger) = make_state();
    let app = router(state);

    let response = app
        .oneshot(post_json(
            "/notify/revenue/check",
            json!({"gameType": "<script>"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = read_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(sink.calls(), 0);
}

#[tokio::test]
async fn revenue_reset_clears_baseline() {
    let (state, _sink, ledger) = make_state();
    ledger.set_balance(&account("0.0.1001"), dec!(100));
    let app = router(state.clone());

    let response = app
        .clone()
        .oneshot(post_empty("/notify/revenue/check"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!state.service.last_snapshot().is_unobserved());

    let response = app.oneshot(post_empty("/revenue/reset")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["success"], true);
    assert!(state.service.last_snapshot().is_unobserved());
}

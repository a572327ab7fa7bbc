use std::env;
use std::time::Duration;

use chrono::Utc;
use herald::config::{DiscordConfig, LedgerConfig};
use herald::domain::{AccountId, Channel, Notification, NotificationKey};
use herald::ledger::{BalanceSource, MirrorNodeClient};
use herald::notify::{Delivery, DiscordSink, NotificationSink};
use rust_decimal::Decimal;
use tokio::time::timeout;

fn smoke_enabled() -> bool {
    matches!(env::var("HERALD_SMOKE").ok().as_deref(), Some("1"))
}

#[tokio::test]
#[ignore = "requires HERALD_SMOKE=1 and network access"]
async fn smoke_mirror_node_fetches_treasury_balance() {
    if !smoke_enabled() {
        eprintln!("Skipping smoke test (set HERALD_SMOKE=1 to enable)");
        return;
    }

    let config = LedgerConfig::default();
    let client = MirrorNodeClient::new(&config).expect("build mirror node client");
    let treasury = AccountId::parse("0.0.2").expect("parse treasury id");

    let balance = timeout(Duration::from_secs(20), client.fetch_balance(&treasury))
        .await
        .expect("Timed out querying the mirror node")
        .expect("Failed to fetch treasury balance");

    assert!(
        balance > Decimal::ZERO,
        "Expected a positive treasury balance, got {balance}"
    );
}

#[tokio::test]
#[ignore = "requires HERALD_SMOKE=1 and DISCORD_WEBHOOK_URL_GAMES"]
async fn smoke_discord_webhook_delivers() {
    if !smoke_enabled() {
        eprintln!("Skipping smoke test (set HERALD_SMOKE=1 to enable)");
        return;
    }

    let Ok(webhook) = env::var("DISCORD_WEBHOOK_URL_GAMES") else {
        eprintln!("Skipping smoke test (set DISCORD_WEBHOOK_URL_GAMES to enable)");
        return;
    };

    let config = DiscordConfig {
        games_webhook: Some(webhook),
        ..DiscordConfig::default()
    };
    let sink = DiscordSink::new(&config).expect("build discord sink");

    let notification = Notification {
        channel: Channel::Games,
        title: "🧪 Herald Smoke Test".to_string(),
        body: "Delivery path verified against a real webhook.".to_string(),
        color: 0x00FF00,
        fields: Vec::new(),
        key: NotificationKey::event(
            Channel::Games,
            "smoke-test",
            Utc::now().timestamp().to_string(),
        ),
    };

    let delivery = timeout(Duration::from_secs(20), sink.deliver(&notification))
        .await
        .expect("Timed out posting to Discord")
        .expect("Failed to deliver test notification");

    assert_eq!(delivery, Delivery::Sent);
}

//! Configuration and connectivity validation commands.

use std::path::Path;

use chrono::Utc;

use crate::cli::{output, CheckCommand, WebhookArgs};
use crate::config::Config;
use crate::domain::{Channel, Notification, NotificationKey};
use crate::error::Result;
use crate::ledger::{BalanceSource, MirrorNodeClient};
use crate::notify::{Delivery, DiscordSink, NotificationSink};

/// Dispatch a `check` subcommand.
pub async fn execute(cmd: &CheckCommand) -> Result<()> {
    match cmd {
        CheckCommand::Config(args) => {
            execute_config(&args.config);
            Ok(())
        }
        CheckCommand::Webhook(args) => execute_webhook(args).await,
        CheckCommand::Ledger(args) => execute_ledger(&args.config).await,
    }
}

/// Validate configuration file without starting the server.
pub fn execute_config<P: AsRef<Path>>(config_path: P) {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    if !path.exists() {
        eprintln!("Error: Configuration file not found: {}", path.display());
        eprintln!();
        eprintln!("Create one by copying the example:");
        eprintln!("  cp config.toml.example config.toml");
        std::process::exit(1);
    }

    match Config::load(path) {
        Ok(config) => {
            println!("✓ Configuration file is valid");
            println!();
            println!("Summary:");
            println!("  Listen: {}", config.server.bind_addr());
            println!("  Mirror node: {}", config.ledger.mirror_base_url);
            println!("  Notify threshold: {} HBAR", config.revenue.notify_threshold);
            println!("  Watched accounts:");
            for (label, account) in config.watched_accounts() {
                println!("    - {label}: {account}");
            }
            println!();

            if config.discord.games_webhook.is_some() {
                println!("✓ Games webhook found (from DISCORD_WEBHOOK_URL_GAMES env var)");
            } else {
                println!("⚠ No games webhook configured");
                println!("  Set DISCORD_WEBHOOK_URL_GAMES to deliver game notifications");
            }

            if config.discord.revenue_webhook.is_some() {
                println!("✓ Revenue webhook found (from DISCORD_WEBHOOK_URL_REVENUE env var)");
            } else if config.discord.games_webhook.is_some() {
                println!("⚠ No revenue webhook configured, revenue updates fall back to the games webhook");
            } else {
                println!("⚠ No revenue webhook configured");
                println!("  Set DISCORD_WEBHOOK_URL_REVENUE to deliver revenue notifications");
            }

            println!();
            println!("Configuration is ready to use.");
        }
        Err(e) => {
            eprintln!("✗ Configuration error: {e}");
            std::process::exit(1);
        }
    }
}

/// Send a test notification through the configured webhooks.
pub async fn execute_webhook(args: &WebhookArgs) -> Result<()> {
    let config = Config::load(&args.config)?;

    if config.discord.games_webhook.is_none() && config.discord.revenue_webhook.is_none() {
        output::error("No Discord webhooks configured");
        eprintln!("  Set DISCORD_WEBHOOK_URL_GAMES and/or DISCORD_WEBHOOK_URL_REVENUE");
        std::process::exit(1);
    }

    let sink = DiscordSink::new(&config.discord)?;
    let channels: Vec<Channel> = match args.channel {
        Some(arg) => vec![arg.into()],
        None => vec![Channel::Games, Channel::Revenue],
    };

    output::section("Webhook delivery test");
    let mut failures = 0;
    for channel in channels {
        output::progress(&format!("{channel} channel"));
        match sink.deliver(&test_notification(channel)).await {
            Ok(Delivery::Sent) => output::progress_done(true),
            Ok(Delivery::Skipped) => {
                println!("skipped (no webhook)");
            }
            Err(e) => {
                output::progress_done(false);
                output::error(&format!("{channel} delivery failed: {e}"));
                failures += 1;
            }
        }
    }

    println!();
    if failures > 0 {
        output::error("Webhook test failed");
        std::process::exit(1);
    }
    output::ok("Check your Discord channels for the test messages.");
    Ok(())
}

/// Fetch every watched account balance once to prove the mirror node is reachable.
pub async fn execute_ledger<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    let client = MirrorNodeClient::new(&config.ledger)?;

    output::section("Watched account balances");
    output::key_value("Mirror node", &config.ledger.mirror_base_url);
    println!();

    let mut failures = 0;
    for (label, account) in config.watched_accounts() {
        match client.fetch_balance(&account).await {
            Ok(balance) => {
                output::key_value(&label, format!("{balance} HBAR ({account})"));
            }
            Err(e) => {
                output::error(&format!("{label}: {e}"));
                failures += 1;
            }
        }
    }

    println!();
    if failures > 0 {
        output::error("Some balances could not be fetched");
        std::process::exit(1);
    }
    output::ok("Mirror node is reachable.");
    Ok(())
}

/// A minimal branded notification for operator verification.
fn test_notification(channel: Channel) -> Notification {
    Notification {
        channel,
        title: "🧪 Herald Test Notification".into(),
        body: format!("The {channel} webhook is configured correctly."),
        color: 0x00FF00,
        fields: Vec::new(),
        key: NotificationKey::event(channel, "webhook-test", Utc::now().timestamp().to_string()),
    }
}

//! Handler for the `send` command.

use crate::app;
use crate::cli::{output, SendArgs};
use crate::config::Config;
use crate::domain::{samples, CheckReason};
use crate::error::Result;
use crate::notify::{render, Delivery, DiscordSink, NotificationSink};

/// Send one sample notification of the requested kind.
pub async fn execute(args: &SendArgs) -> Result<()> {
    if args.kind == "revenue" {
        return execute_revenue(args).await;
    }

    let Some(event) = samples::event_for(&args.kind) else {
        output::error(&format!("Unknown event kind: {}", args.kind));
        output::note(
            "Valid kinds: coinflip-created, coinflip-settled, jackpot-entry, jackpot-winner, revenue",
        );
        std::process::exit(1);
    };

    let config = Config::load(&args.config)?;
    let sink = DiscordSink::new(&config.discord)?;
    let notification = render::for_event(&event);

    output::progress(&format!("Sending {} sample", args.kind));
    match sink.deliver(&notification).await {
        Ok(Delivery::Sent) => {
            output::progress_done(true);
            output::ok("Check your Discord channel for the message.");
            Ok(())
        }
        Ok(Delivery::Skipped) => {
            println!("skipped");
            output::warn("No webhook configured for the games channel");
            output::note("Set DISCORD_WEBHOOK_URL_GAMES and retry");
            std::process::exit(1);
        }
        Err(e) => {
            output::progress_done(false);
            output::error(&format!("Delivery failed: {e}"));
            std::process::exit(1);
        }
    }
}

/// Run a real reconciliation against the mirror node and report the outcome.
async fn execute_revenue(args: &SendArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    let state = app::build_state(&config)?;

    output::progress("Running revenue reconciliation");
    let outcome = state.service.check_and_notify(&CheckReason::test()).await;
    output::progress_done(true);

    output::key_value("Result", &outcome.message);
    output::key_value("Total", format!("{:.2} HBAR", outcome.snapshot.total));
    output::key_value("Increase", format!("{:.4} HBAR", outcome.increase));

    if outcome.notification_sent {
        output::ok("Check your Discord channel for the message.");
    } else {
        output::note("No notification was sent.");
    }
    Ok(())
}

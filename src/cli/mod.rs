//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod send;
pub mod serve;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::Channel;

/// Herald - Discord notification relay for the Angryroll gaming platform.
#[derive(Parser, Debug)]
#[command(name = "herald")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the notification relay server (foreground)
    Serve(ServeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Send a sample notification through the configured webhooks
    Send(SendArgs),
}

/// Subcommands for `herald check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
    /// Test Discord webhook setup
    Webhook(WebhookArgs),
    /// Fetch watched account balances from the mirror node
    Ledger(ConfigPathArg),
}

/// Arguments for `check webhook`.
#[derive(Parser, Debug)]
pub struct WebhookArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Test only one channel instead of both
    #[arg(long, value_enum)]
    pub channel: Option<ChannelArg>,
}

/// Notification channel selector for CLI flags.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ChannelArg {
    Games,
    Revenue,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Games => Channel::Games,
            ChannelArg::Revenue => Channel::Revenue,
        }
    }
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `send` subcommand.
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// What to send: coinflip-created, coinflip-settled, jackpot-entry,
    /// jackpot-winner, or revenue (runs a real reconciliation)
    pub kind: String,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Dispatch a parsed CLI invocation to its handler.
pub async fn run(cli: Cli) -> crate::error::Result<()> {
    match cli.command {
        Commands::Serve(args) => serve::execute(&args).await,
        Commands::Check(cmd) => check::execute(&cmd).await,
        Commands::Send(args) => send::execute(&args).await,
    }
}

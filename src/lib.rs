//! Herald - Discord notification relay for the Angryroll gaming platform.
//!
//! This crate receives game events over HTTP, renders them as Discord
//! embeds and delivers them to webhooks, while tracking platform wallet
//! balances on the Hedera mirror node to announce revenue growth.
//!
//! # Architecture
//!
//! Events flow through three stages:
//!
//! - **`server`** - Axum routes that accept platform events
//! - **`notify`** - Rendering, duplicate suppression and webhook delivery
//! - **`revenue`** - Balance snapshots, delta detection and debounced checks
//!
//! Revenue checks are triggered in two ways: settlement events schedule a
//! delayed, debounced check, and operators can force one through the API.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files and environment
//! - [`domain`] - Platform types: events, notifications, balance snapshots
//! - [`error`] - Error types for the crate
//! - [`ledger`] - Hedera mirror node balance source
//! - [`notify`] - Notification pipeline from rendering to Discord delivery
//! - [`revenue`] - Revenue tracking and reconciliation
//! - [`server`] - HTTP API surface
//! - [`app`] - Application orchestration
//!
//! # Example
//!
//! ```no_run
//! use herald::app::App;
//! use herald::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> herald::Result<()> {
//!     let config = Config::load("config.toml")?;
//!     config.logging.init();
//!     App::run(config).await
//! }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod notify;
pub mod revenue;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};

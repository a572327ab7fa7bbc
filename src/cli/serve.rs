//! Handler for the `serve` command.

use tracing::info;

use crate::app::App;
use crate::cli::ServeArgs;
use crate::config::{Config, LogFormat};
use crate::error::Result;

/// Execute the serve command.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    // Apply CLI overrides
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = LogFormat::Json;
    }

    config.logging.init();

    info!(
        addr = %config.server.bind_addr(),
        mirror_node = %config.ledger.mirror_base_url,
        "herald starting"
    );

    App::run(config).await?;

    info!("herald stopped");
    Ok(())
}

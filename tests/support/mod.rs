#![allow(dead_code)]

use std::io::Write;
use std::sync::Mutex;

use tempfile::NamedTempFile;

/// Serializes tests that read or write process environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Remove every environment variable the config loader consults.
pub fn clear_config_env() {
    std::env::remove_var("DISCORD_WEBHOOK_URL_GAMES");
    std::env::remove_var("DISCORD_WEBHOOK_URL_REVENUE");
    std::env::remove_var("PORT");
}

/// Write TOML content to a temp file that lives as long as the handle.
pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("herald-config-test-")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes())
        .expect("write temp config");
    file
}

mod support;

use assert_cmd::Command;
use predicates::prelude::*;

fn herald() -> Command {
    let mut cmd = Command::cargo_bin("herald").expect("herald binary");
    cmd.env_remove("DISCORD_WEBHOOK_URL_GAMES")
        .env_remove("DISCORD_WEBHOOK_URL_REVENUE")
        .env_remove("PORT");
    cmd
}

#[test]
fn cli_help_lists_subcommands() {
    herald()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("send"));
}

#[test]
fn cli_version_prints_name() {
    herald()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("herald"));
}

#[test]
fn check_config_reports_missing_file() {
    herald()
        .args(["check", "config", "--config", "/nonexistent/herald.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn check_config_accepts_valid_file() {
    let file = support::write_temp_config(
        r#"
[server]
port = 4000

[[ledger.accounts]]
label = "coinflip"
id = "0.0.9276566"

[[ledger.accounts]]
label = "jackpot"
id = "0.0.9314288"
"#,
    );

    herald()
        .args(["check", "config", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file is valid"))
        .stdout(predicate::str::contains("coinflip: 0.0.9276566"))
        .stdout(predicate::str::contains("No games webhook configured"));
}

#[test]
fn check_config_rejects_invalid_account() {
    let file = support::write_temp_config(
        r#"
[[ledger.accounts]]
label = "treasury"
id = "not-an-account"
"#,
    );

    herald()
        .args(["check", "config", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn send_rejects_unknown_kind() {
    herald()
        .args(["send", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown event kind"));
}

#[test]
fn serve_reports_unreadable_config() {
    herald()
        .args(["serve", "--config", "/nonexistent/herald.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

//! Inbound game platform events.
//!
//! The platform backend posts these payloads as JSON with camelCase keys.
//! Deserialization is deliberately forgiving: unknown fields are ignored
//! and missing fields fall back to defaults, so a notification still goes
//! out when the caller sends a sparse payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::money::Amount;

/// A new coinflip game was created and is waiting for a challenger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoinflipCreated {
    #[serde(deserialize_with = "stringlike")]
    pub id: String,
    pub bet_amount: Amount,
    pub creator: String,
    /// 0 means the creator picked heads, anything else tails.
    pub creator_choice: i64,
}

/// A coinflip game settled with a winner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoinflipSettled {
    #[serde(deserialize_with = "stringlike")]
    pub game_id: String,
    pub wager_amount: Amount,
    #[serde(deserialize_with = "stringlike")]
    pub winner_id: String,
    pub winning_side: String,
    pub challenged_by_bot: bool,
    pub fee_charged: Amount,
}

/// A player entered the current jackpot round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JackpotEntry {
    pub participant_data: JackpotParticipant,
    pub current_pot: Amount,
    pub participant_count: u32,
}

/// The player behind a jackpot entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JackpotParticipant {
    pub username: String,
    pub account_id: String,
    pub amount_entered: Amount,
    pub chance_percentage: Decimal,
}

/// A jackpot round finished and paid out a winner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JackpotWinner {
    pub winner_username: String,
    #[serde(deserialize_with = "stringlike")]
    pub winner_id: String,
    pub prize_amount: Amount,
    pub win_chance: Option<Decimal>,
    #[serde(deserialize_with = "stringlike")]
    pub round_id: String,
    pub participant_count: u32,
    pub total_pot: Amount,
}

/// Any event the platform can announce.
#[derive(Debug, Clone)]
pub enum GameEvent {
    CoinflipCreated(CoinflipCreated),
    CoinflipSettled(CoinflipSettled),
    JackpotEntry(JackpotEntry),
    JackpotWinner(JackpotWinner),
}

impl GameEvent {
    /// Stable slug identifying the event type.
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::CoinflipCreated(_) => "coinflip-created",
            GameEvent::CoinflipSettled(_) => "coinflip-settled",
            GameEvent::JackpotEntry(_) => "jackpot-entry",
            GameEvent::JackpotWinner(_) => "jackpot-winner",
        }
    }
}

/// Accept identifier fields sent either as JSON strings or numbers.
fn stringlike<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

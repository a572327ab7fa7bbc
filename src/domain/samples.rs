//! Canned event payloads for the test endpoint and CLI.

use rust_decimal_macros::dec;

use crate::domain::event::{
    CoinflipCreated, CoinflipSettled, GameEvent, JackpotEntry, JackpotParticipant, JackpotWinner,
};

pub fn coinflip_created() -> CoinflipCreated {
    CoinflipCreated {
        id: "test-123".to_string(),
        bet_amount: dec!(10),
        creator: "0.0.1234567".to_string(),
        creator_choice: 0,
    }
}

pub fn coinflip_settled() -> CoinflipSettled {
    CoinflipSettled {
        game_id: "test-123".to_string(),
        wager_amount: dec!(10),
        winner_id: "0.0.1234567".to_string(),
        winning_side: "HEADS".to_string(),
        challenged_by_bot: false,
        fee_charged: dec!(0.5),
    }
}

pub fn jackpot_entry() -> JackpotEntry {
    JackpotEntry {
        participant_data: JackpotParticipant {
            username: "TestPlayer".to_string(),
            account_id: String::new(),
            amount_entered: dec!(5),
            chance_percentage: dec!(25),
        },
        current_pot: dec!(100),
        participant_count: 4,
    }
}

pub fn jackpot_winner() -> JackpotWinner {
    JackpotWinner {
        winner_username: "TestPlayer".to_string(),
        winner_id: "0.0.1234567".to_string(),
        prize_amount: dec!(95),
        win_chance: Some(dec!(25)),
        round_id: "round-77".to_string(),
        participant_count: 4,
        total_pot: dec!(100),
    }
}

/// Sample event for a slug as accepted by the CLI `send` command.
pub fn event_for(kind: &str) -> Option<GameEvent> {
    match kind {
        "coinflip-created" => Some(GameEvent::CoinflipCreated(coinflip_created())),
        "coinflip-settled" => Some(GameEvent::CoinflipSettled(coinflip_settled())),
        "jackpot-entry" => Some(GameEvent::JackpotEntry(jackpot_entry())),
        "jackpot-winner" => Some(GameEvent::JackpotWinner(jackpot_winner())),
        _ => None,
    }
}

//! Render game events and revenue updates into notifications.
//!
//! The exact wording and emoji here are part of the product surface; the
//! community reads these messages in chat, so changes should be deliberate.

use chrono::{DateTime, Utc};

use crate::domain::{
    Amount, BalanceSnapshot, Channel, CheckReason, CoinflipCreated, CoinflipSettled, GameEvent,
    JackpotEntry, JackpotWinner, Notification, NotificationField, NotificationKey,
};

const COINFLIP_URL: &str = "https://angryroll.com/coinflip";
const JACKPOT_URL: &str = "https://angryroll.com/jackpot";

const COLOR_COINFLIP_CREATED: u32 = 0xF84565;
const COLOR_COINFLIP_SETTLED: u32 = 0x00FF00;
const COLOR_JACKPOT_ENTRY: u32 = 0xFFD700;
const COLOR_JACKPOT_WINNER: u32 = 0xFF6B35;
const COLOR_REVENUE: u32 = 0x00FF00;

/// Render any game event.
pub fn for_event(event: &GameEvent) -> Notification {
    match event {
        GameEvent::CoinflipCreated(e) => coinflip_created(e),
        GameEvent::CoinflipSettled(e) => coinflip_settled(e),
        GameEvent::JackpotEntry(e) => jackpot_entry(e),
        GameEvent::JackpotWinner(e) => jackpot_winner(e),
    }
}

pub fn coinflip_created(event: &CoinflipCreated) -> Notification {
    let creator = fallback(&event.creator, "Unknown");
    let choice = if event.creator_choice == 0 {
        "**HEADS** 🪙"
    } else {
        "**TAILS** 🪙"
    };

    Notification {
        channel: Channel::Games,
        title: "🎮 New Coinflip Game Created!".to_string(),
        body: format!(
            "🎯 **Game ID {}** is ready to challenge!\n\n🎮 **[🚀 PLAY NOW - JOIN THE GAME!]({COINFLIP_URL})**",
            event.id
        ),
        color: COLOR_COINFLIP_CREATED,
        fields: vec![
            NotificationField::inline("🆔 Game ID", format!("`{}`", event.id)),
            NotificationField::inline("💰 Bet Amount", format!("**{} HBAR**", event.bet_amount)),
            NotificationField::inline("👤 Creator", creator),
            NotificationField::inline("🪙 Creator Choice", choice),
            NotificationField::inline("⏰ Status", "🟢 **Waiting for challenger**"),
            NotificationField::inline(
                "🎯 Challenge This Game",
                format!("**[🎮 JOIN BATTLE →]({COINFLIP_URL})**"),
            ),
        ],
        key: NotificationKey::event(Channel::Games, "coinflip-created", event.id.clone()),
    }
}

pub fn coinflip_settled(event: &CoinflipSettled) -> Notification {
    let winner = fallback(&event.winner_id, "Unknown");
    let side = if event.winning_side == "HEADS" {
        "**HEADS** 🪙"
    } else {
        "**TAILS** 🪙"
    };
    let bot = if event.challenged_by_bot { "Yes" } else { "No" };

    Notification {
        channel: Channel::Games,
        title: "🏆 Coinflip Game Completed!".to_string(),
        body: "A coinflip game has been settled with a winner.".to_string(),
        color: COLOR_COINFLIP_SETTLED,
        fields: vec![
            NotificationField::inline("🆔 Game ID", format!("`{}`", event.game_id)),
            NotificationField::inline(
                "💰 Wager Amount",
                format!("**{} HBAR**", event.wager_amount),
            ),
            NotificationField::inline("🏆 Winner", winner),
            NotificationField::inline("🪙 Winning Side", side),
            NotificationField::inline("🤖 Bot Game", bot),
            NotificationField::inline("💸 Platform Fee", format!("{} HBAR", event.fee_charged)),
        ],
        key: NotificationKey::event(Channel::Games, "coinflip-settled", event.game_id.clone()),
    }
}

pub fn jackpot_entry(event: &JackpotEntry) -> Notification {
    let participant = &event.participant_data;
    let player = fallback(
        &participant.username,
        fallback(&participant.account_id, "Anonymous"),
    );
    // Entries carry no platform ID, so the player plus the participant count
    // stands in as the identity of this entry.
    let key = NotificationKey::event(
        Channel::Games,
        "jackpot-entry",
        format!("{player}#{}", event.participant_count),
    );

    Notification {
        channel: Channel::Games,
        title: "🎰 New Jackpot Entry!".to_string(),
        body: "Someone joined the current jackpot round.".to_string(),
        color: COLOR_JACKPOT_ENTRY,
        fields: vec![
            NotificationField::inline("👤 Player", player),
            NotificationField::inline(
                "💰 Entry Amount",
                format!("**{} HBAR**", participant.amount_entered),
            ),
            NotificationField::inline(
                "🎯 Win Chance",
                format!("{}%", participant.chance_percentage),
            ),
            NotificationField::inline("🏆 Current Pot", format!("**{} HBAR**", event.current_pot)),
            NotificationField::inline(
                "👥 Total Players",
                format!("{} players", event.participant_count),
            ),
            NotificationField::inline("🔗 Join Jackpot", format!("[Play Now]({JACKPOT_URL})")),
        ],
        key,
    }
}

pub fn jackpot_winner(event: &JackpotWinner) -> Notification {
    let winner = fallback(&event.winner_username, fallback(&event.winner_id, "Anonymous"));
    let chance = match event.win_chance {
        Some(chance) if !chance.is_zero() => format!("{chance}%"),
        _ => "N/A%".to_string(),
    };

    Notification {
        channel: Channel::Games,
        title: "🎉 Jackpot Winner Announced!".to_string(),
        body: "We have a jackpot winner! Congratulations! 🎊".to_string(),
        color: COLOR_JACKPOT_WINNER,
        fields: vec![
            NotificationField::inline("🏆 Winner", winner),
            NotificationField::inline(
                "💰 Prize Amount",
                format!("**{} HBAR**", event.prize_amount),
            ),
            NotificationField::inline("🎯 Win Chance", chance),
            NotificationField::inline("🎰 Round ID", format!("`{}`", event.round_id)),
            NotificationField::inline(
                "👥 Total Players",
                format!("{} players", event.participant_count),
            ),
            NotificationField::inline("🏆 Total Pot", format!("{} HBAR", event.total_pot)),
        ],
        key: NotificationKey::event(Channel::Games, "jackpot-winner", event.round_id.clone()),
    }
}

/// Render a revenue update, or `None` when there is no increase to report.
///
/// Recurring revenue updates collapse onto a minute bucket derived from
/// `now`, so repeated reconciliations within a minute produce one message.
pub fn revenue_update(
    reason: &CheckReason,
    snapshot: &BalanceSnapshot,
    increase: Amount,
    now: DateTime<Utc>,
) -> Option<Notification> {
    if increase <= Amount::ZERO {
        return None;
    }

    let mut fields = vec![
        NotificationField::inline("🎮 Game Type", format!("**{reason}**")),
        NotificationField::inline("➕ Revenue Increase", format!("**+{increase:.4} HBAR**")),
        NotificationField::inline("💎 Total Revenue", format!("**{:.2} HBAR**", snapshot.total)),
    ];
    for account in &snapshot.accounts {
        fields.push(NotificationField::inline(
            format!("📊 {} Revenue", title_case(&account.label)),
            format!("{:.2} HBAR", account.balance),
        ));
    }
    fields.push(NotificationField::inline("📈 Status", "🚀 Growing steadily!"));

    Some(Notification {
        channel: Channel::Revenue,
        title: "💰 Platform Revenue Updated!".to_string(),
        body: format!("Revenue has been updated after {reason} game settlement."),
        color: COLOR_REVENUE,
        fields,
        key: NotificationKey::time_bucket(Channel::Revenue, "revenue-update", now.timestamp() / 60),
    })
}

fn fallback<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

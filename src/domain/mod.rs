//! Transport-agnostic domain types.

pub mod error;
mod event;
mod ids;
mod money;
mod notification;
mod reason;
pub mod samples;
mod snapshot;

// Core domain types
pub use event::{
    CoinflipCreated, CoinflipSettled, GameEvent, JackpotEntry, JackpotParticipant, JackpotWinner,
};
pub use ids::AccountId;
pub use money::{hbar_from_tinybars, Amount};
pub use reason::CheckReason;

// Notification model
pub use notification::{Channel, KeyDiscriminant, Notification, NotificationField, NotificationKey};

// Balance tracking
pub use snapshot::{AccountBalance, BalanceDelta, BalanceSnapshot, CheckOutcome, SnapshotDiff};

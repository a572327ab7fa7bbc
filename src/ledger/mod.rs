//! Balance ledger access.
//!
//! The [`BalanceSource`] trait is the seam between revenue tracking and the
//! outside world; [`MirrorNodeClient`] is the production implementation.

mod mirror;

use async_trait::async_trait;

use crate::domain::{AccountId, Amount};
use crate::error::LedgerError;

pub use mirror::MirrorNodeClient;

/// Anything that can report the current balance of an account.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Fetch the current balance of `account` in HBAR.
    async fn fetch_balance(&self, account: &AccountId) -> Result<Amount, LedgerError>;
}

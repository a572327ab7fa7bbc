use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use herald::domain::{AccountId, Amount};
use herald::error::LedgerError;
use herald::ledger::BalanceSource;
use rust_decimal::Decimal;

/// In-memory balance source with adjustable balances and scripted failures.
pub struct ScriptedLedger {
    balances: Mutex<HashMap<String, Amount>>,
    failing: Mutex<Vec<String>>,
    fetches: AtomicUsize,
}

impl ScriptedLedger {
    pub fn new() -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            failing: Mutex::new(Vec::new()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn set_balance(&self, account: &AccountId, balance: Amount) {
        self.balances
            .lock()
            .expect("lock balances")
            .insert(account.as_str().to_string(), balance);
    }

    /// Make every fetch for this account fail until balances are set again.
    pub fn fail_account(&self, account: &AccountId) {
        self.failing
            .lock()
            .expect("lock failing accounts")
            .push(account.as_str().to_string());
    }

    /// Total fetch calls across all accounts.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl Default for ScriptedLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BalanceSource for ScriptedLedger {
    async fn fetch_balance(&self, account: &AccountId) -> Result<Amount, LedgerError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);

        let failing = self.failing.lock().expect("lock failing accounts");
        if failing.iter().any(|a| a == account.as_str()) {
            return Err(LedgerError::Status {
                account: account.as_str().to_string(),
                status: 503,
            });
        }
        drop(failing);

        Ok(self
            .balances
            .lock()
            .expect("lock balances")
            .get(account.as_str())
            .copied()
            .unwrap_or(Decimal::ZERO))
    }
}

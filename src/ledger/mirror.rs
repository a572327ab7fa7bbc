//! Hedera mirror node REST client.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::LedgerConfig;
use crate::domain::{hbar_from_tinybars, AccountId, Amount};
use crate::error::{LedgerError, Result};
use crate::ledger::BalanceSource;

/// Client for the mirror node `/api/v1/accounts/{id}` endpoint.
#[derive(Debug, Clone)]
pub struct MirrorNodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl MirrorNodeClient {
    /// Build a client from ledger configuration.
    pub fn new(config: &LedgerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.mirror_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn account_url(&self, account: &AccountId) -> String {
        format!("{}/api/v1/accounts/{}", self.base_url, account)
    }
}

#[async_trait]
impl BalanceSource for MirrorNodeClient {
    async fn fetch_balance(&self, account: &AccountId) -> std::result::Result<Amount, LedgerError> {
        let response = self
            .http
            .get(self.account_url(account))
            .send()
            .await
            .map_err(|e| LedgerError::Request {
                account: account.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::Status {
                account: account.to_string(),
                status: status.as_u16(),
            });
        }

        let payload: AccountResponse =
            response.json().await.map_err(|e| LedgerError::Malformed {
                account: account.to_string(),
                reason: e.to_string(),
            })?;

        Ok(payload.tinybars_to_hbar())
    }
}

/// The subset of the mirror node account payload we care about.
///
/// Accounts without a balance block are reported as zero, matching how the
/// mirror node represents never-funded accounts.
#[derive(Debug, Deserialize)]
struct AccountResponse {
    balance: Option<BalancePayload>,
}

#[derive(Debug, Deserialize)]
struct BalancePayload {
    balance: i64,
}

impl AccountResponse {
    fn tinybars_to_hbar(&self) -> Amount {
        hbar_from_tinybars(self.balance.as_ref().map(|b| b.balance).unwrap_or(0))
    }
}

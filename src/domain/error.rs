//! Domain validation errors for core domain types.
//!
//! These errors are returned by parsing constructors that validate inputs
//! arriving from configuration or HTTP payloads.
//!
//! # Examples
//!
//! ```
//! use herald::domain::error::DomainError;
//! use herald::domain::AccountId;
//!
//! let result = AccountId::parse("not-an-account");
//! assert!(matches!(result, Err(DomainError::InvalidAccountId { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Ledger account IDs must look like `shard.realm.num`, e.g. `0.0.9276566`.
    #[error("invalid account id '{value}': {reason}")]
    InvalidAccountId {
        /// The rejected input.
        value: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// Check reasons are short labels attached to reconciliation runs.
    #[error("invalid check reason '{value}': {reason}")]
    InvalidCheckReason {
        /// The rejected input.
        value: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

//! Labels for what triggered a revenue reconciliation.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

const MAX_REASON_LEN: usize = 32;

/// A short label recording why a revenue check ran.
///
/// Built-in constructors cover the triggers the service itself produces;
/// [`CheckReason::parse`] validates labels arriving over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CheckReason(String);

impl CheckReason {
    /// A check scheduled after a coinflip settlement.
    pub fn coinflip() -> Self {
        Self("Coinflip".to_string())
    }

    /// A check scheduled after a jackpot round completed.
    pub fn jackpot() -> Self {
        Self("Jackpot".to_string())
    }

    /// A check requested explicitly over the HTTP API.
    pub fn manual() -> Self {
        Self("Manual".to_string())
    }

    /// A check fired from the test endpoint or CLI.
    pub fn test() -> Self {
        Self("Test".to_string())
    }

    /// Validate a caller-supplied reason label.
    ///
    /// Labels must be non-empty after trimming, at most 32 characters, and
    /// limited to alphanumerics, spaces, `-` and `_`.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCheckReason {
                value,
                reason: "must not be empty",
            });
        }
        if trimmed.len() > MAX_REASON_LEN {
            return Err(DomainError::InvalidCheckReason {
                value,
                reason: "must be at most 32 characters",
            });
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_')
        {
            return Err(DomainError::InvalidCheckReason {
                value,
                reason: "must contain only alphanumerics, spaces, '-' or '_'",
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the reason as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

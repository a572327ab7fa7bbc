//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Hedera account identifier in `shard.realm.num` form.
///
/// The inner String is private so every instance has passed through
/// [`AccountId::parse`] validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Parse and validate an account ID such as `0.0.9276566`.
    pub fn parse(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let parts: Vec<&str> = id.split('.').collect();
        if parts.len() != 3 {
            return Err(DomainError::InvalidAccountId {
                value: id,
                reason: "expected three dot-separated parts",
            });
        }
        if parts
            .iter()
            .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(DomainError::InvalidAccountId {
                value: id,
                reason: "parts must be non-empty and numeric",
            });
        }
        Ok(Self(id))
    }

    /// Get the account ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Voter identity

use serde::{Deserialize, Serialize};

/// Numeric identifier of a real user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u32);

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(AccountId)
    }
}

/// Who cast a vote
///
/// Internal users (server-side automation) have no account identity. All of
/// their votes share the single [`Voter::Internal`] slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voter {
    Account(AccountId),
    Internal,
}

impl Voter {
    pub fn account(id: u32) -> Self {
        Voter::Account(AccountId(id))
    }

    /// The account identity, if this is a real account
    pub fn account_id(&self) -> Option<AccountId> {
        match self {
            Voter::Account(id) => Some(*id),
            Voter::Internal => None,
        }
    }
}

impl std::fmt::Display for Voter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Voter::Account(id) => write!(f, "account {}", id),
            Voter::Internal => write!(f, "internal user"),
        }
    }
}

impl From<AccountId> for Voter {
    fn from(id: AccountId) -> Self {
        Voter::Account(id)
    }
}

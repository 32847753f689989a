//! Vote storage port
//!
//! The storage layer owns the mutable vote sets. Implementations must
//! serialize writes per (change, label) so that replacing a voter's vote and
//! reading the resulting snapshot observe a consistent state, and must apply
//! the votes of one review as a unit.

use async_trait::async_trait;
use labelgate_domain::{Vote, VoteSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric identifier of a change under review
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeId(pub u32);

impl std::fmt::Display for ChangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ChangeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ChangeId)
    }
}

/// Errors raised by vote storage adapters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteStoreError {
    #[error("Vote store unavailable: {0}")]
    Unavailable(String),
}

/// Port for reading and recording votes
#[async_trait]
pub trait VoteStore: Send + Sync {
    /// Snapshot of the votes on one label of a change (empty if none)
    async fn votes(&self, change: ChangeId, label: &str) -> Result<VoteSet, VoteStoreError>;

    /// Record the votes of one review, each replacing any earlier vote by the
    /// same voter on its label
    ///
    /// All-or-nothing: on error no vote of the batch is recorded. Returns the
    /// vote set of each label right after the write, in request order.
    async fn put_votes(
        &self,
        change: ChangeId,
        votes: &[(&str, Vote)],
    ) -> Result<Vec<VoteSet>, VoteStoreError>;
}

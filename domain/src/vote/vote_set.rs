//! Votes cast on one label of one change
//!
//! This module defines the voting primitives consumed by the evaluator.

use super::voter::Voter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// A single vote on a label
///
/// # Example
///
/// ```
/// use labelgate_domain::{Vote, Voter};
///
/// let vote = Vote::new(Voter::account(1000), -1);
/// assert_eq!(vote.value, -1);
/// assert_eq!(vote.voter, Voter::account(1000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    /// Who cast the vote
    pub voter: Voter,
    /// The vote value; lies within the label's range by the time it reaches the evaluator
    pub value: i16,
    /// When the vote was cast
    pub cast_at: DateTime<Utc>,
}

impl Vote {
    /// Create a vote cast now
    pub fn new(voter: Voter, value: i16) -> Self {
        Self {
            voter,
            value,
            cast_at: Utc::now(),
        }
    }

    /// Set the cast timestamp
    pub fn with_cast_at(mut self, cast_at: DateTime<Utc>) -> Self {
        self.cast_at = cast_at;
        self
    }
}

/// The votes on one (label, change) pair, at most one per voter
///
/// Inserting a vote for a voter that already voted replaces the earlier
/// vote; votes never accumulate.
///
/// ```
/// use labelgate_domain::{Vote, VoteSet, Voter};
///
/// let mut votes = VoteSet::new();
/// votes.insert(Vote::new(Voter::account(1), -1));
/// votes.insert(Vote::new(Voter::account(1), 1));
///
/// assert_eq!(votes.len(), 1);
/// assert_eq!(votes.min_vote(), Some(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteSet {
    votes: BTreeMap<Voter, Vote>,
}

impl VoteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vote, returning the vote it replaced (if any)
    pub fn insert(&mut self, vote: Vote) -> Option<Vote> {
        self.votes.insert(vote.voter, vote)
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Votes ordered by voter
    pub fn iter(&self) -> impl Iterator<Item = &Vote> {
        self.votes.values()
    }

    /// Highest vote value, or `None` if nobody voted
    pub fn max_vote(&self) -> Option<i16> {
        self.iter().map(|vote| vote.value).max()
    }

    /// Lowest vote value, or `None` if nobody voted
    pub fn min_vote(&self) -> Option<i16> {
        self.iter().map(|vote| vote.value).min()
    }
}

impl FromIterator<Vote> for VoteSet {
    /// Later votes by the same voter replace earlier ones
    fn from_iter<I: IntoIterator<Item = Vote>>(iter: I) -> Self {
        let mut set = VoteSet::new();
        for vote in iter {
            set.insert(vote);
        }
        set
    }
}

impl Serialize for VoteSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.votes.values())
    }
}

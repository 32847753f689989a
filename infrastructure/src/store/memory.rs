//! In-process vote store
//!
//! Holds every vote set behind a single async mutex, so all votes of a review
//! and the resulting snapshots are written and taken under one lock.

use async_trait::async_trait;
use labelgate_application::{ChangeId, VoteStore, VoteStoreError};
use labelgate_domain::{Vote, VoteSet};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::trace;

type VoteKey = (ChangeId, String);

#[derive(Debug, Default)]
pub struct InMemoryVoteStore {
    votes: Mutex<HashMap<VoteKey, VoteSet>>,
}

impl InMemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from already-collected votes, later entries replacing
    /// earlier ones by the same voter
    pub fn from_votes(votes: impl IntoIterator<Item = (ChangeId, String, Vote)>) -> Self {
        let mut map: HashMap<VoteKey, VoteSet> = HashMap::new();
        for (change, label, vote) in votes {
            map.entry((change, label)).or_default().insert(vote);
        }
        Self {
            votes: Mutex::new(map),
        }
    }

    /// Every (change, label) pair holding at least one vote, sorted
    pub async fn entries(&self) -> Vec<(ChangeId, String, VoteSet)> {
        let votes = self.votes.lock().await;
        let mut entries: Vec<_> = votes
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|((change, label), set)| (*change, label.clone(), set.clone()))
            .collect();
        entries.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));
        entries
    }
}

#[async_trait]
impl VoteStore for InMemoryVoteStore {
    async fn votes(&self, change: ChangeId, label: &str) -> Result<VoteSet, VoteStoreError> {
        let votes = self.votes.lock().await;
        Ok(votes
            .get(&(change, label.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn put_votes(
        &self,
        change: ChangeId,
        votes: &[(&str, Vote)],
    ) -> Result<Vec<VoteSet>, VoteStoreError> {
        let mut stored = self.votes.lock().await;
        let snapshots = votes
            .iter()
            .map(|(label, vote)| {
                let set = stored.entry((change, label.to_string())).or_default();
                if let Some(previous) = set.insert(vote.clone()) {
                    trace!(
                        "Change {} label {}: replaced {} vote {}",
                        change, label, previous.voter, previous.value
                    );
                }
                set.clone()
            })
            .collect();
        Ok(snapshots)
    }
}

//! Cast Votes use case
//!
//! Records one reviewer's votes on any number of labels of a change and
//! returns the recomputed evaluation.
//!
//! # Flow
//!
//! ```text
//! CastVotesInput
//!      ↓
//! every label configured?          ── no ──▶ UnknownLabel
//!      ↓
//! every value defined on its label? ── no ──▶ InvalidValue
//!      ↓
//! post-submit guard (all labels)   ── no ──▶ PostSubmit (nothing recorded)
//!      ↓
//! VoteStore::put_votes (all labels at once, replaces the voter's earlier votes)
//!      ↓
//! ChangeEvaluation
//! ```

use super::evaluate_change::ChangeEvaluation;
use super::shared::evaluate_labels;
use crate::ports::permissions::{NoPermissionInfo, PermittedRangeProvider};
use crate::ports::vote_store::{ChangeId, VoteStore, VoteStoreError};
use chrono::{DateTime, Utc};
use labelgate_domain::{
    LabelConfig, LabelTypes, LabelValue, PostSubmitConflict, Vote, Voter, check_post_submit,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while casting votes
#[derive(Error, Debug)]
pub enum CastVotesError {
    #[error("label \"{0}\" is not a configured label")]
    UnknownLabel(String),

    #[error("label \"{label}\": {} is not a valid value", signed(.value))]
    InvalidValue { label: String, value: i16 },

    #[error(transparent)]
    PostSubmit(#[from] PostSubmitConflict),

    #[error("Vote store error: {0}")]
    Store(#[from] VoteStoreError),
}

fn signed(value: &i16) -> String {
    LabelValue::format_value(*value)
}

impl CastVotesError {
    /// Whether this is a conflict the user can resolve (as opposed to a bad request or outage)
    pub fn is_conflict(&self) -> bool {
        matches!(self, CastVotesError::PostSubmit(_))
    }
}

/// Input for the CastVotes use case
#[derive(Debug, Clone)]
pub struct CastVotesInput {
    /// The change being reviewed
    pub change: ChangeId,
    /// Who is voting
    pub voter: Voter,
    /// (label name, value) pairs; a label named twice keeps its last value
    pub votes: Vec<(String, i16)>,
    /// Whether the change has already been submitted
    pub change_submitted: bool,
    /// Timestamp for the recorded votes (defaults to now)
    pub cast_at: Option<DateTime<Utc>>,
}

impl CastVotesInput {
    pub fn new(change: ChangeId, voter: Voter) -> Self {
        Self {
            change,
            voter,
            votes: Vec::new(),
            change_submitted: false,
            cast_at: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>, value: i16) -> Self {
        self.votes.push((label.into(), value));
        self
    }

    pub fn submitted(mut self, submitted: bool) -> Self {
        self.change_submitted = submitted;
        self
    }

    pub fn at(mut self, cast_at: DateTime<Utc>) -> Self {
        self.cast_at = Some(cast_at);
        self
    }
}

/// Use case for casting votes on a change
pub struct CastVotesUseCase<S: VoteStore + 'static> {
    store: Arc<S>,
    permissions: Arc<dyn PermittedRangeProvider>,
}

impl<S: VoteStore + 'static> CastVotesUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            permissions: Arc::new(NoPermissionInfo),
        }
    }

    pub fn with_permissions(mut self, permissions: Arc<dyn PermittedRangeProvider>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        labels: &LabelTypes,
        input: CastVotesInput,
    ) -> Result<ChangeEvaluation, CastVotesError> {
        let requested = Self::resolve(labels, &input.votes)?;

        if let Err(conflict) =
            check_post_submit(requested.iter().map(|(label, _)| *label), input.change_submitted)
        {
            warn!("Change {}: {}", input.change, conflict);
            return Err(conflict.into());
        }

        let cast_at = input.cast_at.unwrap_or_else(Utc::now);
        let votes: Vec<(&str, Vote)> = requested
            .iter()
            .map(|(label, value)| {
                (
                    label.name(),
                    Vote::new(input.voter, *value).with_cast_at(cast_at),
                )
            })
            .collect();

        let snapshots = self.store.put_votes(input.change, &votes).await?;
        for ((label, vote), set) in votes.iter().zip(&snapshots) {
            debug!(
                "Change {}: {} voted {} on {} ({} votes)",
                input.change,
                input.voter,
                LabelValue::format_value(vote.value),
                label,
                set.len()
            );
        }

        let statuses = evaluate_labels(
            self.store.as_ref(),
            self.permissions.as_ref(),
            labels,
            input.change,
        )
        .await?;
        let evaluation = ChangeEvaluation::new(input.change, statuses);

        info!(
            "Change {}: recorded {} vote(s) from {}; {}",
            input.change,
            requested.len(),
            input.voter,
            evaluation.verdict
        );
        Ok(evaluation)
    }

    /// Resolve requested votes against the configuration, keeping first-mention
    /// order and the last value of a repeated label.
    fn resolve<'a>(
        labels: &'a LabelTypes,
        votes: &[(String, i16)],
    ) -> Result<Vec<(&'a LabelConfig, i16)>, CastVotesError> {
        let mut requested: Vec<(&LabelConfig, i16)> = Vec::with_capacity(votes.len());

        for (name, value) in votes {
            let label = labels
                .get(name)
                .ok_or_else(|| CastVotesError::UnknownLabel(name.clone()))?;

            if !label.is_value_defined(*value) {
                return Err(CastVotesError::InvalidValue {
                    label: name.clone(),
                    value: *value,
                });
            }

            match requested
                .iter_mut()
                .find(|(existing, _)| existing.name() == label.name())
            {
                Some(entry) => entry.1 = *value,
                None => requested.push((label, *value)),
            }
        }

        Ok(requested)
    }
}

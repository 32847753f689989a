//! Shared utilities for use cases.
//!
//! Loading and evaluating every label of a change is common to
//! EvaluateChange and CastVotes.

use crate::ports::permissions::PermittedRangeProvider;
use crate::ports::vote_store::{ChangeId, VoteStore, VoteStoreError};
use futures::future::try_join_all;
use labelgate_domain::{LabelStatuses, LabelTypes, evaluate, evaluate_with_permitted};
use tracing::trace;

/// Load the vote set of every configured label concurrently and evaluate them
/// in definition order.
pub(crate) async fn evaluate_labels(
    store: &dyn VoteStore,
    permissions: &dyn PermittedRangeProvider,
    labels: &LabelTypes,
    change: ChangeId,
) -> Result<LabelStatuses, VoteStoreError> {
    let vote_sets = try_join_all(labels.iter().map(|label| store.votes(change, label.name()))).await?;

    Ok(labels
        .iter()
        .zip(vote_sets.iter())
        .map(|(label, votes)| {
            let status = match permissions.permitted_range(change, label) {
                Some(range) => evaluate_with_permitted(label, votes, range),
                None => evaluate(label, votes),
            };
            trace!(
                "Change {} label {}: {} ({} votes)",
                change,
                label.name(),
                status,
                votes.len()
            );
            (label.name(), status)
        })
        .collect())
}

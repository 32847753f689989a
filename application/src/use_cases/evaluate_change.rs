//! Evaluate Change use case
//!
//! Computes every label status of a change and the resulting submit verdict.

use super::shared::evaluate_labels;
use crate::ports::permissions::{NoPermissionInfo, PermittedRangeProvider};
use crate::ports::vote_store::{ChangeId, VoteStore, VoteStoreError};
use labelgate_domain::{LabelStatuses, LabelTypes, SubmitVerdict, can_submit};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while evaluating a change
#[derive(Error, Debug)]
pub enum EvaluateChangeError {
    #[error("Vote store error: {0}")]
    Store(#[from] VoteStoreError),
}

/// Label statuses of a change together with its submit verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvaluation {
    pub change: ChangeId,
    pub statuses: LabelStatuses,
    pub verdict: SubmitVerdict,
}

impl ChangeEvaluation {
    pub fn new(change: ChangeId, statuses: LabelStatuses) -> Self {
        let verdict = can_submit(&statuses);
        Self {
            change,
            statuses,
            verdict,
        }
    }
}

/// Use case for evaluating all labels of a change
pub struct EvaluateChangeUseCase<S: VoteStore + 'static> {
    store: Arc<S>,
    permissions: Arc<dyn PermittedRangeProvider>,
}

impl<S: VoteStore + 'static> EvaluateChangeUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            permissions: Arc::new(NoPermissionInfo),
        }
    }

    /// Use a permission provider to flag labels nobody can satisfy
    pub fn with_permissions(mut self, permissions: Arc<dyn PermittedRangeProvider>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        labels: &LabelTypes,
        change: ChangeId,
    ) -> Result<ChangeEvaluation, EvaluateChangeError> {
        let statuses =
            evaluate_labels(self.store.as_ref(), self.permissions.as_ref(), labels, change).await?;
        let evaluation = ChangeEvaluation::new(change, statuses);

        info!("Change {}: {}", change, evaluation.verdict);
        Ok(evaluation)
    }
}

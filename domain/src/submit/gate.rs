//! Submit gate
//!
//! Combines the statuses of all labels of a change into one verdict.

use crate::evaluation::LabelStatuses;
use serde::Serialize;
use tracing::debug;

/// Whether a change may be submitted, and which labels prevent it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitVerdict {
    /// True iff no label is blocking
    pub ok: bool,
    /// Blocking labels, in label-definition order
    pub blocking_labels: Vec<String>,
}

impl std::fmt::Display for SubmitVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ok {
            write!(f, "submittable")
        } else {
            write!(f, "blocked by: {}", self.blocking_labels.join(", "))
        }
    }
}

/// Decide whether the change whose label statuses are given may be submitted
///
/// ```
/// use labelgate_domain::{LabelStatus, LabelStatuses, can_submit};
///
/// let statuses: LabelStatuses = [
///     ("Code-Review", LabelStatus { has_votes: true, approved: true, ..Default::default() }),
///     ("Verified", LabelStatus { has_votes: true, rejected: true, blocking: true, ..Default::default() }),
/// ]
/// .into_iter()
/// .collect();
///
/// let verdict = can_submit(&statuses);
/// assert!(!verdict.ok);
/// assert_eq!(verdict.blocking_labels, vec!["Verified"]);
/// ```
pub fn can_submit(statuses: &LabelStatuses) -> SubmitVerdict {
    let blocking_labels: Vec<String> = statuses
        .iter()
        .filter(|(_, status)| status.blocking)
        .map(|(label, _)| {
            debug!("Label {} blocks submission", label);
            label.to_string()
        })
        .collect();

    SubmitVerdict {
        ok: blocking_labels.is_empty(),
        blocking_labels,
    }
}

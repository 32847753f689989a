//! Post-submit voting guard
//!
//! Once a change has been submitted, only labels that allow post-submit
//! voting accept further votes. The guard is consulted before any vote is
//! recorded and never mutates anything itself.

use crate::label::LabelConfig;
use thiserror::Error;

/// A vote attempt on labels that forbid voting after submit
///
/// Carries every offending label, in request order, so the caller can report
/// them all at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Voting on labels disallowed after submit: {}", .labels.join(", "))]
pub struct PostSubmitConflict {
    pub labels: Vec<String>,
}

/// Whether a vote on `config` may be accepted
///
/// Always true while the change is open; after submit, true only for labels
/// with `allow_post_submit`.
pub fn authorize_vote(config: &LabelConfig, change_is_submitted: bool) -> bool {
    !change_is_submitted || config.allow_post_submit()
}

/// Guard all labels of one review at once
///
/// ```
/// use labelgate_domain::{LabelConfig, check_post_submit};
///
/// let locked = LabelConfig::code_review().with_allow_post_submit(false);
///
/// assert!(check_post_submit([&locked], false).is_ok());
///
/// let conflict = check_post_submit([&locked], true).unwrap_err();
/// assert_eq!(
///     conflict.to_string(),
///     "Voting on labels disallowed after submit: Code-Review"
/// );
/// ```
pub fn check_post_submit<'a>(
    labels: impl IntoIterator<Item = &'a LabelConfig>,
    change_is_submitted: bool,
) -> Result<(), PostSubmitConflict> {
    let disallowed: Vec<String> = labels
        .into_iter()
        .filter(|label| !authorize_vote(label, change_is_submitted))
        .map(|label| label.name().to_string())
        .collect();

    if disallowed.is_empty() {
        Ok(())
    } else {
        Err(PostSubmitConflict { labels: disallowed })
    }
}

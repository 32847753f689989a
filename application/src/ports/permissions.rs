//! Permission lookup port
//!
//! Supplies the permitted vote range of a label so the evaluator can flag
//! labels that no eligible voter can satisfy. Enforcing who may cast which
//! value stays with the permission layer itself.

use super::vote_store::ChangeId;
use labelgate_domain::{LabelConfig, PermittedRange};

/// Port for looking up the widest range any eligible voter may cast
pub trait PermittedRangeProvider: Send + Sync {
    /// `None` when the provider has no opinion about this label
    fn permitted_range(&self, change: ChangeId, label: &LabelConfig) -> Option<PermittedRange>;
}

/// Provider with no opinion about any label
pub struct NoPermissionInfo;

impl PermittedRangeProvider for NoPermissionInfo {
    fn permitted_range(&self, _change: ChangeId, _label: &LabelConfig) -> Option<PermittedRange> {
        None
    }
}

//! Permitted ranges read from the `[permissions]` table

use labelgate_application::{ChangeId, PermittedRangeProvider};
use labelgate_domain::{LabelConfig, PermittedRange};
use std::collections::BTreeMap;

/// Fixed per-label ranges that apply to every change
#[derive(Debug, Clone, Default)]
pub struct StaticPermittedRanges {
    ranges: BTreeMap<String, PermittedRange>,
}

impl StaticPermittedRanges {
    pub fn new(ranges: BTreeMap<String, PermittedRange>) -> Self {
        Self { ranges }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl PermittedRangeProvider for StaticPermittedRanges {
    fn permitted_range(&self, _change: ChangeId, label: &LabelConfig) -> Option<PermittedRange> {
        self.ranges.get(label.name()).copied()
    }
}

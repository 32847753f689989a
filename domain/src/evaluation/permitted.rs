//! Permitted vote range supplied by the permission layer

use crate::label::LabelValue;
use serde::{Deserialize, Serialize};

/// The widest range of values any eligible voter may currently cast on a label
///
/// Computing this belongs to the permission layer; the evaluator only
/// consumes it to decide whether a label is impossible to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermittedRange {
    pub min: i16,
    pub max: i16,
}

impl PermittedRange {
    /// Nobody may cast anything other than "no score"
    pub const NONE: PermittedRange = PermittedRange { min: 0, max: 0 };

    pub fn new(min: i16, max: i16) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i16) -> bool {
        self.min <= value && value <= self.max
    }
}

impl std::fmt::Display for PermittedRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}",
            LabelValue::format_value(self.min),
            LabelValue::format_value(self.max)
        )
    }
}

impl std::str::FromStr for PermittedRange {
    type Err = String;

    /// Parse `"-1..+1"` (signs optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = s
            .trim()
            .split_once("..")
            .ok_or_else(|| format!("Invalid range: {}. Expected MIN..MAX", s))?;

        let parse = |part: &str| -> Result<i16, String> {
            let part = part.trim();
            part.strip_prefix('+')
                .unwrap_or(part)
                .parse()
                .map_err(|_| format!("Invalid range bound '{}' in {}", part, s))
        };

        let (min, max) = (parse(min)?, parse(max)?);
        if min > max {
            return Err(format!("Invalid range: {} (min above max)", s));
        }
        Ok(Self { min, max })
    }
}

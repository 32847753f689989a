//! Label evaluation functions
//!
//! A label's function decides how its votes translate into approval and
//! blocking. The set of functions is closed; the per-function behavior lives
//! in a single decision table in [`crate::evaluation::evaluator`].

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Function used to evaluate the votes on a label
///
/// - `MaxWithBlock`: the maximum value approves, the minimum value blocks (default)
/// - `AnyWithBlock`: the maximum value approves, any negative value blocks
/// - `MaxNoBlock`: the maximum value approves, nothing blocks
/// - `NoBlock`: votes are reported but never block
/// - `NoOp`: votes are recorded for information only
///
/// # Example
///
/// ```
/// use labelgate_domain::LabelFunction;
///
/// let function: LabelFunction = "AnyWithBlock".parse().unwrap();
/// assert!(function.is_blocking());
///
/// // An unset function falls back to MaxWithBlock
/// assert_eq!(LabelFunction::parse_or_default(""), Ok(LabelFunction::MaxWithBlock));
/// assert!("MaxWithVeto".parse::<LabelFunction>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelFunction {
    /// The maximum value approves; the minimum value blocks submission
    #[default]
    MaxWithBlock,

    /// The maximum value approves; any negative value blocks submission
    AnyWithBlock,

    /// The maximum value approves; no value blocks submission
    MaxNoBlock,

    /// Negative values are reported as rejections but never block
    NoBlock,

    /// Informational only; never affects submittability
    NoOp,
}

impl LabelFunction {
    /// All functions, in declaration order
    pub const ALL: [LabelFunction; 5] = [
        LabelFunction::MaxWithBlock,
        LabelFunction::AnyWithBlock,
        LabelFunction::MaxNoBlock,
        LabelFunction::NoBlock,
        LabelFunction::NoOp,
    ];

    /// Canonical configuration name of this function
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelFunction::MaxWithBlock => "MaxWithBlock",
            LabelFunction::AnyWithBlock => "AnyWithBlock",
            LabelFunction::MaxNoBlock => "MaxNoBlock",
            LabelFunction::NoBlock => "NoBlock",
            LabelFunction::NoOp => "NoOp",
        }
    }

    /// Whether votes under this function can ever block submission
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            LabelFunction::MaxWithBlock | LabelFunction::AnyWithBlock
        )
    }

    /// Whether this function needs a maximum vote for the label to count as satisfied
    pub fn requires_max(&self) -> bool {
        matches!(self, LabelFunction::MaxWithBlock | LabelFunction::MaxNoBlock)
    }

    /// Whether this function reports approval and recommendation at all
    pub fn reports_approval(&self) -> bool {
        !matches!(self, LabelFunction::NoOp)
    }

    /// Parse a configured function name, treating an empty value as unset
    ///
    /// Unset functions default to [`LabelFunction::MaxWithBlock`]; any other
    /// unrecognized name is an error.
    pub fn parse_or_default(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(LabelFunction::default());
        }
        s.parse()
    }

    /// Human-readable description of the function's effect
    pub fn description(&self) -> &'static str {
        match self {
            LabelFunction::MaxWithBlock => "max approves, min blocks",
            LabelFunction::AnyWithBlock => "max approves, any negative blocks",
            LabelFunction::MaxNoBlock => "max approves, never blocks",
            LabelFunction::NoBlock => "never blocks",
            LabelFunction::NoOp => "informational only",
        }
    }
}

impl std::fmt::Display for LabelFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LabelFunction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelFunction::ALL
            .into_iter()
            .find(|function| function.as_str() == s.trim())
            .ok_or_else(|| DomainError::UnknownFunction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_functions() {
        for function in LabelFunction::ALL {
            assert_eq!(function.as_str().parse::<LabelFunction>(), Ok(function));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("maxwithblock".parse::<LabelFunction>().is_err());
        assert!("NOOP".parse::<LabelFunction>().is_err());
    }

    #[test]
    fn test_parse_unknown_function() {
        assert_eq!(
            "PatchSetLock".parse::<LabelFunction>(),
            Err(DomainError::UnknownFunction("PatchSetLock".to_string()))
        );
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(
            LabelFunction::parse_or_default(""),
            Ok(LabelFunction::MaxWithBlock)
        );
        assert_eq!(
            LabelFunction::parse_or_default("   "),
            Ok(LabelFunction::MaxWithBlock)
        );
        assert_eq!(
            LabelFunction::parse_or_default("NoOp"),
            Ok(LabelFunction::NoOp)
        );
        assert!(LabelFunction::parse_or_default("Bogus").is_err());
    }

    #[test]
    fn test_blocking_functions() {
        assert!(LabelFunction::MaxWithBlock.is_blocking());
        assert!(LabelFunction::AnyWithBlock.is_blocking());
        assert!(!LabelFunction::MaxNoBlock.is_blocking());
        assert!(!LabelFunction::NoBlock.is_blocking());
        assert!(!LabelFunction::NoOp.is_blocking());
    }

    #[test]
    fn test_display() {
        assert_eq!(LabelFunction::MaxNoBlock.to_string(), "MaxNoBlock");
    }

    #[test]
    fn test_default() {
        assert_eq!(LabelFunction::default(), LabelFunction::MaxWithBlock);
    }
}

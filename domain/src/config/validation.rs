//! Label configuration validation.
//!
//! Configuration loading reports problems as structured [`ConfigIssue`]s.
//! `Error` issues make the configuration unusable; `Warning` issues describe
//! a label that works but can never reach some state.
//!
//! # Examples
//!
//! ```
//! use labelgate_domain::{LabelConfig, validate_label};
//!
//! let issues = validate_label(&LabelConfig::code_review());
//! assert!(issues.is_empty());
//! ```

use crate::label::LabelConfig;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot be used.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// The label definition itself is malformed (name, values).
    InvalidLabel { label: String },
    /// The label names a function outside the known set.
    UnknownFunction { label: String, value: String },
    /// Two labels share a name.
    DuplicateLabel { label: String },
    /// The function needs the maximum value but the label has no positive value.
    NeverApprovable { label: String },
    /// The function can block but the label has no negative value.
    NeverBlocks { label: String },
    /// A string setting holds an unrecognized value.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

/// Returns true if any issue is an error.
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(ConfigIssue::is_error)
}

/// Check a well-formed label for states its function can never reach.
pub fn validate_label(label: &LabelConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    let function = label.function();

    if function.requires_max() && label.max() == 0 {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::NeverApprovable {
                label: label.name().to_string(),
            },
            format!(
                "label {} uses {} but has no positive value, so it can never be approved",
                label.name(),
                function
            ),
        ));
    }

    if function.is_blocking() && label.min() == 0 {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::NeverBlocks {
                label: label.name().to_string(),
            },
            format!(
                "label {} uses {} but has no negative value, so it can never block",
                label.name(),
                function
            ),
        ));
    }

    issues
}

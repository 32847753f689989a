//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All of these describe a label configuration that can never be evaluated
/// and are raised while building [`LabelConfig`](crate::LabelConfig) values,
/// never during evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid label name: '{0}'")]
    InvalidLabelName(String),

    #[error("Label {0} has no values")]
    EmptyValues(String),

    #[error("Label {0} must define the value 0")]
    MissingZeroValue(String),

    #[error("Label {label} defines value {value} more than once")]
    DuplicateValue { label: String, value: i16 },

    #[error("Invalid label value: '{0}'")]
    InvalidLabelValue(String),

    #[error("Unknown label function: '{0}'")]
    UnknownFunction(String),

    #[error("Label {0} is defined more than once")]
    DuplicateLabel(String),
}

impl DomainError {
    /// Name of the label the error refers to, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            DomainError::InvalidLabelName(name)
            | DomainError::EmptyValues(name)
            | DomainError::MissingZeroValue(name)
            | DomainError::DuplicateLabel(name) => Some(name),
            DomainError::DuplicateValue { label, .. } => Some(label),
            DomainError::InvalidLabelValue(_) | DomainError::UnknownFunction(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_function_display() {
        let error = DomainError::UnknownFunction("MaxWithVeto".to_string());
        assert_eq!(error.to_string(), "Unknown label function: 'MaxWithVeto'");
    }

    #[test]
    fn test_label_accessor() {
        assert_eq!(
            DomainError::MissingZeroValue("Verified".to_string()).label(),
            Some("Verified")
        );
        assert_eq!(
            DomainError::DuplicateValue {
                label: "Code-Review".to_string(),
                value: 1
            }
            .label(),
            Some("Code-Review")
        );
        assert_eq!(DomainError::UnknownFunction("x".to_string()).label(), None);
    }
}

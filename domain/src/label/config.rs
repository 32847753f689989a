//! Label configuration

use super::function::LabelFunction;
use super::value::LabelValue;
use crate::core::error::DomainError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Immutable description of one review label
///
/// A label always defines the value `0`, so `min() <= 0 <= max()` holds for
/// every constructed configuration.
///
/// # Example
///
/// ```
/// use labelgate_domain::{LabelConfig, LabelFunction, LabelValue};
///
/// let verified = LabelConfig::new(
///     "Verified",
///     [
///         LabelValue::new(1, "Verified"),
///         LabelValue::new(0, "No score"),
///         LabelValue::new(-1, "Fails"),
///     ],
/// )
/// .unwrap()
/// .with_function(LabelFunction::AnyWithBlock);
///
/// assert_eq!(verified.max(), 1);
/// assert_eq!(verified.min(), -1);
/// assert!(verified.allow_post_submit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelConfig {
    name: String,
    values: BTreeMap<i16, String>,
    function: LabelFunction,
    allow_post_submit: bool,
}

impl LabelConfig {
    /// Create a label with the default function and post-submit voting allowed
    pub fn new(
        name: impl Into<String>,
        values: impl IntoIterator<Item = LabelValue>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        check_name(&name)?;

        let mut map = BTreeMap::new();
        for value in values {
            if map.insert(value.value, value.text).is_some() {
                return Err(DomainError::DuplicateValue {
                    label: name,
                    value: value.value,
                });
            }
        }

        if map.is_empty() {
            return Err(DomainError::EmptyValues(name));
        }
        if !map.contains_key(&0) {
            return Err(DomainError::MissingZeroValue(name));
        }

        Ok(Self {
            name,
            values: map,
            function: LabelFunction::default(),
            allow_post_submit: true,
        })
    }

    /// The stock `Code-Review` label (-2..+2, `MaxWithBlock`)
    pub fn code_review() -> Self {
        Self {
            name: "Code-Review".to_string(),
            values: BTreeMap::from([
                (-2, "This shall not be merged".to_string()),
                (-1, "I would prefer this is not merged as is".to_string()),
                (0, "No score".to_string()),
                (1, "Looks good to me, but someone else must approve".to_string()),
                (2, "Looks good to me, approved".to_string()),
            ]),
            function: LabelFunction::MaxWithBlock,
            allow_post_submit: true,
        }
    }

    /// Set the evaluation function
    pub fn with_function(mut self, function: LabelFunction) -> Self {
        self.function = function;
        self
    }

    /// Set whether votes are accepted after the change is submitted
    pub fn with_allow_post_submit(mut self, allow: bool) -> Self {
        self.allow_post_submit = allow;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function(&self) -> LabelFunction {
        self.function
    }

    pub fn allow_post_submit(&self) -> bool {
        self.allow_post_submit
    }

    /// Highest defined value
    pub fn max(&self) -> i16 {
        self.values.keys().next_back().copied().unwrap_or(0)
    }

    /// Lowest defined value
    pub fn min(&self) -> i16 {
        self.values.keys().next().copied().unwrap_or(0)
    }

    /// Defined values, lowest first
    pub fn values(&self) -> impl DoubleEndedIterator<Item = LabelValue> + '_ {
        self.values
            .iter()
            .map(|(value, text)| LabelValue::new(*value, text.clone()))
    }

    /// Description of a value, if the label defines it
    pub fn value_text(&self, value: i16) -> Option<&str> {
        self.values.get(&value).map(String::as_str)
    }

    pub fn is_value_defined(&self, value: i16) -> bool {
        self.values.contains_key(&value)
    }

    /// Range in display form, e.g. `"-2..+2"`
    pub fn range(&self) -> String {
        format!(
            "{}..{}",
            LabelValue::format_value(self.min()),
            LabelValue::format_value(self.max())
        )
    }
}

/// Label names are ASCII letters, digits and `-`, not starting with `-`
fn check_name(name: &str) -> Result<(), DomainError> {
    let valid = !name.is_empty()
        && !name.starts_with('-')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidLabelName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(range: &[i16]) -> Vec<LabelValue> {
        range
            .iter()
            .map(|v| LabelValue::new(*v, format!("value {}", v)))
            .collect()
    }

    #[test]
    fn test_min_max() {
        let label = LabelConfig::new("Custom", values(&[1, 0, -1])).unwrap();
        assert_eq!(label.min(), -1);
        assert_eq!(label.max(), 1);
        assert_eq!(label.range(), "-1..+1");
    }

    #[test]
    fn test_non_negative_range() {
        let label = LabelConfig::new("CustomLabel2", values(&[1, 0])).unwrap();
        assert_eq!(label.min(), 0);
        assert_eq!(label.max(), 1);
        assert_eq!(label.range(), "0..+1");
    }

    #[test]
    fn test_defaults() {
        let label = LabelConfig::new("Custom", values(&[0])).unwrap();
        assert_eq!(label.function(), LabelFunction::MaxWithBlock);
        assert!(label.allow_post_submit());
    }

    #[test]
    fn test_builders() {
        let label = LabelConfig::new("Custom", values(&[0, 1]))
            .unwrap()
            .with_function(LabelFunction::NoOp)
            .with_allow_post_submit(false);
        assert_eq!(label.function(), LabelFunction::NoOp);
        assert!(!label.allow_post_submit());
    }

    #[test]
    fn test_missing_zero() {
        assert_eq!(
            LabelConfig::new("Custom", values(&[1, -1])),
            Err(DomainError::MissingZeroValue("Custom".to_string()))
        );
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(
            LabelConfig::new("Custom", Vec::new()),
            Err(DomainError::EmptyValues("Custom".to_string()))
        );
    }

    #[test]
    fn test_duplicate_value() {
        let err = LabelConfig::new("Custom", values(&[0, 1, 1])).unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateValue {
                label: "Custom".to_string(),
                value: 1
            }
        );
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "-Leading", "Has Space", "Under_score", "Ümlaut"] {
            assert!(
                LabelConfig::new(name, values(&[0])).is_err(),
                "expected '{}' to be rejected",
                name
            );
        }
        assert!(LabelConfig::new("Code-Review2", values(&[0])).is_ok());
    }

    #[test]
    fn test_values_are_ordered() {
        let label = LabelConfig::new("Custom", values(&[2, -2, 0, 1, -1])).unwrap();
        let ordered: Vec<i16> = label.values().map(|v| v.value).collect();
        assert_eq!(ordered, vec![-2, -1, 0, 1, 2]);
        assert_eq!(label.value_text(1), Some("value 1"));
        assert!(!label.is_value_defined(3));
    }

    #[test]
    fn test_code_review() {
        let label = LabelConfig::code_review();
        assert_eq!(label.name(), "Code-Review");
        assert_eq!(label.range(), "-2..+2");
        assert_eq!(label.function(), LabelFunction::MaxWithBlock);
    }
}

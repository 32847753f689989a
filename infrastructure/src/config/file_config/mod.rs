//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod label;
mod logging;
mod output;

pub use label::FileLabelConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;

use super::error::ConfigLoadError;
use labelgate_domain::{
    ConfigIssue, ConfigIssueCode, LabelTypes, PermittedRange, has_errors,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Label definitions in evaluation order (`[[label]]`)
    ///
    /// A file that defines any label replaces the built-in Code-Review label.
    #[serde(rename = "label")]
    pub labels: Vec<FileLabelConfig>,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
    /// Widest range any eligible voter may cast, per label (`"-1..+1"`)
    pub permissions: BTreeMap<String, String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            labels: vec![FileLabelConfig::code_review()],
            output: FileOutputConfig::default(),
            logging: FileLoggingConfig::default(),
            permissions: BTreeMap::new(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Each label definition (name, values, function, unreachable states)
    /// 2. Duplicate label names
    /// 3. Permission ranges and the labels they refer to
    /// 4. The logging level
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for label in &self.labels {
            issues.extend(label.parse().1);
            if !seen.insert(label.name.as_str()) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateLabel {
                        label: label.name.clone(),
                    },
                    format!("label {} is defined more than once", label.name),
                ));
            }
        }

        issues.extend(self.parse_permissions().1);
        issues.extend(self.logging.parse_level().1);

        issues
    }

    /// Build the label set, failing if any definition has an error
    pub fn label_types(&self) -> Result<LabelTypes, ConfigLoadError> {
        let issues = self.validate();
        if has_errors(&issues) {
            return Err(ConfigLoadError::Invalid(issues));
        }

        let labels = self.labels.iter().filter_map(|l| l.parse().0).collect();
        LabelTypes::new(labels).map_err(|e| {
            ConfigLoadError::Invalid(vec![ConfigIssue::error(
                ConfigIssueCode::DuplicateLabel {
                    label: e.label().unwrap_or_default().to_string(),
                },
                e.to_string(),
            )])
        })
    }

    /// Parse the `[permissions]` table, skipping malformed ranges
    pub fn parse_permissions(&self) -> (BTreeMap<String, PermittedRange>, Vec<ConfigIssue>) {
        let mut ranges = BTreeMap::new();
        let mut issues = Vec::new();

        for (label, raw) in &self.permissions {
            match raw.parse::<PermittedRange>() {
                Ok(range) => {
                    ranges.insert(label.clone(), range);
                }
                Err(e) => issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidEnumValue {
                        field: format!("permissions.{}", label),
                        value: raw.clone(),
                        valid_values: vec!["<min>..<max>".to_string()],
                    },
                    format!("permissions.{}: {}", label, e),
                )),
            }

            if !self.labels.iter().any(|l| &l.name == label) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidLabel {
                        label: label.clone(),
                    },
                    format!("permissions.{}: no such label is defined", label),
                ));
            }
        }

        (ranges, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelgate_domain::LabelFunction;

    fn parse(toml_str: &str) -> FileConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_default_has_code_review() {
        let config = FileConfig::default();
        let labels = config.label_types().unwrap();
        assert_eq!(labels.names().collect::<Vec<_>>(), vec!["Code-Review"]);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_labels_keep_file_order() {
        let config = parse(
            r#"
[[label]]
name = "Verified"
function = "NoBlock"
values = ["-1 Fails", "0 No score", "+1 Verified"]

[[label]]
name = "Code-Review"
values = ["-2 No", "-1 Hmm", "0 No score", "+1 Ok", "+2 Approved"]
"#,
        );

        let labels = config.label_types().unwrap();
        assert_eq!(
            labels.names().collect::<Vec<_>>(),
            vec!["Verified", "Code-Review"]
        );
        assert_eq!(
            labels.get("Verified").unwrap().function(),
            LabelFunction::NoBlock
        );
    }

    #[test]
    fn test_duplicate_label_is_error() {
        let config = parse(
            r#"
[[label]]
name = "Custom"
values = ["0 Meh", "+1 Yes"]

[[label]]
name = "Custom"
values = ["0 Meh", "+1 Yes"]
"#,
        );

        let issues = config.validate();
        assert!(has_errors(&issues));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::DuplicateLabel { label } if label == "Custom"
        )));
        assert!(matches!(
            config.label_types(),
            Err(ConfigLoadError::Invalid(_))
        ));
    }

    #[test]
    fn test_invalid_label_reported_with_others() {
        let config = parse(
            r#"
[[label]]
name = "Bad"
function = "Bogus"
values = ["0 Meh"]

[[label]]
name = "AlsoBad"
values = ["+1 Yes"]
"#,
        );

        let errors: Vec<_> = config
            .validate()
            .into_iter()
            .filter(ConfigIssue::is_error)
            .collect();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_warnings_do_not_fail_label_types() {
        let config = parse(
            r#"
[[label]]
name = "Custom"
values = ["0 Meh", "+1 Yes"]
"#,
        );

        let issues = config.validate();
        assert!(!issues.is_empty());
        assert!(!has_errors(&issues));
        assert!(config.label_types().is_ok());
    }

    #[test]
    fn test_permissions() {
        let config = parse(
            r#"
[permissions]
Code-Review = "-1..+1"
Verified = "0..+1"
"#,
        );

        let (ranges, issues) = config.parse_permissions();
        assert_eq!(ranges.get("Code-Review"), Some(&PermittedRange::new(-1, 1)));
        // Verified is not defined, which only warns
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_malformed_permission_is_error() {
        let config = parse(
            r#"
[permissions]
Code-Review = "+2..-2"
"#,
        );

        let (ranges, issues) = config.parse_permissions();
        assert!(ranges.is_empty());
        assert!(has_errors(&issues));
    }
}

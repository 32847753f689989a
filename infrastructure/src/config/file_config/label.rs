//! Label definitions (`[[label]]` tables)

use labelgate_domain::{
    ConfigIssue, ConfigIssueCode, LabelConfig, LabelFunction, LabelValue, validate_label,
};
use serde::{Deserialize, Serialize};

/// Raw label definition from TOML
///
/// ```toml
/// [[label]]
/// name = "Verified"
/// function = "MaxNoBlock"
/// values = ["-1 Fails", "0 No score", "+1 Verified"]
/// allow_post_submit = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLabelConfig {
    pub name: String,
    /// Function name; empty or absent selects `MaxWithBlock`
    #[serde(default)]
    pub function: String,
    /// Values in `"<signed int> <text>"` form
    pub values: Vec<String>,
    #[serde(default = "default_allow_post_submit")]
    pub allow_post_submit: bool,
}

fn default_allow_post_submit() -> bool {
    true
}

impl FileLabelConfig {
    /// The stock Code-Review label in its file form
    pub fn code_review() -> Self {
        let label = LabelConfig::code_review();
        Self {
            name: label.name().to_string(),
            function: label.function().to_string(),
            values: label.values().rev().map(|v| v.to_string()).collect(),
            allow_post_submit: label.allow_post_submit(),
        }
    }

    /// Parse into a domain label, collecting every issue found.
    ///
    /// Returns `None` when the definition has an error. Warnings from
    /// [`validate_label`] are returned alongside a parsed label.
    pub fn parse(&self) -> (Option<LabelConfig>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let function = match LabelFunction::parse_or_default(&self.function) {
            Ok(function) => Some(function),
            Err(_) => {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::UnknownFunction {
                        label: self.name.clone(),
                        value: self.function.clone(),
                    },
                    format!(
                        "label {}: unknown function '{}'. Valid values: {}",
                        self.name,
                        self.function,
                        LabelFunction::ALL
                            .iter()
                            .map(|f| f.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                ));
                None
            }
        };

        let mut values = Vec::with_capacity(self.values.len());
        for raw in &self.values {
            match raw.parse::<LabelValue>() {
                Ok(value) => values.push(value),
                Err(e) => issues.push(invalid_label(&self.name, e.to_string())),
            }
        }

        if !issues.is_empty() {
            return (None, issues);
        }

        match LabelConfig::new(self.name.as_str(), values) {
            Ok(label) => {
                let label = label
                    .with_function(function.unwrap_or_default())
                    .with_allow_post_submit(self.allow_post_submit);
                issues.extend(validate_label(&label));
                (Some(label), issues)
            }
            Err(e) => {
                issues.push(invalid_label(&self.name, e.to_string()));
                (None, issues)
            }
        }
    }
}

fn invalid_label(label: &str, message: String) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::InvalidLabel {
            label: label.to_string(),
        },
        message,
    )
}

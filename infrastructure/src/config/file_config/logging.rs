//! Logging configuration from TOML (`[logging]` section)

use labelgate_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Raw logging configuration from TOML
///
/// `-v` on the command line and `RUST_LOG` take precedence over `level`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Default log level when neither `-v` nor `RUST_LOG` is given
    pub level: Option<String>,
    /// Also write daily-rotated log files into this directory
    pub directory: Option<PathBuf>,
}

impl FileLoggingConfig {
    /// Parse the configured level, warning on anything tracing would not accept
    pub fn parse_level(&self) -> (Option<String>, Vec<ConfigIssue>) {
        let Some(level) = &self.level else {
            return (None, Vec::new());
        };

        let normalized = level.trim().to_lowercase();
        if VALID_LEVELS.contains(&normalized.as_str()) {
            (Some(normalized), Vec::new())
        } else {
            (
                None,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "logging.level".to_string(),
                        value: level.clone(),
                        valid_values: VALID_LEVELS.iter().map(|s| s.to_string()).collect(),
                    },
                    format!(
                        "logging.level: unknown level '{}', falling back to the default",
                        level
                    ),
                )],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_normalizes() {
        let config = FileLoggingConfig {
            level: Some(" DEBUG ".to_string()),
            directory: None,
        };
        let (level, issues) = config.parse_level();
        assert_eq!(level.as_deref(), Some("debug"));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_parse_level_unknown_warns() {
        let config = FileLoggingConfig {
            level: Some("loud".to_string()),
            directory: None,
        };
        let (level, issues) = config.parse_level();
        assert!(level.is_none());
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_logging_deserialize() {
        let toml_str = r#"
[logging]
level = "info"
directory = "/var/log/labelgate"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("info"));
        assert_eq!(
            config.logging.directory,
            Some(PathBuf::from("/var/log/labelgate"))
        );
    }
}

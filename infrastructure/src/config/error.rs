//! Errors raised while turning configuration files into domain types

use labelgate_domain::ConfigIssue;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Invalid label configuration: {}", join_issues(.0))]
    Invalid(Vec<ConfigIssue>),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize votes: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{}: vote {index}: {message}", .path.display())]
    InvalidVote {
        path: PathBuf,
        index: usize,
        message: String,
    },
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .filter(|issue| issue.is_error())
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

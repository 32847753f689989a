//! Votes file (`[[vote]]` tables)
//!
//! ```toml
//! [[vote]]
//! change = 1
//! label = "Code-Review"
//! voter = 1000                        # omit for the internal user
//! value = 2
//! cast_at = "2024-05-01T12:00:00Z"    # optional, RFC 3339
//! ```

use crate::config::ConfigLoadError;
use chrono::{DateTime, Utc};
use labelgate_application::ChangeId;
use labelgate_domain::{AccountId, LabelTypes, LabelValue, Vote, VoteSet, Voter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One recorded vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileVote {
    pub change: ChangeId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voter: Option<AccountId>,
    pub value: i16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast_at: Option<DateTime<Utc>>,
}

impl FileVote {
    fn voter(&self) -> Voter {
        self.voter.map(Voter::from).unwrap_or(Voter::Internal)
    }

    fn to_vote(&self) -> Vote {
        let vote = Vote::new(self.voter(), self.value);
        match self.cast_at {
            Some(at) => vote.with_cast_at(at),
            None => vote,
        }
    }
}

/// Contents of a votes file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotesFile {
    #[serde(default, rename = "vote")]
    pub votes: Vec<FileVote>,
}

impl VotesFile {
    /// Read a votes file; a missing file holds no votes
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        if !path.exists() {
            debug!("Votes file {} does not exist, starting empty", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: Self = toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded {} votes from {}", file.votes.len(), path.display());
        Ok(file)
    }

    /// Write the votes back, replacing the file
    pub fn save(&self, path: &Path) -> Result<(), ConfigLoadError> {
        let contents = toml::to_string(self)?;
        std::fs::write(path, contents).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Wrote {} votes to {}", self.votes.len(), path.display());
        Ok(())
    }

    /// Check every vote against the configured labels and convert them
    ///
    /// Votes on unknown labels or with values the label does not define are
    /// rejected, since the evaluator assumes stored values are in range.
    pub fn to_votes(
        &self,
        labels: &LabelTypes,
        path: &Path,
    ) -> Result<Vec<(ChangeId, String, Vote)>, ConfigLoadError> {
        self.votes
            .iter()
            .enumerate()
            .map(|(index, vote)| {
                let invalid = |message: String| ConfigLoadError::InvalidVote {
                    path: path.to_path_buf(),
                    index: index + 1,
                    message,
                };

                let label = labels
                    .get(&vote.label)
                    .ok_or_else(|| invalid(format!("unknown label \"{}\"", vote.label)))?;
                if !label.is_value_defined(vote.value) {
                    return Err(invalid(format!(
                        "{} is not a valid value for {} ({})",
                        LabelValue::format_value(vote.value),
                        label.name(),
                        label.range()
                    )));
                }

                Ok((vote.change, vote.label.clone(), vote.to_vote()))
            })
            .collect()
    }

    /// Build the file form of stored vote sets
    pub fn from_entries(entries: impl IntoIterator<Item = (ChangeId, String, VoteSet)>) -> Self {
        let votes = entries
            .into_iter()
            .flat_map(|(change, label, set)| {
                set.iter()
                    .map(|vote| FileVote {
                        change,
                        label: label.clone(),
                        voter: vote.voter.account_id(),
                        value: vote.value,
                        cast_at: Some(vote.cast_at),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { votes }
    }
}

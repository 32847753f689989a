//! Evaluated label status

use serde::Serialize;

/// Status of one label, derived from its current votes
///
/// Never stored: it is recomputed from the label configuration and the vote
/// set whenever it is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelStatus {
    /// At least one vote (including a zero vote) was cast
    pub has_votes: bool,
    /// The label's maximum value was cast
    pub approved: bool,
    /// A positive vote below the maximum was cast and nobody approved
    pub recommended: bool,
    /// A negative vote was cast that the function does not count as a rejection
    pub disliked: bool,
    /// A negative vote was cast that the function counts as a rejection
    pub rejected: bool,
    /// The change cannot be submitted because of this label's votes
    pub blocking: bool,
    /// No eligible voter can ever cast the value this label needs
    pub impossible: bool,
    /// Representative vote value: the lowest vote if negative, else the highest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i16>,
}

impl LabelStatus {
    /// Whether the votes have any effect beyond being recorded
    pub fn is_no_effect(&self) -> bool {
        !(self.approved || self.recommended || self.disliked || self.rejected || self.blocking)
    }

    /// Short display keyword for the strongest state
    pub fn summary(&self) -> &'static str {
        if self.blocking {
            "blocking"
        } else if self.rejected {
            "rejected"
        } else if self.approved {
            "approved"
        } else if self.disliked {
            "disliked"
        } else if self.recommended {
            "recommended"
        } else if self.impossible {
            "impossible"
        } else if self.has_votes {
            "no effect"
        } else {
            "no votes"
        }
    }
}

impl std::fmt::Display for LabelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.summary())
    }
}

/// A label name paired with its status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedStatus {
    pub label: String,
    #[serde(flatten)]
    pub status: LabelStatus,
}

/// Statuses of every label of a change, in label-definition order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelStatuses {
    entries: Vec<NamedStatus>,
}

impl LabelStatuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label's status; a repeated label name replaces the earlier entry in place
    pub fn push(&mut self, label: impl Into<String>, status: LabelStatus) {
        let label = label.into();
        match self.entries.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.status = status,
            None => self.entries.push(NamedStatus { label, status }),
        }
    }

    pub fn get(&self, label: &str) -> Option<&LabelStatus> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.status)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabelStatus)> {
        self.entries
            .iter()
            .map(|entry| (entry.label.as_str(), &entry.status))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, LabelStatus)> for LabelStatuses {
    fn from_iter<I: IntoIterator<Item = (S, LabelStatus)>>(iter: I) -> Self {
        let mut statuses = LabelStatuses::new();
        for (label, status) in iter {
            statuses.push(label, status);
        }
        statuses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_votes() {
        let status = LabelStatus::default();
        assert!(!status.has_votes);
        assert!(status.is_no_effect());
        assert_eq!(status.summary(), "no votes");
    }

    #[test]
    fn test_summary_prefers_blocking() {
        let status = LabelStatus {
            has_votes: true,
            rejected: true,
            blocking: true,
            value: Some(-1),
            ..Default::default()
        };
        assert_eq!(status.to_string(), "blocking");
        assert!(!status.is_no_effect());
    }

    #[test]
    fn test_statuses_keep_order_and_replace() {
        let mut statuses = LabelStatuses::new();
        statuses.push("Verified", LabelStatus::default());
        statuses.push("Code-Review", LabelStatus::default());
        statuses.push(
            "Verified",
            LabelStatus {
                has_votes: true,
                ..Default::default()
            },
        );

        let names: Vec<&str> = statuses.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Verified", "Code-Review"]);
        assert!(statuses.get("Verified").unwrap().has_votes);
    }

    #[test]
    fn test_serialize_flattens_status() {
        let statuses: LabelStatuses = [(
            "Verified",
            LabelStatus {
                has_votes: true,
                approved: true,
                value: Some(1),
                ..Default::default()
            },
        )]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&statuses).unwrap();
        assert_eq!(json[0]["label"], "Verified");
        assert_eq!(json[0]["approved"], true);
        assert_eq!(json[0]["value"], 1);
    }
}

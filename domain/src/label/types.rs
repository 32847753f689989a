//! Ordered collection of the labels configured for a project

use super::config::LabelConfig;
use crate::core::error::DomainError;
use serde::Serialize;

/// The labels of a project, in definition order
///
/// Definition order is significant: status listings and the blocking-label
/// diagnostics of the submit gate follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelTypes {
    labels: Vec<LabelConfig>,
}

impl LabelTypes {
    /// Build the collection, rejecting duplicate label names
    pub fn new(labels: Vec<LabelConfig>) -> Result<Self, DomainError> {
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].iter().any(|other| other.name() == label.name()) {
                return Err(DomainError::DuplicateLabel(label.name().to_string()));
            }
        }
        Ok(Self { labels })
    }

    /// Look up a label by its exact (case-sensitive) name
    pub fn get(&self, name: &str) -> Option<&LabelConfig> {
        self.labels.iter().find(|label| label.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LabelConfig> {
        self.labels.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(LabelConfig::name)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<'a> IntoIterator for &'a LabelTypes {
    type Item = &'a LabelConfig;
    type IntoIter = std::slice::Iter<'a, LabelConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::value::LabelValue;

    fn label(name: &str) -> LabelConfig {
        LabelConfig::new(name, [LabelValue::new(0, "No score")]).unwrap()
    }

    #[test]
    fn test_preserves_definition_order() {
        let types = LabelTypes::new(vec![label("Verified"), label("Code-Review")]).unwrap();
        let names: Vec<&str> = types.names().collect();
        assert_eq!(names, vec!["Verified", "Code-Review"]);
    }

    #[test]
    fn test_duplicate_label() {
        let err = LabelTypes::new(vec![label("Verified"), label("Verified")]).unwrap_err();
        assert_eq!(err, DomainError::DuplicateLabel("Verified".to_string()));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let types = LabelTypes::new(vec![label("Verified")]).unwrap();
        assert!(types.get("Verified").is_some());
        assert!(types.get("verified").is_none());
    }

    #[test]
    fn test_names_differing_in_case_are_distinct() {
        let types = LabelTypes::new(vec![label("Verified"), label("verified")]).unwrap();
        assert_eq!(types.len(), 2);
    }
}

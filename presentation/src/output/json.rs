//! JSON output formatter

use super::formatter::OutputFormatter;
use labelgate_application::ChangeEvaluation;
use labelgate_domain::{LabelTypes, PostSubmitConflict};
use serde::Serialize;

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

#[derive(Serialize)]
struct LabelView<'a> {
    name: &'a str,
    function: &'static str,
    min: i16,
    max: i16,
    values: Vec<String>,
    allow_post_submit: bool,
}

#[derive(Serialize)]
struct ConflictView<'a> {
    error: String,
    labels: &'a [String],
}

impl JsonFormatter {
    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn labels(&self, labels: &LabelTypes) -> String {
        let views: Vec<_> = labels
            .iter()
            .map(|label| LabelView {
                name: label.name(),
                function: label.function().as_str(),
                min: label.min(),
                max: label.max(),
                values: label.values().rev().map(|v| v.to_string()).collect(),
                allow_post_submit: label.allow_post_submit(),
            })
            .collect();
        Self::to_json(&views)
    }

    fn evaluation(&self, evaluation: &ChangeEvaluation) -> String {
        Self::to_json(evaluation)
    }

    fn conflict(&self, conflict: &PostSubmitConflict) -> String {
        Self::to_json(&ConflictView {
            error: conflict.to_string(),
            labels: &conflict.labels,
        })
    }
}

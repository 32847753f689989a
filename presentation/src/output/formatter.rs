//! Output formatter trait

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;
use labelgate_application::ChangeEvaluation;
use labelgate_domain::{LabelTypes, OutputFormat, PostSubmitConflict};

/// Trait for rendering command results
pub trait OutputFormatter {
    /// Render the configured labels
    fn labels(&self, labels: &LabelTypes) -> String;

    /// Render label statuses and the submit verdict of a change
    fn evaluation(&self, evaluation: &ChangeEvaluation) -> String;

    /// Render a rejected post-submit vote
    fn conflict(&self, conflict: &PostSubmitConflict) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

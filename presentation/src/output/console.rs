//! Console output formatter for label evaluations

use super::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use labelgate_application::ChangeEvaluation;
use labelgate_domain::{LabelStatus, LabelTypes, LabelValue, PostSubmitConflict, SubmitVerdict};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off (or leave terminal detection in charge)
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format the configured labels with their values
    pub fn format_labels(labels: &LabelTypes) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Labels"));
        output.push('\n');

        if labels.is_empty() {
            output.push_str(&format!("\n{}\n", "No labels configured".dimmed()));
        }

        let width = Self::name_width(labels.names());
        for label in labels {
            let policy = if label.allow_post_submit() {
                "votes after submit: allowed".normal()
            } else {
                "votes after submit: rejected".yellow()
            };
            output.push_str(&format!(
                "\n{}  {}  {}  {}\n",
                format!("{:<width$}", label.name()).as_str().bold(),
                label.function().as_str().cyan(),
                label.range(),
                policy
            ));
            output.push_str(&format!("  {}\n", label.function().description().dimmed()));
            for value in label.values().rev() {
                output.push_str(&format!("  {}\n", value));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format label statuses followed by the verdict
    pub fn format_evaluation(evaluation: &ChangeEvaluation) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Change {}", evaluation.change)));
        output.push('\n');

        let width = Self::name_width(evaluation.statuses.iter().map(|(name, _)| name));
        for (name, status) in evaluation.statuses.iter() {
            let value = status
                .value
                .map(LabelValue::format_value)
                .unwrap_or_default();
            output.push_str(&format!(
                "{:<width$}  {:>3}  {}\n",
                name,
                value,
                Self::status_keyword(status),
                width = width
            ));
        }

        output.push('\n');
        output.push_str(&Self::verdict_line(&evaluation.verdict));
        output.push('\n');
        output.push_str(&Self::footer());
        output
    }

    /// Format a post-submit conflict
    pub fn format_conflict(conflict: &PostSubmitConflict) -> String {
        format!("{} {}\n", "Conflict:".red().bold(), conflict)
    }

    fn status_keyword(status: &LabelStatus) -> ColoredString {
        let keyword = status.summary();
        if status.blocking || status.rejected {
            keyword.red().bold()
        } else if status.approved {
            keyword.green().bold()
        } else if status.disliked || status.impossible {
            keyword.yellow()
        } else if status.recommended {
            keyword.green()
        } else {
            keyword.dimmed()
        }
    }

    fn verdict_line(verdict: &SubmitVerdict) -> String {
        if verdict.ok {
            format!("{}", "Submittable".green().bold())
        } else {
            format!(
                "{} {}",
                "Blocked by:".red().bold(),
                verdict.blocking_labels.join(", ")
            )
        }
    }

    fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
        names.map(str::len).max().unwrap_or(0)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn labels(&self, labels: &LabelTypes) -> String {
        Self::format_labels(labels)
    }

    fn evaluation(&self, evaluation: &ChangeEvaluation) -> String {
        Self::format_evaluation(evaluation)
    }

    fn conflict(&self, conflict: &PostSubmitConflict) -> String {
        Self::format_conflict(conflict)
    }
}

//! Presentation layer for labelgate
//!
//! This crate contains the CLI definition and the text and JSON
//! formatters for labels, evaluations and conflicts.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, FormatArg};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OutputFormatter, formatter_for};
pub use output::json::JsonFormatter;

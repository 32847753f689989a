//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use labelgate_application::ChangeId;
use labelgate_domain::{AccountId, OutputFormat};
use std::path::PathBuf;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for labelgate
#[derive(Parser, Debug)]
#[command(name = "labelgate")]
#[command(author, version, about = "Review label evaluation and submit gating")]
#[command(long_about = r#"
labelgate evaluates review labels on a change and decides whether it may be
submitted.

Each label has a set of allowed values and a function that turns the votes
cast on it into a status (approved, rejected, blocking, ...). A change is
submittable when no label is blocking.

Configuration files are loaded from (in priority order):
1. LABELGATE_* environment variables
2. --config <path>         Explicit config file
3. ./labelgate.toml        Project-level config
4. ~/.config/labelgate/config.toml   Global config

Example:
  labelgate labels
  labelgate evaluate --change 42
  labelgate vote --change 42 --voter 1000 --label Code-Review=+2
  labelgate vote --change 42 --label Verified=+1 --submitted
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (defaults to the configured format, then text)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<FormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List the configured labels
    Labels,

    /// Evaluate every label of a change and report whether it can be submitted
    ///
    /// Exits with status 1 when a label blocks submission.
    Evaluate {
        /// Votes file to read
        #[arg(long, value_name = "FILE", default_value = "votes.toml")]
        votes: PathBuf,

        /// Change to evaluate
        #[arg(long)]
        change: ChangeId,
    },

    /// Cast votes on one or more labels of a change
    ///
    /// Exits with status 2 when a label does not accept votes after submit;
    /// in that case no vote is recorded.
    Vote {
        /// Votes file to read and update
        #[arg(long, value_name = "FILE", default_value = "votes.toml")]
        votes: PathBuf,

        /// Change to vote on
        #[arg(long)]
        change: ChangeId,

        /// Account casting the votes (omit to vote as the internal user)
        #[arg(long, value_name = "ACCOUNT")]
        voter: Option<AccountId>,

        /// Vote to cast, e.g. Code-Review=+2 (can be specified multiple times)
        #[arg(
            short,
            long = "label",
            value_name = "NAME=VALUE",
            value_parser = parse_label_vote,
            required = true
        )]
        labels: Vec<(String, i16)>,

        /// The change has already been submitted
        #[arg(long)]
        submitted: bool,

        /// Evaluate the result without writing the votes file
        #[arg(long)]
        dry_run: bool,
    },
}

/// Parse `NAME=VALUE` where VALUE may carry a leading `+`
pub fn parse_label_vote(s: &str) -> Result<(String, i16), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing label name in '{}'", s));
    }

    let value = value.trim();
    let value = value
        .strip_prefix('+')
        .unwrap_or(value)
        .parse()
        .map_err(|_| format!("invalid vote value '{}' in '{}'", value, s))?;

    Ok((name.to_string(), value))
}

//! CLI entrypoint for labelgate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::Result;
use clap::Parser;
use labelgate_application::{
    CastVotesError, CastVotesInput, CastVotesUseCase, EvaluateChangeUseCase, PermittedRangeProvider,
};
use labelgate_domain::{LabelTypes, OutputFormat, Voter, has_errors};
use labelgate_infrastructure::{
    ConfigLoadError, ConfigLoader, FileConfig, InMemoryVoteStore, StaticPermittedRanges, VotesFile,
};
use labelgate_presentation::{Cli, Command, ConsoleFormatter, formatter_for};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Exit status when a label blocks submission
const EXIT_NOT_SUBMITTABLE: u8 = 1;
/// Exit status when votes were rejected after submit
const EXIT_CONFLICT: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(ConfigLoadError::from)?
    };

    let _log_guard = logging::init(cli.verbose, &config.logging);
    info!("Starting labelgate");

    let labels = load_labels(&config)?;
    let permissions: Arc<dyn PermittedRangeProvider> =
        Arc::new(StaticPermittedRanges::new(config.parse_permissions().0));

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    ConsoleFormatter::set_color_enabled(config.output.color && format == OutputFormat::Text);
    let formatter = formatter_for(format);

    match cli.command.unwrap_or(Command::Labels) {
        Command::Labels => {
            println!("{}", formatter.labels(&labels));
            Ok(ExitCode::SUCCESS)
        }
        Command::Evaluate { votes, change } => {
            let store = Arc::new(load_store(&labels, &votes)?);
            let use_case = EvaluateChangeUseCase::new(store).with_permissions(permissions);
            let evaluation = use_case.execute(&labels, change).await?;

            println!("{}", formatter.evaluation(&evaluation));
            Ok(exit_for(evaluation.verdict.ok))
        }
        Command::Vote {
            votes,
            change,
            voter,
            labels: requested,
            submitted,
            dry_run,
        } => {
            let store = Arc::new(load_store(&labels, &votes)?);
            let use_case = CastVotesUseCase::new(Arc::clone(&store)).with_permissions(permissions);

            let voter = voter.map(Voter::from).unwrap_or(Voter::Internal);
            let input = requested
                .into_iter()
                .fold(CastVotesInput::new(change, voter), |input, (label, value)| {
                    input.label(label, value)
                })
                .submitted(submitted);

            match use_case.execute(&labels, input).await {
                Ok(evaluation) => {
                    if dry_run {
                        debug!("Dry run, not writing {}", votes.display());
                    } else {
                        VotesFile::from_entries(store.entries().await).save(&votes)?;
                    }
                    println!("{}", formatter.evaluation(&evaluation));
                    Ok(ExitCode::SUCCESS)
                }
                Err(CastVotesError::PostSubmit(conflict)) => {
                    println!("{}", formatter.conflict(&conflict));
                    Ok(ExitCode::from(EXIT_CONFLICT))
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

/// Build the label set, logging configuration warnings
fn load_labels(config: &FileConfig) -> Result<LabelTypes, ConfigLoadError> {
    let issues = config.validate();
    if !has_errors(&issues) {
        for issue in &issues {
            warn!("{}", issue);
        }
    }
    config.label_types()
}

/// Seed an in-memory store from the votes file
fn load_store(labels: &LabelTypes, path: &Path) -> Result<InMemoryVoteStore, ConfigLoadError> {
    let file = VotesFile::load(path)?;
    let votes = file.to_votes(labels, path)?;
    Ok(InMemoryVoteStore::from_votes(votes))
}

fn exit_for(submittable: bool) -> ExitCode {
    if submittable {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NOT_SUBMITTABLE)
    }
}

//! Tracing subscriber setup

use labelgate_infrastructure::FileLoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a `-v` count, or `None` when no flag was given
fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"), // -vvv or more
    }
}

/// Pick the filter: `-v` flags, then `RUST_LOG`, then the configured level, then `warn`
fn build_filter(verbose: u8, configured: Option<&str>) -> EnvFilter {
    if let Some(level) = verbosity_level(verbose) {
        return EnvFilter::new(level);
    }
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or("warn")))
}

/// Initialize logging to stderr, plus a daily-rolling file when configured.
///
/// The returned guard flushes the file writer on drop and must be held until exit.
pub fn init(verbose: u8, config: &FileLoggingConfig) -> Option<WorkerGuard> {
    let (level, _) = config.parse_level();
    let filter = build_filter(verbose, level.as_deref());

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "labelgate.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    guard
}

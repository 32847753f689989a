//! Configuration file loading for labelgate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LABELGATE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./labelgate.toml` or `./.labelgate.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/labelgate/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigLoadError;
pub use file_config::{FileConfig, FileLabelConfig, FileLoggingConfig, FileOutputConfig};
pub use loader::ConfigLoader;

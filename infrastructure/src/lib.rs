//! Infrastructure layer for labelgate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod permissions;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoadError, ConfigLoader, FileConfig, FileLabelConfig, FileLoggingConfig,
    FileOutputConfig,
};
pub use permissions::StaticPermittedRanges;
pub use store::{FileVote, InMemoryVoteStore, VotesFile};

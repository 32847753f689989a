//! Application layer for labelgate
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    permissions::{NoPermissionInfo, PermittedRangeProvider},
    vote_store::{ChangeId, VoteStore, VoteStoreError},
};
pub use use_cases::cast_votes::{CastVotesError, CastVotesInput, CastVotesUseCase};
pub use use_cases::evaluate_change::{
    ChangeEvaluation, EvaluateChangeError, EvaluateChangeUseCase,
};

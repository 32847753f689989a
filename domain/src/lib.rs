//! Domain layer for labelgate
//!
//! This crate contains the label vote-evaluation engine: label configuration,
//! vote sets, the evaluation functions, the submit gate, and the post-submit
//! voting guard. It performs no I/O and holds no shared state; every
//! operation is a pure function of its inputs.
//!
//! # Core Concepts
//!
//! ## Labels
//!
//! A [`LabelConfig`] describes one review dimension (e.g. `Code-Review: -2..+2`)
//! and selects a [`LabelFunction`] deciding how votes translate into approval
//! and blocking.
//!
//! ## Evaluation
//!
//! ```text
//! vote ──▶ post-submit guard ──▶ VoteSet ──▶ evaluate ──▶ LabelStatus
//!                                                              │
//!                                   SubmitVerdict ◀── can_submit
//! ```

pub mod config;
pub mod core;
pub mod evaluation;
pub mod label;
pub mod submit;
pub mod vote;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity, has_errors, validate_label};
pub use core::error::DomainError;
pub use evaluation::{
    LabelStatus, LabelStatuses, NamedStatus, PermittedRange, evaluate, evaluate_all,
    evaluate_with_permitted,
};
pub use label::{LabelConfig, LabelFunction, LabelTypes, LabelValue};
pub use submit::{
    PostSubmitConflict, SubmitVerdict, authorize_vote, can_submit, check_post_submit,
};
pub use vote::{AccountId, Vote, VoteSet, Voter};

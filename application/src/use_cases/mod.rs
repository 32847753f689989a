//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod cast_votes;
pub mod evaluate_change;
pub(crate) mod shared;

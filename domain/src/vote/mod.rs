//! Votes and vote sets
//!
//! A [`VoteSet`] holds the current votes of one label on one change, keyed by
//! [`Voter`]. Storage layers hand snapshots of it to the evaluator.

pub mod vote_set;
pub mod voter;

pub use vote_set::{Vote, VoteSet};
pub use voter::{AccountId, Voter};

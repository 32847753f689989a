//! Vote storage adapters

mod memory;
mod votes_file;

pub use memory::InMemoryVoteStore;
pub use votes_file::{FileVote, VotesFile};

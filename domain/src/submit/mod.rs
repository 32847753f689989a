//! Submission gating
//!
//! - [`gate`] decides whether a change may be submitted given its label statuses
//! - [`guard`] decides whether a label still accepts votes after submission

pub mod gate;
pub mod guard;

pub use gate::{SubmitVerdict, can_submit};
pub use guard::{PostSubmitConflict, authorize_vote, check_post_submit};

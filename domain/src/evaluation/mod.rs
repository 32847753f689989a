//! Label vote evaluation
//!
//! ```text
//! LabelConfig + VoteSet ──evaluate──▶ LabelStatus
//!                                        │
//!            (every label of a change)   ▼
//!                                   LabelStatuses ──▶ submit gate
//! ```

pub mod evaluator;
pub mod permitted;
pub mod status;

pub use evaluator::{evaluate, evaluate_all, evaluate_with_permitted};
pub use permitted::PermittedRange;
pub use status::{LabelStatus, LabelStatuses, NamedStatus};

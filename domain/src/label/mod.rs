//! Review label configuration
//!
//! A label is a named review dimension (e.g. `Code-Review`, `Verified`) with
//! an integer value range, an evaluation [`LabelFunction`], and a policy for
//! voting after the change has been submitted.

pub mod config;
pub mod function;
pub mod types;
pub mod value;

pub use config::LabelConfig;
pub use function::LabelFunction;
pub use types::LabelTypes;
pub use value::LabelValue;

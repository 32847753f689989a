//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — label configuration errors

pub mod error;

//! Sift Core - Data-access error taxonomy
//!
//! This crate provides the categorized error type returned to callers of a
//! data-access layer and the trait that engine-specific translators implement.

pub mod error;
pub mod translator;

pub use error::{Cause, DataAccessError, ErrorKind};
pub use translator::FailureTranslator;

//! Sift Search - Search client failure classification
//!
//! Provides the failure types a search client raises, the engine's status
//! codes, and the translator that maps them onto the data-access taxonomy.

pub mod code;
pub mod failure;
pub mod translator;

pub use code::ErrorCode;
pub use failure::{Failure, ParseFailure, RuntimeFailure, SearchFailure, ServerFailure};
pub use translator::{category, classify, SearchFailureTranslator};

//! CLI command implementations

pub mod classify;
pub mod codes;
pub mod completions;
pub mod config;

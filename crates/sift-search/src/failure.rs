//! Search client failure types
//!
//! A failure raised at a data-access call site usually wraps the client's
//! server failure, which in turn wraps the failure reported by the engine.
//! Causes are shared, so cloning a failure never copies the chain below it.

use std::sync::Arc;

use thiserror::Error;

/// Any failure a search client can surface
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    #[error(transparent)]
    Runtime(#[from] RuntimeFailure),

    #[error(transparent)]
    Server(#[from] ServerFailure),

    #[error(transparent)]
    Search(#[from] SearchFailure),

    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

impl Failure {
    pub fn message(&self) -> &str {
        match self {
            Self::Runtime(f) => &f.message,
            Self::Server(f) => &f.message,
            Self::Search(f) => &f.message,
            Self::Parse(f) => &f.message,
        }
    }

    /// Directly wrapped failure, if any
    pub fn cause(&self) -> Option<&Failure> {
        match self {
            Self::Runtime(f) => f.cause.as_deref(),
            Self::Server(f) => f.cause.as_deref(),
            Self::Search(f) => f.cause.as_deref(),
            Self::Parse(_) => None,
        }
    }

    /// Number of failures in the chain, including this one
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |f| f.cause()).count()
    }
}

/// Opaque failure raised by a data-access call site
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RuntimeFailure {
    pub message: String,
    #[source]
    pub cause: Option<Arc<Failure>>,
}

impl RuntimeFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn caused_by(mut self, cause: impl Into<Failure>) -> Self {
        self.cause = Some(Arc::new(cause.into()));
        self
    }
}

/// Client-side wrapper around a failed server exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServerFailure {
    pub message: String,
    #[source]
    pub cause: Option<Arc<Failure>>,
}

impl ServerFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn caused_by(mut self, cause: impl Into<Failure>) -> Self {
        self.cause = Some(Arc::new(cause.into()));
        self
    }
}

/// Failure reported by the search engine with a numeric status code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SearchFailure {
    pub code: i32,
    pub message: String,
    #[source]
    pub cause: Option<Arc<Failure>>,
}

impl SearchFailure {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            cause: None,
        }
    }

    pub fn caused_by(mut self, cause: impl Into<Failure>) -> Self {
        self.cause = Some(Arc::new(cause.into()));
        self
    }
}

/// Malformed query string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParseFailure {
    pub message: String,
}

impl ParseFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

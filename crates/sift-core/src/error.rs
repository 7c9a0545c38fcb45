//! Data-access error taxonomy
//!
//! Callers of a data-access layer match on these categories instead of on the
//! failure types of whatever engine sits underneath.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shared handle to the failure a categorized error was built from
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Categorized data-access error
#[derive(Error, Debug, Clone)]
pub enum DataAccessError {
    /// The caller used the data-access API incorrectly (bad request, malformed query)
    #[error("Invalid data access API usage: {message}")]
    InvalidApiUsage {
        message: String,
        #[source]
        cause: Cause,
    },

    /// The underlying resource failed or could not be reached
    #[error("Data access resource failure: {message}")]
    ResourceFailure {
        message: String,
        #[source]
        cause: Cause,
    },

    /// The caller lacks the credentials or rights for the operation
    #[error("Permission denied: {message}")]
    PermissionDenied {
        message: String,
        #[source]
        cause: Cause,
    },

    /// The engine reported a failure it could not categorize itself
    #[error("Uncategorized data access error: {message}")]
    Uncategorized {
        message: String,
        #[source]
        cause: Cause,
    },
}

impl DataAccessError {
    pub fn invalid_api_usage<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::InvalidApiUsage {
            message: message.into(),
            cause: Arc::new(cause),
        }
    }

    pub fn resource_failure<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ResourceFailure {
            message: message.into(),
            cause: Arc::new(cause),
        }
    }

    pub fn permission_denied<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::PermissionDenied {
            message: message.into(),
            cause: Arc::new(cause),
        }
    }

    pub fn uncategorized<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Uncategorized {
            message: message.into(),
            cause: Arc::new(cause),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidApiUsage { .. } => ErrorKind::InvalidApiUsage,
            Self::ResourceFailure { .. } => ErrorKind::ResourceFailure,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::Uncategorized { .. } => ErrorKind::Uncategorized,
        }
    }

    /// Original message, without the category prefix added by `Display`
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidApiUsage { message, .. }
            | Self::ResourceFailure { message, .. }
            | Self::PermissionDenied { message, .. }
            | Self::Uncategorized { message, .. } => message.as_str(),
        }
    }

    /// The failure this error was built from
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            Self::InvalidApiUsage { cause, .. }
            | Self::ResourceFailure { cause, .. }
            | Self::PermissionDenied { cause, .. }
            | Self::Uncategorized { cause, .. } => &**cause,
        }
    }

    /// Messages of the wrapped cause and everything below it, outermost first
    pub fn cause_chain(&self) -> Vec<String> {
        let root: &(dyn std::error::Error + 'static) = self.cause();
        let mut chain = Vec::new();
        let mut current = Some(root);
        while let Some(err) = current {
            chain.push(err.to_string());
            current = err.source();
        }
        chain
    }
}

impl PartialEq for DataAccessError {
    /// Same category, same message, and causes that render the same chain
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && self.message() == other.message()
            && self.cause_chain() == other.cause_chain()
    }
}

/// Fieldless mirror of [`DataAccessError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidApiUsage,
    ResourceFailure,
    PermissionDenied,
    Uncategorized,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidApiUsage => "invalid_api_usage",
            Self::ResourceFailure => "resource_failure",
            Self::PermissionDenied => "permission_denied",
            Self::Uncategorized => "uncategorized",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

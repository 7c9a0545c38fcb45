//! Translation of search client failures into data-access errors

use sift_core::{DataAccessError, ErrorKind, FailureTranslator};

use crate::code::ErrorCode;
use crate::failure::{Failure, SearchFailure};

/// Translator for failures raised by the search client
///
/// Recognizes a runtime failure wrapping a [`ServerFailure`](crate::ServerFailure)
/// which itself wraps a [`SearchFailure`]. Anything else is left unhandled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFailureTranslator;

impl SearchFailureTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl FailureTranslator for SearchFailureTranslator {
    type Failure = Failure;

    fn translate(&self, failure: &Failure) -> Option<DataAccessError> {
        classify(failure)
    }
}

/// Classify a failure, returning `None` when its shape is not recognized
pub fn classify(failure: &Failure) -> Option<DataAccessError> {
    let Some(Failure::Server(server)) = failure.cause() else {
        tracing::trace!("Cause is not a server failure, not handled");
        return None;
    };
    let Some(Failure::Search(search)) = server.cause.as_deref() else {
        tracing::trace!("Server failure does not wrap a search failure, not handled");
        return None;
    };

    // Query syntax errors are a usage error whatever code the engine sent
    if let Some(Failure::Parse(parse)) = search.cause.as_deref() {
        tracing::debug!(code = search.code, "Classified query parse failure");
        return Some(DataAccessError::invalid_api_usage(
            parse.message.clone(),
            Failure::Parse(parse.clone()),
        ));
    }

    let code = ErrorCode::from_code(search.code);
    let kind = category(code);
    match kind {
        Some(kind) => tracing::debug!(%code, %kind, "Classified search failure"),
        None => tracing::trace!(%code, "Status code has no category, not handled"),
    }
    kind.map(|kind| categorize(kind, search))
}

/// Category a status code maps to, if any
pub fn category(code: ErrorCode) -> Option<ErrorKind> {
    match code {
        ErrorCode::NotFound | ErrorCode::ServiceUnavailable | ErrorCode::ServerError => {
            Some(ErrorKind::ResourceFailure)
        }
        ErrorCode::Forbidden | ErrorCode::Unauthorized => Some(ErrorKind::PermissionDenied),
        ErrorCode::BadRequest => Some(ErrorKind::InvalidApiUsage),
        ErrorCode::Unknown => Some(ErrorKind::Uncategorized),
        ErrorCode::Conflict | ErrorCode::UnsupportedMediaType | ErrorCode::Other(_) => None,
    }
}

fn categorize(kind: ErrorKind, search: &SearchFailure) -> DataAccessError {
    let message = search.message.clone();
    let cause = Failure::Search(search.clone());
    match kind {
        ErrorKind::InvalidApiUsage => DataAccessError::invalid_api_usage(message, cause),
        ErrorKind::ResourceFailure => DataAccessError::resource_failure(message, cause),
        ErrorKind::PermissionDenied => DataAccessError::permission_denied(message, cause),
        ErrorKind::Uncategorized => DataAccessError::uncategorized(message, cause),
    }
}

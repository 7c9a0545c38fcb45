//! Failure translator trait

use crate::error::DataAccessError;

/// Translates engine-specific failures into [`DataAccessError`]
///
/// Returning `None` means "not handled": the caller should try its next
/// translator, or propagate the original failure unchanged.
pub trait FailureTranslator: Send + Sync {
    /// Failure type this translator inspects
    type Failure: ?Sized;

    /// Translate a failure if its shape is recognized
    fn translate(&self, failure: &Self::Failure) -> Option<DataAccessError>;
}

impl<T: FailureTranslator + ?Sized> FailureTranslator for &T {
    type Failure = T::Failure;

    fn translate(&self, failure: &Self::Failure) -> Option<DataAccessError> {
        (**self).translate(failure)
    }
}

impl<T: FailureTranslator + ?Sized> FailureTranslator for Box<T> {
    type Failure = T::Failure;

    fn translate(&self, failure: &Self::Failure) -> Option<DataAccessError> {
        (**self).translate(failure)
    }
}

use thiserror::Error;

use crate::domain::{FieldValueError, RatingOutOfRange};
use crate::store::StorageError;

/// Errors that can occur while handling a form event.
///
/// Failed validation is not an error; it is reported through
/// [`SubmitOutcome::Rejected`](super::SubmitOutcome::Rejected).
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    InvalidValue(#[from] FieldValueError),
    #[error(transparent)]
    InvalidRating(#[from] RatingOutOfRange),
    #[error("Form storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

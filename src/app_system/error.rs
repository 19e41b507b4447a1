use thiserror::Error;

use crate::form_actor::FormError;
use crate::store::StorageError;

use super::config::ConfigError;

/// Errors that can stop the application as a whole.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Form error: {0}")]
    Form(#[from] FormError),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}

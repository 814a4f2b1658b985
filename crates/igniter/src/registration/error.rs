use thiserror::Error;

use crate::validation::ValidationErrors;

/// Registration related errors
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Invalid registration: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
}

/// Result type for registration operations
pub type Result<T> = std::result::Result<T, RegistrationError>;

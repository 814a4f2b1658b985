use thiserror::Error;

use crate::validation::ValidationErrors;

/// Training related errors
#[derive(Error, Debug)]
pub enum TrainingError {
    #[error("Invalid training: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
}

/// Result type for training operations
pub type Result<T> = std::result::Result<T, TrainingError>;

//! Error types for igniter crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IgniterError {
    #[error(transparent)]
    Training(#[from] crate::training::TrainingError),

    #[error(transparent)]
    Registration(#[from] crate::registration::RegistrationError),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, IgniterError>;

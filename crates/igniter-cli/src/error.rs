//! Error types for igniter-cli

use igniter::{IgniterError, RegistrationError, TrainingError, ValidationErrors};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Core error: {0}")]
    Core(IgniterError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Please fix the following: {0}")]
    Validation(ValidationErrors),
}

impl From<IgniterError> for CliError {
    fn from(e: IgniterError) -> Self {
        match e {
            IgniterError::Training(e) => e.into(),
            IgniterError::Registration(e) => e.into(),
            other => CliError::Core(other),
        }
    }
}

impl From<TrainingError> for CliError {
    fn from(e: TrainingError) -> Self {
        match e {
            TrainingError::Validation(errors) => CliError::Validation(errors),
            other => CliError::Core(other.into()),
        }
    }
}

impl From<RegistrationError> for CliError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Validation(errors) => CliError::Validation(errors),
            other => CliError::Core(other.into()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidInput(format!("Failed to encode output: {}", e))
    }
}

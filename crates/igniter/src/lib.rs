//! Course catalogue and registration store for Igniter Training Academy
//!
//! Trainings and registrations are kept as JSON arrays in a key-value store.
//! [`Igniter`] wires a storage backend into a [`TrainingService`] and a
//! [`RegistrationService`], which validate input and perform the CRUD.

pub mod app;
pub mod config;
pub mod error;
pub mod registration;
pub mod storage;
pub mod training;
pub mod validation;

// Re-export app types
pub use app::{Igniter, IgniterBuilder, RegistrationRow};

pub use config::IgniterConfig;

// Re-export domain types
pub use registration::{
    Registration, RegistrationError, RegistrationId, RegistrationInput, RegistrationService,
};
pub use training::{Training, TrainingError, TrainingId, TrainingInput, TrainingService};
pub use validation::{ValidationErrors, is_valid_email};

// Re-export error types
pub use error::{IgniterError, Result as IgniterResult};

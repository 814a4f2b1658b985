pub mod entity;
pub mod error;
pub mod lookup;
pub mod repository;
pub mod service;
pub mod store_repository;

pub use entity::{Registration, RegistrationId, RegistrationInput, timestamp_now};
pub use error::{RegistrationError, Result};
pub use lookup::{NO_TRAINING, training_title};
pub use repository::RegistrationRepository;
pub use service::RegistrationService;
pub use store_repository::StoreRegistrationRepository;

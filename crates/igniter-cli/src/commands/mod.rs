//! CLI command handlers

pub mod confirm;
pub mod registration;
pub mod training;

pub use registration::{
    RegistrationFields, registration_add, registration_edit, registration_list,
    registration_remove, registration_show,
};
pub use training::{
    TrainingFields, training_add, training_edit, training_list, training_remove, training_show,
};

/// Placeholder for empty optional fields in listings
pub(crate) const BLANK: &str = "–";

pub(crate) fn or_blank(s: &str) -> &str {
    if s.is_empty() { BLANK } else { s }
}

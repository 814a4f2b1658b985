//! Input validation for trainings and registrations.
//!
//! Every validator is pure and reports all failing fields at once as a
//! [`ValidationErrors`] map; an empty map means the input is valid.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::registration::RegistrationInput;
use crate::training::TrainingInput;

/// Field names as they appear in stored records and error maps
pub mod field {
    pub const TITLE: &str = "title";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const TRAINING_ID: &str = "trainingId";
}

pub const TITLE_REQUIRED: &str = "Title is required.";
pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const TRAINING_REQUIRED: &str = "Please select a training.";

// One '@', no whitespace, at least one '.' after the '@'. Not RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Field name to human-readable message, one entry per failing field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Basic `local@domain.tld` shape check
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_PATTERN.is_match(s)
}

pub fn validate_training(input: &TrainingInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if input.title.trim().is_empty() {
        errors.insert(field::TITLE, TITLE_REQUIRED);
    }
    errors
}

/// Checks applied when a registration is first submitted
pub fn validate_registration(input: &RegistrationInput) -> ValidationErrors {
    let mut errors = validate_registration_update(input);
    if input.training_id.trim().is_empty() {
        errors.insert(field::TRAINING_ID, TRAINING_REQUIRED);
    }
    errors
}

/// Checks applied when an existing registration is edited.
///
/// The training selection is not re-checked on edit.
pub fn validate_registration_update(input: &RegistrationInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if input.name.trim().is_empty() {
        errors.insert(field::NAME, NAME_REQUIRED);
    }

    let email = input.email.trim();
    if email.is_empty() {
        errors.insert(field::EMAIL, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.insert(field::EMAIL, EMAIL_INVALID);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, email: &str, training_id: &str) -> RegistrationInput {
        RegistrationInput {
            name: name.to_string(),
            email: email.to_string(),
            training_id: training_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));

        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_validate_registration_reports_single_field() {
        let errors = validate_registration(&registration("", "a@b.com", "t1"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(field::NAME), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_validate_registration_reports_every_field() {
        let errors = validate_registration(&registration("  ", "", " "));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(field::NAME), Some(NAME_REQUIRED));
        assert_eq!(errors.get(field::EMAIL), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(field::TRAINING_ID), Some(TRAINING_REQUIRED));
    }

    #[test]
    fn test_validate_registration_malformed_email() {
        let errors = validate_registration(&registration("Ada", "ada@example", "t1"));
        assert_eq!(errors.get(field::EMAIL), Some(EMAIL_INVALID));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_is_trimmed_before_matching() {
        let errors = validate_registration(&registration("Ada", "  ada@example.com ", "t1"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_update_ignores_training() {
        let errors = validate_registration_update(&registration("Ada", "ada@example.com", ""));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_training() {
        let mut input = TrainingInput::default();
        assert_eq!(
            validate_training(&input).get(field::TITLE),
            Some(TITLE_REQUIRED)
        );

        input.title = "  Fire Safety ".to_string();
        assert!(validate_training(&input).into_result().is_ok());
    }

    #[test]
    fn test_errors_display_and_json() {
        let errors = validate_registration(&registration("", "nope", "t1"));
        assert_eq!(
            errors.to_string(),
            "email: Please enter a valid email address.; name: Name is required."
        );

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["name"], "Name is required.");
    }
}

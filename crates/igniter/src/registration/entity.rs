use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::storage::lenient;
use crate::training::TrainingId;

/// Registration ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(String);

impl RegistrationId {
    /// Generate a fresh unique ID
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RegistrationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RegistrationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Current time as an ISO-8601 UTC timestamp with millisecond precision
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A person's registration for a training
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Registration {
    #[serde(deserialize_with = "lenient::text")]
    pub id: RegistrationId,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
    /// Soft reference: the training may since have been deleted
    #[serde(deserialize_with = "lenient::text")]
    pub training_id: TrainingId,
    #[serde(deserialize_with = "lenient::text")]
    pub date_preference: String,
    #[serde(deserialize_with = "lenient::text")]
    pub notes: String,
    /// Set once when the registration is submitted
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: String,
}

impl Registration {
    /// Build a record from form input, trimming every text field
    pub fn from_input(
        id: RegistrationId,
        input: &RegistrationInput,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            training_id: TrainingId::from(input.training_id.trim()),
            date_preference: input.date_preference.trim().to_string(),
            notes: input.notes.trim().to_string(),
            created_at: created_at.into(),
        }
    }
}

/// Submitted registration form, before validation and trimming
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub training_id: String,
    pub date_preference: String,
    pub notes: String,
}

impl From<&Registration> for RegistrationInput {
    fn from(registration: &Registration) -> Self {
        Self {
            name: registration.name.clone(),
            email: registration.email.clone(),
            phone: registration.phone.clone(),
            training_id: registration.training_id.to_string(),
            date_preference: registration.date_preference.clone(),
            notes: registration.notes.clone(),
        }
    }
}

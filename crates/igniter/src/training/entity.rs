use serde::{Deserialize, Serialize};
use std::fmt;

use crate::storage::lenient;

/// Training ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingId(String);

impl TrainingId {
    /// Generate a fresh unique ID
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TrainingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrainingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TrainingId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A training course offered in the catalogue.
///
/// Only `title` is required; the rest is free-form text and stays empty when
/// not given. Fields missing from a stored record read back as empty, and
/// stored numbers or booleans read back as their text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Training {
    #[serde(deserialize_with = "lenient::text")]
    pub id: TrainingId,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub capacity: String,
}

impl Training {
    /// Build a record from form input, trimming every field
    pub fn from_input(id: TrainingId, input: &TrainingInput) -> Self {
        Self {
            id,
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            duration: input.duration.trim().to_string(),
            date: input.date.trim().to_string(),
            capacity: input.capacity.trim().to_string(),
        }
    }
}

/// Submitted training form, before validation and trimming
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingInput {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub date: String,
    pub capacity: String,
}

impl TrainingInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

impl From<&Training> for TrainingInput {
    fn from(training: &Training) -> Self {
        Self {
            title: training.title.clone(),
            description: training.description.clone(),
            duration: training.duration.clone(),
            date: training.date.clone(),
            capacity: training.capacity.clone(),
        }
    }
}

use std::sync::Arc;

use super::{
    Registration, RegistrationId, RegistrationInput, RegistrationRepository, Result,
    timestamp_now,
};
use crate::validation::{validate_registration, validate_registration_update};

/// Service for managing registrations
#[derive(Clone)]
pub struct RegistrationService {
    repository: Arc<dyn RegistrationRepository>,
}

impl RegistrationService {
    /// Create a new RegistrationService
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { repository }
    }

    /// List all registrations in submission order
    pub async fn list(&self) -> Result<Vec<Registration>> {
        self.repository.list().await
    }

    /// Get a registration by ID
    pub async fn get(&self, id: &RegistrationId) -> Result<Option<Registration>> {
        self.repository.get(id).await
    }

    /// Submit a new registration.
    ///
    /// Fails with every invalid field when name, email or training selection
    /// is missing or malformed; nothing is written in that case.
    pub async fn create(&self, input: RegistrationInput) -> Result<Registration> {
        validate_registration(&input).into_result()?;

        let registration =
            Registration::from_input(RegistrationId::generate(), &input, timestamp_now());
        let created = self.repository.insert(registration).await?;

        tracing::debug!(
            id = %created.id,
            training_id = %created.training_id,
            "registration submitted"
        );
        Ok(created)
    }

    /// Edit an existing registration, keeping its ID and submission time.
    ///
    /// Only name and email are validated. Returns `Ok(None)` without writing
    /// when no registration has this ID.
    pub async fn update(
        &self,
        id: &RegistrationId,
        input: RegistrationInput,
    ) -> Result<Option<Registration>> {
        validate_registration_update(&input).into_result()?;

        // the repository keeps the stored submission time
        let registration = Registration::from_input(id.clone(), &input, String::new());

        let updated = self.repository.replace(registration).await?;
        match &updated {
            Some(_) => tracing::debug!(%id, "registration updated"),
            None => tracing::debug!(%id, "registration not found, update ignored"),
        }
        Ok(updated)
    }

    /// Delete a registration, returning whether it existed
    pub async fn delete(&self, id: &RegistrationId) -> Result<bool> {
        let removed = self.repository.delete(id).await?;
        tracing::debug!(%id, removed, "registration delete");
        Ok(removed)
    }
}

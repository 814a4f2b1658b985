use std::sync::Arc;

use super::{Result, Training, TrainingId, TrainingInput, TrainingRepository};
use crate::validation::validate_training;

/// Service for managing the training catalogue
#[derive(Clone)]
pub struct TrainingService {
    repository: Arc<dyn TrainingRepository>,
}

impl TrainingService {
    /// Create a new TrainingService
    pub fn new(repository: Arc<dyn TrainingRepository>) -> Self {
        Self { repository }
    }

    /// List all trainings in the order they were added
    pub async fn list(&self) -> Result<Vec<Training>> {
        self.repository.list().await
    }

    /// Get a training by ID
    pub async fn get(&self, id: &TrainingId) -> Result<Option<Training>> {
        self.repository.get(id).await
    }

    /// Add a new training with a freshly generated ID
    pub async fn create(&self, input: TrainingInput) -> Result<Training> {
        validate_training(&input).into_result()?;

        let training = Training::from_input(TrainingId::generate(), &input);
        let created = self.repository.upsert(training).await?;

        tracing::debug!(id = %created.id, title = %created.title, "training added");
        Ok(created)
    }

    /// Replace the training with this ID.
    ///
    /// An unknown ID is not an error: the training is appended under that ID.
    /// A blank ID saves the input as a new training with a generated ID.
    pub async fn update(&self, id: &TrainingId, input: TrainingInput) -> Result<Training> {
        if id.as_str().trim().is_empty() {
            return self.create(input).await;
        }
        validate_training(&input).into_result()?;

        let training = Training::from_input(id.clone(), &input);
        let updated = self.repository.upsert(training).await?;

        tracing::debug!(id = %updated.id, "training saved");
        Ok(updated)
    }

    /// Delete a training. Registrations referencing it are left untouched.
    pub async fn delete(&self, id: &TrainingId) -> Result<bool> {
        let removed = self.repository.delete(id).await?;
        tracing::debug!(%id, removed, "training delete");
        Ok(removed)
    }
}

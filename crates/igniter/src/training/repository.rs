use async_trait::async_trait;

use super::{Result, Training, TrainingId};

/// Persistence for the training catalogue
#[async_trait]
pub trait TrainingRepository: Send + Sync {
    /// List all trainings in insertion order
    async fn list(&self) -> Result<Vec<Training>>;

    /// Get a training by ID
    async fn get(&self, id: &TrainingId) -> Result<Option<Training>>;

    /// Replace the training with the same ID in place, or append it
    async fn upsert(&self, training: Training) -> Result<Training>;

    /// Remove every training with this ID, returning whether any was removed
    async fn delete(&self, id: &TrainingId) -> Result<bool>;
}

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Result, Training, TrainingId, TrainingRepository};
use crate::storage::RecordStore;

/// TrainingRepository keeping the whole catalogue as one JSON array under a
/// single key
#[derive(Debug)]
pub struct StoreTrainingRepository {
    store: RecordStore,
    key: String,
    // serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl StoreTrainingRepository {
    pub fn new(store: RecordStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl TrainingRepository for StoreTrainingRepository {
    async fn list(&self) -> Result<Vec<Training>> {
        Ok(self.store.read(&self.key).await)
    }

    async fn get(&self, id: &TrainingId) -> Result<Option<Training>> {
        let trainings: Vec<Training> = self.store.read(&self.key).await;
        Ok(trainings.into_iter().find(|t| &t.id == id))
    }

    async fn upsert(&self, training: Training) -> Result<Training> {
        let _guard = self.write_lock.lock().await;
        let mut trainings: Vec<Training> = self.store.read(&self.key).await;

        match trainings.iter_mut().find(|t| t.id == training.id) {
            Some(existing) => *existing = training.clone(),
            None => trainings.push(training.clone()),
        }

        self.store.write(&self.key, &trainings).await?;
        Ok(training)
    }

    async fn delete(&self, id: &TrainingId) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut trainings: Vec<Training> = self.store.read(&self.key).await;

        let before = trainings.len();
        trainings.retain(|t| &t.id != id);
        if trainings.len() == before {
            return Ok(false);
        }

        self.store.write(&self.key, &trainings).await?;
        Ok(true)
    }
}

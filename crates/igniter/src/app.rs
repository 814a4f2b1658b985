//! Application facade wiring one storage backend into both services.

use std::sync::Arc;

use crate::config::IgniterConfig;
use crate::error::{IgniterError, Result};
use crate::registration::{
    Registration, RegistrationService, StoreRegistrationRepository, training_title,
};
use crate::storage::{InMemoryStorage, KeyValueStore, LocalStorage, ReadFailureHook, RecordStore};
use crate::training::{StoreTrainingRepository, TrainingService};

/// The Igniter application: training catalogue plus registrations
#[derive(Clone)]
pub struct Igniter {
    trainings: TrainingService,
    registrations: RegistrationService,
    config: IgniterConfig,
}

/// A registration together with the title of the training it points at
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRow {
    pub registration: Registration,
    pub training_title: String,
}

impl Igniter {
    /// Open the file-backed store described by `config`
    pub fn open(config: IgniterConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// Start from an empty in-memory store
    pub fn in_memory() -> Result<Self> {
        Self::builder().storage(Arc::new(InMemoryStorage::new())).build()
    }

    pub fn builder() -> IgniterBuilder {
        IgniterBuilder::new()
    }

    pub fn trainings(&self) -> &TrainingService {
        &self.trainings
    }

    pub fn registrations(&self) -> &RegistrationService {
        &self.registrations
    }

    pub fn config(&self) -> &IgniterConfig {
        &self.config
    }

    /// All registrations with their training titles resolved
    pub async fn registration_rows(&self) -> Result<Vec<RegistrationRow>> {
        let trainings = self.trainings.list().await?;
        let registrations = self.registrations.list().await?;

        Ok(registrations
            .into_iter()
            .map(|registration| {
                let training_title =
                    training_title(&trainings, &registration.training_id).to_string();
                RegistrationRow {
                    registration,
                    training_title,
                }
            })
            .collect())
    }
}

/// Builder for creating Igniter applications
#[derive(Default)]
pub struct IgniterBuilder {
    config: IgniterConfig,
    storage: Option<Arc<dyn KeyValueStore>>,
    on_read_failure: Option<ReadFailureHook>,
}

impl IgniterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn config(mut self, config: IgniterConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this backend instead of the configured data directory
    pub fn storage(mut self, storage: Arc<dyn KeyValueStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Observe stored collections that could not be read
    pub fn on_read_failure(mut self, hook: ReadFailureHook) -> Self {
        self.on_read_failure = Some(hook);
        self
    }

    /// Build the application
    pub fn build(self) -> Result<Igniter> {
        let config = self.config;
        if config.trainings_key == config.registrations_key {
            return Err(IgniterError::Config(format!(
                "trainings and registrations share the key {:?}",
                config.trainings_key
            )));
        }

        let storage: Arc<dyn KeyValueStore> = match self.storage {
            Some(storage) => storage,
            None => Arc::new(LocalStorage::from_config(&config)),
        };

        let mut store = RecordStore::new(storage);
        if let Some(hook) = self.on_read_failure {
            store = store.on_read_failure(hook);
        }

        let trainings = TrainingService::new(Arc::new(StoreTrainingRepository::new(
            store.clone(),
            config.trainings_key.clone(),
        )));
        let registrations = RegistrationService::new(Arc::new(StoreRegistrationRepository::new(
            store,
            config.registrations_key.clone(),
        )));

        Ok(Igniter {
            trainings,
            registrations,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{NO_TRAINING, RegistrationInput};
    use crate::training::TrainingInput;

    #[tokio::test]
    async fn test_registration_rows_resolve_titles() {
        let app = Igniter::in_memory().unwrap();
        let fire = app
            .trainings()
            .create(TrainingInput::new("Fire Safety"))
            .await
            .unwrap();
        let ladder = app
            .trainings()
            .create(TrainingInput::new("Ladder Work"))
            .await
            .unwrap();

        for training_id in [fire.id.as_str(), ladder.id.as_str()] {
            app.registrations()
                .create(RegistrationInput {
                    name: "Ada".to_string(),
                    email: "ada@example.com".to_string(),
                    training_id: training_id.to_string(),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        // deleting a training leaves its registrations dangling
        app.trainings().delete(&ladder.id).await.unwrap();
        assert_eq!(app.registrations().list().await.unwrap().len(), 2);

        let titles: Vec<String> = app
            .registration_rows()
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.training_title)
            .collect();
        assert_eq!(titles, vec!["Fire Safety".to_string(), ladder.id.to_string()]);
        assert_ne!(titles[1], NO_TRAINING);
    }

    #[test]
    fn test_build_rejects_shared_key() {
        let config = IgniterConfig {
            registrations_key: "igniter_trainings".to_string(),
            ..Default::default()
        };
        let result = Igniter::builder()
            .config(config)
            .storage(Arc::new(InMemoryStorage::new()))
            .build();

        assert!(matches!(result, Err(IgniterError::Config(_))));
    }
}

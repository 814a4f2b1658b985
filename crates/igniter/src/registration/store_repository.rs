use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Registration, RegistrationId, RegistrationRepository, Result, timestamp_now};
use crate::storage::RecordStore;

/// RegistrationRepository keeping all registrations as one JSON array under a
/// single key
#[derive(Debug)]
pub struct StoreRegistrationRepository {
    store: RecordStore,
    key: String,
    write_lock: Mutex<()>,
}

impl StoreRegistrationRepository {
    pub fn new(store: RecordStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

}

#[async_trait]
impl RegistrationRepository for StoreRegistrationRepository {
    async fn list(&self) -> Result<Vec<Registration>> {
        Ok(self.store.read(&self.key).await)
    }

    async fn get(&self, id: &RegistrationId) -> Result<Option<Registration>> {
        let registrations: Vec<Registration> = self.store.read(&self.key).await;
        Ok(registrations.into_iter().find(|r| &r.id == id))
    }

    async fn insert(&self, registration: Registration) -> Result<Registration> {
        let _guard = self.write_lock.lock().await;
        let mut registrations: Vec<Registration> = self.store.read(&self.key).await;
        registrations.push(registration.clone());
        self.store.write(&self.key, &registrations).await?;
        Ok(registration)
    }

    async fn replace(&self, mut registration: Registration) -> Result<Option<Registration>> {
        let _guard = self.write_lock.lock().await;
        let mut registrations: Vec<Registration> = self.store.read(&self.key).await;

        let Some(existing) = registrations.iter_mut().find(|r| r.id == registration.id) else {
            return Ok(None);
        };
        registration.created_at = if existing.created_at.is_empty() {
            timestamp_now()
        } else {
            std::mem::take(&mut existing.created_at)
        };
        *existing = registration.clone();

        self.store.write(&self.key, &registrations).await?;
        Ok(Some(registration))
    }

    async fn delete(&self, id: &RegistrationId) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut registrations: Vec<Registration> = self.store.read(&self.key).await;

        let before = registrations.len();
        registrations.retain(|r| &r.id != id);
        if registrations.len() == before {
            return Ok(false);
        }

        self.store.write(&self.key, &registrations).await?;
        Ok(true)
    }
}

use async_trait::async_trait;

use super::{Registration, RegistrationId, Result};

/// Persistence for registrations
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// List all registrations in insertion order
    async fn list(&self) -> Result<Vec<Registration>>;

    /// Get a registration by ID
    async fn get(&self, id: &RegistrationId) -> Result<Option<Registration>>;

    /// Append a new registration
    async fn insert(&self, registration: Registration) -> Result<Registration>;

    /// Replace the registration with the same ID in place.
    ///
    /// The stored `created_at` is kept; when it is empty the current time is
    /// stamped instead. The `created_at` passed in is ignored. Returns `None`
    /// and writes nothing when no such registration exists.
    async fn replace(&self, registration: Registration) -> Result<Option<Registration>>;

    /// Remove every registration with this ID, returning whether any was removed
    async fn delete(&self, id: &RegistrationId) -> Result<bool>;
}

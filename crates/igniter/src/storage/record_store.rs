//! JSON record store: the adapter between typed record collections and a
//! raw key-value backend.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

use super::{KeyValueStore, StorageError, StorageResult};

/// Why stored data was left out of a read
#[derive(Debug)]
pub enum ReadFailure {
    /// The backend itself failed to return the value
    Backend(StorageError),
    /// The value was present but is not a JSON array
    Malformed(serde_json::Error),
    /// One element of the array could not be decoded and was skipped
    Record {
        index: usize,
        error: serde_json::Error,
    },
}

impl fmt::Display for ReadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadFailure::Backend(e) => write!(f, "backend read failed: {}", e),
            ReadFailure::Malformed(e) => write!(f, "malformed value: {}", e),
            ReadFailure::Record { index, error } => {
                write!(f, "record {} skipped: {}", index, error)
            }
        }
    }
}

/// Callback observing stored data that a read had to leave out
pub type ReadFailureHook = Arc<dyn Fn(&str, &ReadFailure) + Send + Sync>;

/// Reads and writes whole record collections as JSON arrays.
///
/// Reads never fail: an unset or empty key, a backend error or a value that is
/// not a JSON array all come back as an empty collection. Array elements are
/// decoded one by one, so a single undecodable record is skipped without
/// losing its neighbours. Everything but the unset key is logged and handed
/// to the optional [`ReadFailureHook`].
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn KeyValueStore>,
    on_read_failure: Option<ReadFailureHook>,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            on_read_failure: None,
        }
    }

    /// Register a callback invoked whenever a read falls back to empty
    pub fn on_read_failure(mut self, hook: ReadFailureHook) -> Self {
        self.on_read_failure = Some(hook);
        self
    }

    /// Read the collection stored under `key`
    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.backend.get(key).await {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                tracing::debug!(key, "no stored collection, starting empty");
                return Vec::new();
            }
            Err(e) => {
                self.report(key, ReadFailure::Backend(e));
                return Vec::new();
            }
        };

        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(values) => values,
            Err(e) => {
                self.report(key, ReadFailure::Malformed(e));
                return Vec::new();
            }
        };

        let mut records = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<T>(value) {
                Ok(record) => records.push(record),
                Err(error) => self.report(key, ReadFailure::Record { index, error }),
            }
        }
        records
    }

    /// Replace the collection stored under `key`
    pub async fn write<T: Serialize>(&self, key: &str, records: &[T]) -> StorageResult<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.set(key, &raw).await?;
        tracing::debug!(key, count = records.len(), "collection written");
        Ok(())
    }

    fn report(&self, key: &str, failure: ReadFailure) {
        tracing::warn!(key, error = %failure, "stored data unreadable, left out of read");
        if let Some(hook) = &self.on_read_failure {
            hook(key, &failure);
        }
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("on_read_failure", &self.on_read_failure.is_some())
            .finish_non_exhaustive()
    }
}

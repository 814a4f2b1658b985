use async_trait::async_trait;

use super::{StorageError, StorageResult};

/// Persistent key-value backend holding one text value per key
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw value stored under `key`, `None` when the key is unset
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Reject keys that cannot be used as a single file name.
pub(crate) fn check_key(key: &str) -> StorageResult<()> {
    let invalid = key.is_empty()
        || key == "."
        || key.contains("..")
        || key.contains('/')
        || key.contains('\\')
        || key.contains('\0');

    if invalid {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key() {
        assert!(check_key("igniter_trainings").is_ok());
        assert!(check_key("registrations.v1").is_ok());

        for key in ["", ".", "..", "a/b", "a\\b", "../etc", "nul\0"] {
            assert!(
                matches!(check_key(key), Err(StorageError::InvalidKey(_))),
                "{key:?} should be rejected"
            );
        }
    }
}

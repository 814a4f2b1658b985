use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::traits::check_key;
use super::{KeyValueStore, StorageResult};
use crate::config::IgniterConfig;

const VALUE_EXTENSION: &str = "json";

/// Local filesystem backend storing each key as `<base>/<key>.json`
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Create LocalStorage from IgniterConfig
    pub fn from_config(config: &IgniterConfig) -> Self {
        Self::new(&config.data_dir)
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.{}", key, VALUE_EXTENSION))
    }
}

#[async_trait]
impl KeyValueStore for LocalStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        check_key(key)?;
        match fs::read_to_string(self.value_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        check_key(key)?;
        fs::create_dir_all(&self.base_path).await?;

        // Write beside the target, then rename over it
        let target = self.value_path(key);
        let staging = self
            .base_path
            .join(format!(".{}.{}", key, uuid::Uuid::new_v4().simple()));

        let mut file = fs::File::create(&staging).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);

        if let Err(e) = fs::rename(&staging, &target).await {
            let _ = fs::remove_file(&staging).await;
            return Err(e.into());
        }
        Ok(())
    }
}

use igniter::storage::{KeyValueStore, LocalStorage, RecordStore, StorageError};
use igniter::{Training, TrainingId};
use std::path::PathBuf;
use std::sync::Arc;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("igniter_test_{}", uuid::Uuid::new_v4()))
}

fn training(id: &str, title: &str) -> Training {
    Training {
        id: TrainingId::from(id),
        title: title.to_string(),
        description: "Hands-on".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_get_set() {
    let dir = temp_dir();
    let storage = LocalStorage::new(&dir);

    assert_eq!(storage.get("igniter_trainings").await.unwrap(), None);

    storage.set("igniter_trainings", "[]").await.unwrap();
    assert!(dir.join("igniter_trainings.json").is_file());
    assert_eq!(
        storage.get("igniter_trainings").await.unwrap().as_deref(),
        Some("[]")
    );

    storage.set("igniter_registrations", "[1]").await.unwrap();
    assert_eq!(
        storage.get("igniter_registrations").await.unwrap().as_deref(),
        Some("[1]")
    );
    assert_eq!(
        storage.get("igniter_trainings").await.unwrap().as_deref(),
        Some("[]")
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_set_leaves_no_staging_files() {
    let dir = temp_dir();
    let storage = LocalStorage::new(&dir);

    for i in 0..5 {
        storage.set("igniter_trainings", &format!("[{i}]")).await.unwrap();
    }

    let entries: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["igniter_trainings.json"]);
    assert_eq!(
        storage.get("igniter_trainings").await.unwrap().as_deref(),
        Some("[4]")
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_rejects_path_like_keys() {
    let dir = temp_dir();
    let storage = LocalStorage::new(&dir);

    let result = storage.set("../escape", "[]").await;
    assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    assert!(!dir.exists());
}

#[tokio::test]
async fn test_record_store_round_trip_on_disk() {
    let dir = temp_dir();
    let store = RecordStore::new(Arc::new(LocalStorage::new(&dir)));
    let records = vec![training("t1", "Fire Safety"), training("t2", "First Aid")];

    store.write("igniter_trainings", &records).await.unwrap();
    let read: Vec<Training> = store.read("igniter_trainings").await;
    assert_eq!(read, records);

    std::fs::write(dir.join("igniter_trainings.json"), "[{\"id\":").unwrap();
    let read: Vec<Training> = store.read("igniter_trainings").await;
    assert!(read.is_empty());

    std::fs::remove_dir_all(&dir).unwrap();
}

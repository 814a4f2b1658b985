use igniter::storage::{InMemoryStorage, ReadFailure, ReadFailureHook};
use igniter::{
    Igniter, IgniterConfig, IgniterError, RegistrationError, RegistrationId, RegistrationInput,
    TrainingId, TrainingInput,
};
use std::sync::{Arc, Mutex};

fn temp_config() -> IgniterConfig {
    IgniterConfig {
        data_dir: std::env::temp_dir()
            .join(format!("igniter_app_{}", uuid::Uuid::new_v4()))
            .to_string_lossy()
            .to_string(),
        ..Default::default()
    }
}

fn registration(name: &str, email: &str, training_id: &TrainingId) -> RegistrationInput {
    RegistrationInput {
        name: name.to_string(),
        email: email.to_string(),
        training_id: training_id.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let config = temp_config();

    let app = Igniter::open(config.clone()).unwrap();
    let training = app
        .trainings()
        .create(TrainingInput {
            title: "Fire Safety".to_string(),
            duration: "2 days".to_string(),
            capacity: "12".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let registration = app
        .registrations()
        .create(registration("Ada", "ada@example.com", &training.id))
        .await
        .unwrap();
    drop(app);

    let reopened = Igniter::open(config.clone()).unwrap();
    assert_eq!(reopened.trainings().list().await.unwrap(), vec![training]);
    assert_eq!(
        reopened.registrations().list().await.unwrap(),
        vec![registration]
    );

    let raw = std::fs::read_to_string(
        std::path::Path::new(&config.data_dir).join("igniter_registrations.json"),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value[0].get("trainingId").is_some());
    assert!(value[0].get("createdAt").is_some());

    std::fs::remove_dir_all(&config.data_dir).unwrap();
}

#[tokio::test]
async fn test_validation_error_surfaces_through_facade() {
    let app = Igniter::in_memory().unwrap();

    let err: IgniterError = app
        .registrations()
        .create(RegistrationInput::default())
        .await
        .unwrap_err()
        .into();

    let IgniterError::Registration(RegistrationError::Validation(errors)) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 3);
    assert!(app.registrations().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_asymmetry() {
    let app = Igniter::in_memory().unwrap();

    let ghost_training = TrainingId::from("ghost");
    app.trainings()
        .update(&ghost_training, TrainingInput::new("Appears"))
        .await
        .unwrap();
    assert_eq!(app.trainings().list().await.unwrap().len(), 1);

    let ghost_registration = RegistrationId::from("ghost");
    let updated = app
        .registrations()
        .update(
            &ghost_registration,
            registration("Ada", "ada@example.com", &ghost_training),
        )
        .await
        .unwrap();
    assert!(updated.is_none());
    assert!(app.registrations().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_store_is_reported_and_read_as_empty() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let hook: ReadFailureHook = Arc::new(move |key: &str, failure: &ReadFailure| {
        sink.lock()
            .unwrap()
            .push((key.to_string(), matches!(failure, ReadFailure::Malformed(_))));
    });

    let backend = InMemoryStorage::with_entries([
        ("igniter_trainings", "not json at all"),
        ("igniter_registrations", "{\"id\":\"r1\"}"),
    ]);
    let app = Igniter::builder()
        .storage(Arc::new(backend))
        .on_read_failure(hook)
        .build()
        .unwrap();

    assert!(app.trainings().list().await.unwrap().is_empty());
    assert!(app.registrations().list().await.unwrap().is_empty());

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            ("igniter_trainings".to_string(), true),
            ("igniter_registrations".to_string(), true)
        ]
    );
}

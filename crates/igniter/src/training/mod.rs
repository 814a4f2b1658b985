pub mod entity;
pub mod error;
pub mod repository;
pub mod service;
pub mod store_repository;

pub use entity::{Training, TrainingId, TrainingInput};
pub use error::{Result, TrainingError};
pub use repository::TrainingRepository;
pub use service::TrainingService;
pub use store_repository::StoreTrainingRepository;

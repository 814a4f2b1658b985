pub mod error;
pub(crate) mod lenient;
pub mod local;
pub mod memory;
pub mod record_store;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use local::LocalStorage;
pub use memory::InMemoryStorage;
pub use record_store::{ReadFailure, ReadFailureHook, RecordStore};
pub use traits::KeyValueStore;

pub mod load_result;
pub mod session_handle;
pub mod session_state;
pub mod session_store;
pub mod snapshot;
pub mod storage;
pub mod store_options;

pub use load_result::LoadResult;
pub use session_handle::SessionHandle;
pub use session_state::SessionState;
pub use session_store::SessionStore;
pub use snapshot::{CURRENT_SCHEMA_VERSION, SessionSnapshot, load_snapshot};
pub use storage::error::{Result as StorageResult, StorageError};
pub use storage::file_storage::FileStorage;
pub use storage::memory_storage::MemoryStorage;
pub use storage::{SessionStorage, validate_key};
pub use store_options::StoreOptions;

use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "mefit_user";
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

#[cfg(test)]
mod tests;

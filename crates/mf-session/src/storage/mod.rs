pub mod error;
pub mod file_storage;
pub mod memory_storage;

use crate::storage::error::{Result as StorageResult, StorageError};

/// Durable key/value storage for session snapshots.
///
/// Readers must tolerate a missing key (first run) and a value that no
/// longer parses. Only the session store writes.
pub trait SessionStorage: Send + Sync {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Move an unreadable value out of the way so the next start is clean.
    fn quarantine(&self, key: &str) -> StorageResult<()> {
        self.remove(key)
    }
}

/// Keys double as file names, so they are limited to `[A-Za-z0-9_.-]`
/// and may not start with a dot.
///
/// `mf_config::SessionConfig::validate` applies the same rule at startup.
#[track_caller]
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::invalid_key(key))
    }
}

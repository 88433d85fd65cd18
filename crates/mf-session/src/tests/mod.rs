mod file_storage;
mod memory_storage;

use crate::{
    MemoryStorage, SessionStorage, SessionStore, StorageError, StorageResult, StoreOptions,
};

use mf_auth::FixedCredentialTable;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub(crate) const KEY: &str = "mefit_user";

/// Memory storage that counts mutations.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingStorage {
    pub(crate) inner: MemoryStorage,
    writes: Arc<AtomicUsize>,
    removes: Arc<AtomicUsize>,
}

impl RecordingStorage {
    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub(crate) fn removes(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }
}

impl SessionStorage for RecordingStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key)
    }
}

/// Storage whose every operation fails.
#[derive(Debug, Clone, Default)]
pub(crate) struct BrokenStorage;

impl SessionStorage for BrokenStorage {
    fn read(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::file_read(
            PathBuf::from("/broken"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ))
    }

    fn write(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::file_write(
            PathBuf::from("/broken"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ))
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::file_remove(
            PathBuf::from("/broken"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ))
    }
}

pub(crate) fn instant_options() -> StoreOptions {
    StoreOptions::default().with_latency(Duration::ZERO)
}

/// Open a store over `storage` with the built-in accounts and no latency.
pub(crate) fn open_store(storage: impl SessionStorage + 'static) -> SessionStore {
    SessionStore::open(
        Arc::new(FixedCredentialTable::mefit()),
        Arc::new(storage),
        instant_options(),
    )
}

/// Number of quarantined copies of `KEY` in `dir`.
pub(crate) fn backup_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("mefit_user.json.corrupted.")
        })
        .count()
}

use crate::storage::{
    SessionStorage, validate_key,
    error::{Result as StorageResult, StorageError},
};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S%.3f";

/// One JSON file per key under a directory.
///
/// Writes go through a temp file, fsync and rename so a crash mid-write
/// never leaves a half-written snapshot behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Gets the file path backing `key`.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SessionStorage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        if !path.exists() {
            debug!("No session file at {path:?}");
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|e| StorageError::file_read(path, e))?;

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StorageError::corrupted(key, e.to_string()))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self
            .dir
            .join(format!("{key}.json.tmp.{}", std::process::id()));

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.write_all(value.as_bytes())
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        debug!("Wrote session file {final_path:?}");
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed session file {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }

    /// Renames `<key>.json` to `<key>.json.corrupted.{timestamp}` for debugging.
    ///
    /// An existing backup is never overwritten; a counter is appended instead.
    fn quarantine(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(());
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT).to_string();
        let base = format!("{key}.json.corrupted.{timestamp}");
        let mut backup_path = self.dir.join(&base);
        let mut attempt = 1u32;
        while backup_path.exists() {
            backup_path = self.dir.join(format!("{base}.{attempt}"));
            attempt += 1;
        }

        fs::rename(&path, &backup_path).map_err(|e| StorageError::backup_failed(path, e))?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(())
    }
}

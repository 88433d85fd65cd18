use crate::{LoadResult, SessionStorage, StorageError, StorageResult};

use mf_core::Identity;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Serialized form of the current identity, as held under the storage key.
///
/// Field names match the web client's `mefit_user` value. Values written
/// before `schemaVersion` existed are read as version 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default = "unversioned_schema")]
    pub schema_version: u32,
    #[serde(flatten)]
    pub identity: Identity,
}

fn unversioned_schema() -> u32 {
    1
}

impl SessionSnapshot {
    pub fn new(identity: Identity) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            identity,
        }
    }

    pub fn encode(&self) -> StorageResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a stored value. Unknown future schema versions are rejected.
    #[track_caller]
    pub fn decode(key: &str, raw: &str) -> StorageResult<Self> {
        let snapshot = serde_json::from_str::<Self>(raw)
            .map_err(|e| StorageError::corrupted(key, e.to_string()))?;

        if snapshot.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(StorageError::corrupted(
                key,
                format!(
                    "unsupported schema version {} (expected <= {CURRENT_SCHEMA_VERSION})",
                    snapshot.schema_version
                ),
            ));
        }

        Ok(snapshot)
    }
}

/// Loads the snapshot under `key`.
///
/// Returns:
/// - `LoadResult { identity: Some(...), corruption_error: None }` - loaded successfully
/// - `LoadResult { identity: None, corruption_error: None }` - nothing stored (first launch)
/// - `LoadResult { identity: None, corruption_error: Some(...) }` - stored value is unreadable
///
/// A backend that reports [`StorageError::Corrupted`] yields a corruption
/// result. Any other read failure is logged and reported as "nothing stored".
pub fn load_snapshot(storage: &dyn SessionStorage, key: &str) -> LoadResult {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No session snapshot under '{key}' (first launch)");
            return LoadResult::default();
        }
        Err(e @ StorageError::Corrupted { .. }) => {
            warn!("Session snapshot corrupted: {e}");
            return LoadResult {
                identity: None,
                corruption_error: Some(e.to_string()),
            };
        }
        Err(e) => {
            warn!(
                "Failed to read session snapshot '{key}': {e}. {}",
                e.recovery_hint()
            );
            return LoadResult::default();
        }
    };

    match SessionSnapshot::decode(key, &raw) {
        Ok(snapshot) => {
            info!(
                "Loaded session: {} (schema v{})",
                snapshot.identity.id, snapshot.schema_version
            );
            LoadResult {
                identity: Some(snapshot.identity),
                corruption_error: None,
            }
        }
        Err(e) => {
            warn!("Session snapshot corrupted: {e}");
            LoadResult {
                identity: None,
                corruption_error: Some(e.to_string()),
            }
        }
    }
}

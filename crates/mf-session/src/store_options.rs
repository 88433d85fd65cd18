use crate::{DEFAULT_LATENCY, DEFAULT_STORAGE_KEY};

use std::time::Duration;

/// Session store settings (mirrors `mf_config::SessionConfig`).
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub storage_key: String,
    /// Artificial delay before sign-in/sign-up resolve. Zero disables it.
    pub latency: Duration,
}

impl StoreOptions {
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            latency: DEFAULT_LATENCY,
        }
    }
}

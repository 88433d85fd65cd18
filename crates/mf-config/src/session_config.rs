use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LATENCY_MS, DEFAULT_STORAGE_KEY, MAX_LATENCY_MS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub storage_key: String,
    pub latency_ms: u64,
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Same rule as mf_session::validate_key; keep the two in step.
        let key = self.storage_key.as_str();
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(ConfigError::session(format!(
                "storage_key '{key}' must be non-empty, use only [A-Za-z0-9_.-] and not start with '.'"
            )));
        }

        if self.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::session(format!(
                "latency_ms must be at most {MAX_LATENCY_MS}, got {}",
                self.latency_ms
            )));
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

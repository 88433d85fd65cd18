mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::{StorageBackend, StorageConfig};

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "MEFIT_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".mefit";
const DEFAULT_STORAGE_KEY: &str = "mefit_user";
const DEFAULT_LATENCY_MS: u64 = 1000;
const MAX_LATENCY_MS: u64 = 30_000;
const DEFAULT_STORAGE_DIRECTORY: &str = "session";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";

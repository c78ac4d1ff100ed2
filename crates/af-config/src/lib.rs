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
pub use storage_config::StorageConfig;

#[cfg(test)]
mod tests;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "AF_CONFIG_DIR";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_RETENTION_DAYS: usize = 7;
const MAX_LOG_RETENTION_DAYS: usize = 90;

const DEFAULT_STORAGE_FILENAME: &str = "identity.json";

const DEFAULT_SESSION_TITLE: &str = "Auto-Filling Active";
const MAX_SESSION_TITLE_LENGTH: usize = 64;

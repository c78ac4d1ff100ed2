use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_LEVEL, DEFAULT_LOG_RETENTION_DAYS, LogLevel,
    MAX_LOG_RETENTION_DAYS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Number of daily log files kept on the device
    pub retention_days: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            retention_days: DEFAULT_LOG_RETENTION_DAYS,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.retention_days == 0 || self.retention_days > MAX_LOG_RETENTION_DAYS {
            return Err(ConfigError::logging(format!(
                "retention_days must be 1-{MAX_LOG_RETENTION_DAYS}, got {}",
                self.retention_days
            )));
        }
        Ok(())
    }
}

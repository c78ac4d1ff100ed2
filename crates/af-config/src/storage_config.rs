use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Identity file name, relative to the app data directory
    pub filename: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            filename: String::from(DEFAULT_STORAGE_FILENAME),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let filename = self.filename.trim();
        if filename.is_empty() {
            return Err(ConfigError::storage("storage.filename cannot be empty"));
        }

        let path = std::path::Path::new(filename);
        if path.is_absolute() || filename.contains("..") {
            return Err(ConfigError::storage(
                "storage.filename must be relative and cannot contain '..'",
            ));
        }
        Ok(())
    }
}

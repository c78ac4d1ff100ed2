use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_TITLE, MAX_SESSION_TITLE_LENGTH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Title of the embedded form window
    pub title: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            title: String::from(DEFAULT_SESSION_TITLE),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let len = self.title.chars().count();
        if self.title.trim().is_empty() || len > MAX_SESSION_TITLE_LENGTH {
            return Err(ConfigError::session(format!(
                "session.title must be 1-{MAX_SESSION_TITLE_LENGTH} characters, got {len}"
            )));
        }
        Ok(())
    }
}

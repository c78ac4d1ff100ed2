use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, LoggingConfig,
    SessionConfig, StorageConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    /// Problems met while loading, logged by `log_summary`
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl Config {
    /// Load config for the application.
    ///
    /// Loading order:
    /// 1. Check for AF_CONFIG_DIR env var, else use `default_dir`
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply AF_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load(default_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir(default_dir).join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and validate, falling back to defaults on any error.
    ///
    /// The app has no place to report a broken config file before logging is
    /// up, so the failure is kept in `warnings` instead.
    pub fn load_or_default(default_dir: &Path) -> Self {
        let loaded = Self::load(default_dir).and_then(|config| {
            config.validate()?;
            Ok(config)
        });

        match loaded {
            Ok(config) => config,
            Err(e) => {
                let mut config = Config::default();
                config
                    .warnings
                    .push(format!("Using default configuration: {e}"));
                config
            }
        }
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AF_CONFIG_DIR env var > `default_dir` (the app data directory)
    pub fn config_dir(default_dir: &Path) -> PathBuf {
        match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_dir.to_path_buf(),
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.logging.validate()?;
        self.storage.validate()?;
        self.session.validate()?;
        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  logging: {} ({} days retained)",
            *self.logging.level, self.logging.retention_days
        );
        info!("  storage: {}", self.storage.filename);
        info!("  session: title={:?}", self.session.title);

        for warning in &self.warnings {
            warn!("{warning}");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Logging
        Self::apply_env_parse(
            &mut self.warnings,
            "AF_LOG_LEVEL",
            &mut self.logging.level,
        );
        Self::apply_env_parse(
            &mut self.warnings,
            "AF_LOG_RETENTION_DAYS",
            &mut self.logging.retention_days,
        );

        // Storage
        Self::apply_env_string("AF_STORAGE_FILENAME", &mut self.storage.filename);

        // Session
        Self::apply_env_string("AF_SESSION_TITLE", &mut self.session.title);
    }

    fn apply_env_string(key: &str, target: &mut String) {
        if let Ok(value) = std::env::var(key) {
            *target = value;
        }
    }

    fn apply_env_parse<T: FromStr>(warnings: &mut Vec<String>, key: &str, target: &mut T) {
        if let Ok(value) = std::env::var(key) {
            match value.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => warnings.push(format!("Ignoring {key}={value:?}: not a valid value")),
            }
        }
    }
}

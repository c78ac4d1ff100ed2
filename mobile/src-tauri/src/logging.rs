//! Logging setup with file rotation.

use af_config::LoggingConfig;

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "attendance-autofill";

/// Setup logging with console and rotating file output.
///
/// # Log Layers
/// - Console: Human-readable output (logcat / Xcode console on devices)
/// - File: daily rotation, `retention_days` files kept
///
/// `RUST_LOG` wins over the configured level when set.
pub fn setup_logging(
    data_dir: &Path,
    config: &LoggingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let logs_dir = logs_dir(data_dir);
    std::fs::create_dir_all(&logs_dir)?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(cfg!(desktop));

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(config.retention_days)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(&logs_dir)?;

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(config)));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Filter used when `RUST_LOG` is absent. At the default info level the
/// core crate logs at debug.
pub fn default_directives(config: &LoggingConfig) -> String {
    let level = config.level.as_directive();
    let core_level = if *config.level == log::LevelFilter::Info {
        "debug"
    } else {
        level
    };
    format!("{level},af_core={core_level}")
}

pub fn logs_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_DIR)
}

use af_core::SessionError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised while binding the session to the platform.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Invalid session URL {url:?}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Webview operation failed: {source} {location}")]
    Webview {
        #[source]
        source: tauri::Error,
        location: ErrorLocation,
    },

    #[error("Failed to read clipboard: {message} {location}")]
    Clipboard {
        message: String,
        location: ErrorLocation,
    },

    #[cfg(mobile)]
    #[error("Main webview unavailable: {message} {location}")]
    MainWebview {
        message: String,
        location: ErrorLocation,
    },
}

impl ShellError {
    #[track_caller]
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn webview(source: tauri::Error) -> Self {
        Self::Webview {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[cfg(mobile)]
    #[track_caller]
    pub fn main_webview(message: impl Into<String>) -> Self {
        Self::MainWebview {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::Session(e) => e.recovery_hint(),
            Self::InvalidUrl { .. } => "The link could not be opened. Copy it again and retry.",
            Self::Webview { .. } => "The form could not be displayed. Close it and try again.",
            Self::Clipboard { .. } => "The clipboard could not be read. Copy the link again.",
            #[cfg(mobile)]
            Self::MainWebview { .. } => "Restart the app and try again.",
        }
    }

    /// Message for IPC callers, with the recovery hint appended.
    pub fn to_command_error(&self) -> String {
        format!("{self}\n\nHint: {}", self.recovery_hint())
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;

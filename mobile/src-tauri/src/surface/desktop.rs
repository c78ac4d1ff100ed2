use super::{SESSION_WINDOW_LABEL, parse_session_url};
use crate::error::{Result as ShellResult, ShellError};

use af_core::SessionSurface;

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};
use tracing::info;

/// Shows `surface` in its own window, or navigates the existing one.
///
/// The script only depends on the identity, which can't change mid-session,
/// so an existing window just navigates.
pub fn open(app: &AppHandle, surface: &SessionSurface, title: &str) -> ShellResult<()> {
    let url = parse_session_url(&surface.url)?;

    if let Some(window) = app.get_webview_window(SESSION_WINDOW_LABEL) {
        window.navigate(url).map_err(ShellError::webview)?;
        info!("Session surface navigated");
        return Ok(());
    }

    WebviewWindowBuilder::new(app, SESSION_WINDOW_LABEL, WebviewUrl::External(url))
        .title(title)
        .initialization_script(surface.script.as_str())
        .build()
        .map_err(ShellError::webview)?;

    info!("Session surface opened");
    Ok(())
}

/// Tears the session window down, which also stops the injected script.
pub fn close(app: &AppHandle) -> ShellResult<()> {
    if let Some(window) = app.get_webview_window(SESSION_WINDOW_LABEL) {
        window.destroy().map_err(ShellError::webview)?;
        info!("Session surface closed");
    }
    Ok(())
}

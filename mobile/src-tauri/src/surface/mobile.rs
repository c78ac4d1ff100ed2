use super::{parse_session_url, session_bar_script};
use crate::MAIN_WINDOW_LABEL;
use crate::error::{Result as ShellResult, ShellError};

use af_core::SessionSurface;

use tauri::{AppHandle, Manager, Url, WebviewWindow};
use tracing::{debug, info};

/// The URL the main webview started on, so a session can return to it.
pub struct HomePage(pub Url);

/// Records the main webview's current URL as the app page.
pub fn remember_home_page(app: &AppHandle) -> ShellResult<()> {
    let url = main_webview(app)?.url().map_err(ShellError::webview)?;
    debug!("App page: {url}");
    app.manage(HomePage(url));
    Ok(())
}

/// Navigates the main webview to the form. The scripts follow once the page
/// has loaded, see `install_page_scripts`.
pub fn open(app: &AppHandle, surface: &SessionSurface) -> ShellResult<()> {
    let url = parse_session_url(&surface.url)?;
    main_webview(app)?
        .navigate(url)
        .map_err(ShellError::webview)?;
    info!("Session surface opened");
    Ok(())
}

/// Navigates the main webview back to the app page.
pub fn close(app: &AppHandle) -> ShellResult<()> {
    let home = home_page(app)?;
    main_webview(app)?
        .navigate(home)
        .map_err(ShellError::webview)?;
    info!("Session surface closed");
    Ok(())
}

/// Runs the auto-fill script and the session bar in the freshly loaded page.
pub fn install_page_scripts(
    app: &AppHandle,
    surface: &SessionSurface,
    title: &str,
) -> ShellResult<()> {
    let home = home_page(app)?;
    let webview = main_webview(app)?;
    webview
        .eval(surface.script.as_str())
        .map_err(ShellError::webview)?;
    webview
        .eval(session_bar_script(title, &home).as_str())
        .map_err(ShellError::webview)?;
    Ok(())
}

pub fn home_page(app: &AppHandle) -> ShellResult<Url> {
    app.try_state::<HomePage>()
        .map(|home| home.0.clone())
        .ok_or_else(|| ShellError::main_webview("the app page was never recorded"))
}

fn main_webview(app: &AppHandle) -> ShellResult<WebviewWindow> {
    app.get_webview_window(MAIN_WINDOW_LABEL)
        .ok_or_else(|| ShellError::main_webview("no main window"))
}

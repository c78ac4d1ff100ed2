//! The embedded browsing surface that hosts the form.
//!
//! Desktop shows the form in its own webview window with the auto-fill script
//! installed as an initialization script. Mobile runtimes host a single
//! webview, so there the main webview navigates to the form and the script is
//! evaluated after every page load, together with a bar for closing the session.

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

#[cfg(desktop)]
pub use desktop::{close, open};
#[cfg(mobile)]
pub use mobile::{HomePage, close, home_page, install_page_scripts, open, remember_home_page};

use crate::error::{Result as ShellResult, ShellError};

use tauri::Url;

/// Label of the desktop webview window showing the form.
pub const SESSION_WINDOW_LABEL: &str = "session";

#[cfg(any(mobile, test))]
const SESSION_BAR_ID: &str = "__attendanceAutofillBar";

#[cfg(any(mobile, test))]
const SESSION_BAR_TEMPLATE: &str = r#"(function () {
  if (document.getElementById("__SESSION_BAR_ID__")) {
    return;
  }
  var bar = document.createElement("div");
  bar.id = "__SESSION_BAR_ID__";
  bar.style.cssText = "position:fixed;top:0;left:0;right:0;z-index:2147483647;height:50px;" +
    "display:flex;align-items:center;justify-content:space-between;padding:0 20px;" +
    "background:#e8f5e9;border-bottom:1px solid #ccc;font:bold 16px system-ui,sans-serif;";
  var label = document.createElement("span");
  label.style.color = "green";
  label.textContent = "• " + __SESSION_TITLE__;
  var close = document.createElement("button");
  close.textContent = "CLOSE";
  close.style.cssText = "color:red;font-weight:bold;background:none;border:none;font-size:16px;";
  close.addEventListener("click", function () {
    window.location.href = __HOME_URL__;
  });
  bar.appendChild(label);
  bar.appendChild(close);
  (document.body || document.documentElement).appendChild(bar);
})();
true;
"#;

/// Whether `url` is the app's own page rather than a form page.
///
/// Compares scheme, host and port: custom schemes such as `tauri://` have
/// opaque origins that never compare equal.
#[cfg(any(mobile, test))]
pub fn is_app_page(home: &Url, url: &Url) -> bool {
    home.scheme() == url.scheme()
        && home.host_str() == url.host_str()
        && home.port_or_known_default() == url.port_or_known_default()
}

/// Bar shown above the form page with the session title and a close button
/// that returns to `home`.
#[cfg(any(mobile, test))]
pub fn session_bar_script(title: &str, home: &Url) -> String {
    SESSION_BAR_TEMPLATE
        .replace("__SESSION_BAR_ID__", SESSION_BAR_ID)
        .replace(
            "__SESSION_TITLE__",
            &serde_json::Value::from(title).to_string(),
        )
        .replace(
            "__HOME_URL__",
            &serde_json::Value::from(home.as_str()).to_string(),
        )
}

/// Parses an Active Link into a URL the webview can load.
///
/// The link detector only checks for a host fragment, so clipboard text such
/// as `forms.office.com/r/x` (no scheme) is rejected here.
pub fn parse_session_url(raw: &str) -> ShellResult<Url> {
    let url = Url::parse(raw).map_err(|e| ShellError::invalid_url(raw, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ShellError::invalid_url(
            raw,
            format!("unsupported scheme '{other}'"),
        )),
    }
}

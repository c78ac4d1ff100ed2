//! Platform sources of candidate links: deep links and the clipboard.

use crate::controller::SessionController;
use crate::error::{Result as ShellResult, ShellError};

use af_core::LinkSource;

use std::sync::{Arc, Mutex};

use tauri::{AppHandle, EventId, Listener, Url};
use tauri_plugin_clipboard_manager::ClipboardExt;
use tauri_plugin_deep_link::DeepLinkExt;
use tracing::{debug, warn};

const WRAPPED_URL_PARAM: &str = "url";

/// URLs the process was launched with, if any.
pub fn launch_urls(app: &AppHandle) -> Vec<String> {
    match app.deep_link().get_current() {
        Ok(urls) => urls
            .unwrap_or_default()
            .iter()
            .map(unwrap_deep_link)
            .collect(),
        Err(e) => {
            warn!("Failed to query launch URL: {e}");
            Vec::new()
        }
    }
}

/// The form URL a deep link carries.
///
/// Mobile app links deliver the form URL itself. The desktop scheme wraps it
/// as `attendance-autofill://open?url=<percent-encoded form URL>`.
pub fn unwrap_deep_link(url: &Url) -> String {
    if matches!(url.scheme(), "http" | "https") {
        return url.to_string();
    }

    url.query_pairs()
        .find(|(key, _)| key == WRAPPED_URL_PARAM)
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| url.to_string())
}

/// Current clipboard text.
pub fn read_clipboard(app: &AppHandle) -> ShellResult<String> {
    app.clipboard()
        .read_text()
        .map_err(|e| ShellError::clipboard(e.to_string()))
}

/// Listeners held for the application's lifetime, released on exit.
pub struct Subscriptions {
    ids: Mutex<Vec<EventId>>,
}

impl Subscriptions {
    /// Subscribes to runtime deep-link events.
    pub fn subscribe(app: &AppHandle, controller: Arc<SessionController>) -> Self {
        let handle = app.clone();
        let deep_link_id = app.deep_link().on_open_url(move |event| {
            let urls: Vec<String> = event.urls().iter().map(unwrap_deep_link).collect();
            debug!("Deep link event with {} URL(s)", urls.len());

            let app = handle.clone();
            let controller = controller.clone();
            tauri::async_runtime::spawn(async move {
                controller
                    .open_deep_links(&app, LinkSource::DeepLinkEvent, urls)
                    .await;
            });
        });

        Self {
            ids: Mutex::new(vec![deep_link_id]),
        }
    }

    /// Unlistens everything. Safe to call more than once.
    pub fn release(&self, app: &AppHandle) {
        let ids = std::mem::take(&mut *self.ids.lock().unwrap_or_else(|p| p.into_inner()));
        if ids.is_empty() {
            return;
        }
        debug!("Releasing {} subscription(s)", ids.len());
        for id in ids {
            app.unlisten(id);
        }
    }
}

//! Binds the `AppSession` state machine to the platform.
//!
//! Every transition runs under the session lock and ends in `publish`, which
//! brings the session webview in line with the new state and emits the
//! snapshot to the frontend.

use crate::error::Result as ShellResult;
use crate::surface_sync::{self, SurfaceAction};
use crate::{EVENT_VIEW_STATE_CHANGED, link_intake, prompts, surface};

use af_core::{
    AppSession, AppVisibility, ForegroundTracker, IdentityRecord, IdentityStore, LinkSource,
    ProbeOutcome, ProbeTrigger, ViewSnapshot,
};

use std::sync::Arc;

use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

pub struct SessionController {
    session: Mutex<AppSession>,
    foreground: Mutex<ForegroundTracker>,
    /// URL currently shown by the session webview
    opened_url: Mutex<Option<String>>,
    store: Arc<dyn IdentityStore>,
    session_title: String,
}

impl SessionController {
    pub fn new(store: Arc<dyn IdentityStore>, session_title: impl Into<String>) -> Self {
        Self {
            session: Mutex::new(AppSession::new()),
            foreground: Mutex::new(ForegroundTracker::default()),
            opened_url: Mutex::new(None),
            store,
            session_title: session_title.into(),
        }
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        self.session.lock().await.snapshot()
    }

    /// Cold start: read the store, then take the launch URL or, when it
    /// doesn't carry a forms link, probe the clipboard.
    pub async fn start(self: &Arc<Self>, app: &AppHandle) {
        {
            let mut session = self.session.lock().await;
            let loaded = self.store.load();
            match session.finish_loading(loaded) {
                Ok(view) => info!("Startup view: {view}"),
                Err(e) => warn!("{e}"),
            }
            self.publish(app, &mut session).await;
        }

        let launch_urls = link_intake::launch_urls(app);
        let opened = self
            .open_deep_links(app, LinkSource::LaunchDeepLink, launch_urls)
            .await;
        if !opened {
            self.probe_clipboard(app, ProbeTrigger::Automatic).await;
        }
    }

    /// Activates the first qualifying URL directly, without a prompt.
    ///
    /// Returns whether one of `urls` was opened.
    pub async fn open_deep_links(
        &self,
        app: &AppHandle,
        source: LinkSource,
        urls: Vec<String>,
    ) -> bool {
        if urls.is_empty() {
            return false;
        }

        let mut session = self.session.lock().await;
        let opened = urls
            .iter()
            .any(|url| session.open_link(source, url).is_some());

        if opened {
            self.publish(app, &mut session).await;
        } else {
            debug!("No forms link among {} deep link URL(s)", urls.len());
        }
        opened
    }

    /// Reads the clipboard and offers a forms link to the user.
    ///
    /// Does nothing, not even the clipboard read, while an Active Link is set.
    pub async fn probe_clipboard(self: &Arc<Self>, app: &AppHandle, trigger: ProbeTrigger) {
        if !self.session.lock().await.should_probe_clipboard() {
            debug!("Clipboard probe skipped");
            return;
        }

        let text = match link_intake::read_clipboard(app) {
            Ok(text) => text,
            Err(e) => {
                debug!("{e}");
                return;
            }
        };

        let mut session = self.session.lock().await;
        match session.probe_clipboard(&text, trigger) {
            ProbeOutcome::Prompt(_) => {
                self.publish(app, &mut session).await;

                let controller = Arc::clone(self);
                let handle = app.clone();
                prompts::confirm_clipboard_link(app, move |accepted| {
                    tauri::async_runtime::spawn(async move {
                        controller.resolve_prompt(&handle, accepted).await;
                    });
                });
            }
            outcome => debug!("Clipboard probe: {outcome:?}"),
        }
    }

    /// Applies the user's answer to the clipboard prompt.
    pub async fn resolve_prompt(&self, app: &AppHandle, accepted: bool) {
        let mut session = self.session.lock().await;
        if accepted {
            if let Err(e) = session.accept_clipboard_link() {
                warn!("{e}");
            }
        } else {
            session.decline_clipboard_link();
        }
        self.publish(app, &mut session).await;
    }

    /// Validates and persists the identity; on rejection the form stays up
    /// and the user sees an error dialog.
    pub async fn save_identity(
        &self,
        app: &AppHandle,
        record: IdentityRecord,
    ) -> ShellResult<ViewSnapshot> {
        let mut session = self.session.lock().await;
        let result = session.submit_identity(record, self.store.as_ref());

        if let Err(e) = &result {
            if e.is_validation() {
                prompts::show_error(app, e.recovery_hint());
            } else {
                error!("Failed to save identity: {e}");
                prompts::show_error(app, format!("Save failed. {}", e.recovery_hint()));
            }
        }

        self.publish(app, &mut session).await;
        result?;
        Ok(session.snapshot())
    }

    pub async fn edit_details(&self, app: &AppHandle) -> ShellResult<ViewSnapshot> {
        let mut session = self.session.lock().await;
        session.edit_details()?;
        self.publish(app, &mut session).await;
        Ok(session.snapshot())
    }

    pub async fn close_session(&self, app: &AppHandle) -> ShellResult<ViewSnapshot> {
        let mut session = self.session.lock().await;
        session.close_session()?;
        self.publish(app, &mut session).await;
        Ok(session.snapshot())
    }

    /// Window focus as a proxy for the app lifecycle.
    pub async fn focus_changed(self: &Arc<Self>, app: &AppHandle, focused: bool) {
        let next = if focused {
            AppVisibility::Active
        } else {
            AppVisibility::Inactive
        };

        let came_forward = self.foreground.lock().await.transition(next);
        if came_forward {
            debug!("App returned to foreground");
            self.probe_clipboard(app, ProbeTrigger::Automatic).await;
        }
    }

    /// The session surface went away, possibly closed by the user directly.
    pub async fn surface_destroyed(&self, app: &AppHandle) {
        let mut session = self.session.lock().await;
        self.opened_url.lock().await.take();

        if surface_sync::surface_gone(&mut session) {
            info!("Session surface closed by user");
            self.publish(app, &mut session).await;
        }
    }

    /// A page finished loading in the main webview.
    ///
    /// Back on the app page means the user left the form; any other page gets
    /// the auto-fill script and the session bar while a session is active.
    #[cfg(mobile)]
    pub async fn page_loaded(&self, app: &AppHandle, url: tauri::Url) {
        let home = match surface::home_page(app) {
            Ok(home) => home,
            Err(e) => {
                warn!("{e}");
                return;
            }
        };

        if surface::is_app_page(&home, &url) {
            if self.opened_url.lock().await.is_some() {
                self.surface_destroyed(app).await;
            }
            return;
        }

        let session = self.session.lock().await;
        if let Some(wanted) = session.session_surface()
            && let Err(e) = surface::install_page_scripts(app, &wanted, &self.session_title)
        {
            warn!("Failed to install page scripts: {e}");
        }
    }

    async fn publish(&self, app: &AppHandle, session: &mut AppSession) {
        let mut opened = self.opened_url.lock().await;

        let action = surface_sync::plan(opened.as_deref(), session);
        if let Err(e) = self.apply(app, action, &mut opened) {
            error!("Failed to show session: {e}");
            prompts::show_error(app, e.recovery_hint());

            let cleanup = surface_sync::abandon(opened.as_deref(), session);
            if let Err(e) = self.apply(app, cleanup, &mut opened) {
                warn!("{e}");
            }
        }
        drop(opened);

        let snapshot = session.snapshot();
        debug!("Emitting {EVENT_VIEW_STATE_CHANGED}: state={}", snapshot.state);
        app.emit(EVENT_VIEW_STATE_CHANGED, snapshot).ok();
    }

    fn apply(
        &self,
        app: &AppHandle,
        action: SurfaceAction,
        opened: &mut Option<String>,
    ) -> ShellResult<()> {
        match action {
            SurfaceAction::Open(wanted) => {
                #[cfg(desktop)]
                surface::open(app, &wanted, &self.session_title)?;
                #[cfg(mobile)]
                surface::open(app, &wanted)?;
                *opened = Some(wanted.url);
            }
            SurfaceAction::Close => {
                opened.take();
                surface::close(app)?;
            }
            SurfaceAction::Unchanged => {}
        }
        Ok(())
    }
}

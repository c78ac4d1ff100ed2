use crate::{
    autofill_script,
    identity::{IdentityRecord, IdentityStore},
    link_detector::{LinkSource, detect_link},
    session::{
        ProbeOutcome, ProbeTrigger, SessionError, SessionResult, SessionSurface, ViewSnapshot,
        ViewState,
    },
};

use log::{debug, info};

/// Application state: the in-memory identity, the Active Link and the view.
///
/// All mutation goes through the named transitions below. The view is derived
/// from the data after each transition, so `ActiveSession` is only ever shown
/// with a configured identity and an Active Link.
#[derive(Debug, Clone)]
pub struct AppSession {
    view: ViewState,
    identity: Option<IdentityRecord>,
    draft: IdentityRecord,
    active_link: Option<String>,
    editing: bool,
    pending_prompt: Option<String>,
    dismissed_link: Option<String>,
}

impl AppSession {
    pub fn new() -> Self {
        Self {
            view: ViewState::Loading,
            identity: None,
            draft: IdentityRecord::default(),
            active_link: None,
            editing: false,
            pending_prompt: None,
            dismissed_link: None,
        }
    }

    // === Accessors ===

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn identity(&self) -> Option<&IdentityRecord> {
        self.identity.as_ref()
    }

    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    pub fn pending_prompt(&self) -> Option<&str> {
        self.pending_prompt.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.identity.is_some()
    }

    /// Whether the clipboard is worth reading at all right now.
    pub fn should_probe_clipboard(&self) -> bool {
        self.active_link.is_none() && self.pending_prompt.is_none()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            state: self.view,
            url: self.active_link.clone(),
            draft: self.draft.clone(),
            prompt: self.pending_prompt.clone(),
        }
    }

    /// URL and script for the embedded surface, present only in `ActiveSession`.
    pub fn session_surface(&self) -> Option<SessionSurface> {
        if self.view != ViewState::ActiveSession {
            return None;
        }
        let (identity, url) = (self.identity.as_ref()?, self.active_link.as_ref()?);
        Some(SessionSurface {
            url: url.clone(),
            script: autofill_script::generate(identity),
        })
    }

    // === Transitions ===

    /// Loading -> SetupForm | Ready (| ActiveSession if a link arrived meanwhile).
    pub fn finish_loading(&mut self, loaded: Option<IdentityRecord>) -> SessionResult<ViewState> {
        if self.view != ViewState::Loading {
            return Err(SessionError::invalid_transition(self.view, "finish loading"));
        }

        let loaded = loaded.filter(IdentityRecord::is_configured);
        if let Some(record) = &loaded {
            self.draft = record.clone();
        }
        self.identity = loaded;

        // Leave Loading; settle() picks the real destination.
        self.view = ViewState::SetupForm;
        Ok(self.settle())
    }

    /// SetupForm -> Ready on a valid, persisted record.
    ///
    /// On rejection or write failure the view stays on the form and the
    /// previously stored record is untouched.
    pub fn submit_identity(
        &mut self,
        record: IdentityRecord,
        store: &dyn IdentityStore,
    ) -> SessionResult<ViewState> {
        if self.view != ViewState::SetupForm {
            return Err(SessionError::invalid_transition(self.view, "save details"));
        }

        self.draft = record.clone();
        store.save(&record)?;

        info!("Identity saved");
        self.identity = Some(record);
        self.editing = false;
        Ok(self.settle())
    }

    /// Ready -> SetupForm, prefilled with the current record.
    pub fn edit_details(&mut self) -> SessionResult<ViewState> {
        if self.view != ViewState::Ready {
            return Err(SessionError::invalid_transition(self.view, "edit details"));
        }

        self.editing = true;
        self.active_link = None;
        self.pending_prompt = None;
        if let Some(identity) = &self.identity {
            self.draft = identity.clone();
        }
        Ok(self.settle())
    }

    /// Activates a deep link directly, without asking.
    ///
    /// Returns `None` when the link doesn't qualify and nothing changed.
    pub fn open_link(&mut self, source: LinkSource, raw: &str) -> Option<ViewState> {
        let url = detect_link(source, raw)?;
        info!("Opening link from {source:?}");
        self.pending_prompt = None;
        self.active_link = Some(url);
        Some(self.settle())
    }

    /// Examines clipboard text and decides whether to prompt.
    ///
    /// Takes no action at all while an Active Link is set. Automatic probes
    /// stay quiet about the link the user last declined or closed, until the
    /// clipboard holds something else; a manual probe always offers it.
    pub fn probe_clipboard(&mut self, text: &str, trigger: ProbeTrigger) -> ProbeOutcome {
        if self.active_link.is_some() {
            return ProbeOutcome::Skipped;
        }
        if self.pending_prompt.is_some() {
            return ProbeOutcome::AlreadyPrompting;
        }

        let Some(url) = detect_link(LinkSource::Clipboard, text) else {
            self.dismissed_link = None;
            return ProbeOutcome::NoMatch;
        };

        if trigger == ProbeTrigger::Automatic
            && self.dismissed_link.as_deref() == Some(url.as_str())
        {
            debug!("Clipboard still holds a dismissed link");
            return ProbeOutcome::Dismissed;
        }

        self.dismissed_link = None;
        self.pending_prompt = Some(url.clone());
        ProbeOutcome::Prompt(url)
    }

    /// The user accepted the clipboard prompt.
    pub fn accept_clipboard_link(&mut self) -> SessionResult<ViewState> {
        let Some(url) = self.pending_prompt.take() else {
            return Err(SessionError::invalid_transition(self.view, "accept a link"));
        };

        // A deep link that landed while the dialog was open wins.
        if self.active_link.is_none() {
            info!("Opening link from clipboard");
            self.active_link = Some(url);
        }
        Ok(self.settle())
    }

    /// The user declined the clipboard prompt.
    pub fn decline_clipboard_link(&mut self) -> ViewState {
        if let Some(url) = self.pending_prompt.take() {
            self.dismissed_link = Some(url);
        }
        self.view
    }

    /// ActiveSession -> Ready, clearing the Active Link.
    pub fn close_session(&mut self) -> SessionResult<ViewState> {
        if self.view != ViewState::ActiveSession {
            return Err(SessionError::invalid_transition(self.view, "close the session"));
        }

        self.dismissed_link = self.active_link.take();
        Ok(self.settle())
    }

    fn settle(&mut self) -> ViewState {
        let next = match (&self.identity, &self.active_link) {
            _ if self.view == ViewState::Loading => ViewState::Loading,
            (None, _) => ViewState::SetupForm,
            _ if self.editing => ViewState::SetupForm,
            (Some(_), Some(_)) => ViewState::ActiveSession,
            (Some(_), None) => ViewState::Ready,
        };

        if next != self.view {
            debug!("View {} -> {}", self.view, next);
        }
        self.view = next;
        next
    }
}

impl Default for AppSession {
    fn default() -> Self {
        Self::new()
    }
}

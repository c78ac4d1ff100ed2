//! Drives an `AppSession` the way the mobile shell does, with scripted
//! clipboard contents and prompt answers.

use af_core::{
    AppSession, AppVisibility, FileIdentityStore, ForegroundTracker, IdentityRecord,
    IdentityStore, LinkSource, ProbeOutcome, ProbeTrigger, SessionResult, ViewState,
};

use std::path::Path;

pub struct Harness {
    pub session: AppSession,
    pub store: FileIdentityStore,
    pub clipboard: String,
    pub prompts_shown: Vec<String>,
    pub accept_prompts: bool,
    foreground: ForegroundTracker,
}

impl Harness {
    /// Cold start: read the store, then take the launch URL or probe the clipboard.
    pub fn launch(data_dir: &Path, launch_url: Option<&str>, clipboard: &str) -> Self {
        let store = FileIdentityStore::new(data_dir);
        let mut session = AppSession::new();
        session
            .finish_loading(store.load())
            .expect("fresh session is loading");

        let mut harness = Self {
            session,
            store,
            clipboard: clipboard.to_string(),
            prompts_shown: Vec::new(),
            accept_prompts: true,
            foreground: ForegroundTracker::default(),
        };

        match launch_url {
            Some(url) => {
                harness.session.open_link(LinkSource::LaunchDeepLink, url);
            }
            None => harness.probe_clipboard(ProbeTrigger::Automatic),
        }
        harness
    }

    pub fn view(&self) -> ViewState {
        self.session.view()
    }

    pub fn save(&mut self, roll: &str, name: &str, email: &str) -> SessionResult<ViewState> {
        let record = IdentityRecord::new(roll, name, email);
        self.session.submit_identity(record, &self.store)
    }

    pub fn go_background(&mut self) {
        self.foreground.transition(AppVisibility::Background);
    }

    pub fn come_foreground(&mut self) {
        if self.foreground.transition(AppVisibility::Active) {
            self.probe_clipboard(ProbeTrigger::Automatic);
        }
    }

    /// The "Check Clipboard Now" button.
    pub fn check_clipboard(&mut self) {
        self.probe_clipboard(ProbeTrigger::Manual);
    }

    fn probe_clipboard(&mut self, trigger: ProbeTrigger) {
        if !self.session.should_probe_clipboard() {
            return;
        }
        if let ProbeOutcome::Prompt(url) = self.session.probe_clipboard(&self.clipboard, trigger) {
            self.prompts_shown.push(url);
            if self.accept_prompts {
                self.session
                    .accept_clipboard_link()
                    .expect("prompt is pending");
            } else {
                self.session.decline_clipboard_link();
            }
        }
    }
}

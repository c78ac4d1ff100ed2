use serde::Serialize;

/// Screen the application is presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Identity store is being read
    Loading,
    /// Collecting the three identity fields
    SetupForm,
    /// Configured and waiting for a link
    Ready,
    /// Form page open with auto-fill injected
    ActiveSession,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::SetupForm => "setup_form",
            Self::Ready => "ready",
            Self::ActiveSession => "active_session",
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

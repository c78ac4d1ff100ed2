use crate::{identity::IdentityRecord, session::ViewState};

use serde::Serialize;

/// Frontend-facing view of the session, emitted after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub state: ViewState,
    /// Active Link, if any
    pub url: Option<String>,
    /// Prefill for the setup form
    pub draft: IdentityRecord,
    /// Clipboard link awaiting the user's answer
    pub prompt: Option<String>,
}

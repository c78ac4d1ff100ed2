pub mod autofill_script;
pub mod foreground;
pub mod identity;
pub mod link_detector;
pub mod session;

pub use autofill_script::{POLL_INTERVAL_MS, TARGET_FIELD_COUNT, generate as generate_autofill_script};
pub use foreground::{AppVisibility, ForegroundTracker};
pub use identity::{
    FileIdentityStore, IdentityError, IdentityRecord, IdentityResult, IdentityStore,
    MemoryIdentityStore,
};
pub use link_detector::{FORM_HOST_FRAGMENTS, LinkSource, detect_link, is_form_link, matched_fragment};
pub use session::{
    AppSession, ProbeOutcome, ProbeTrigger, SessionError, SessionResult, SessionSurface,
    ViewSnapshot, ViewState,
};

#[cfg(test)]
mod tests;

const DEFAULT_IDENTITY_FILENAME: &str = "identity.json";
const CORRUPTED_BACKUP_DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

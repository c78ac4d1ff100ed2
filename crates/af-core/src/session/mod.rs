mod app_session;
mod error;
mod probe_outcome;
mod probe_trigger;
mod session_surface;
mod view_snapshot;
mod view_state;

pub use app_session::AppSession;
pub use error::{Result as SessionResult, SessionError};
pub use probe_outcome::ProbeOutcome;
pub use probe_trigger::ProbeTrigger;
pub use session_surface::SessionSurface;
pub use view_snapshot::ViewSnapshot;
pub use view_state::ViewState;

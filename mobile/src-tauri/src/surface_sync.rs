//! Decides what the platform surface has to do to match the session.

use af_core::{AppSession, SessionSurface, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceAction {
    /// Show this surface, replacing whatever is on screen.
    Open(SessionSurface),
    /// Tear the surface down.
    Close,
    /// The screen already matches the session.
    Unchanged,
}

/// Compares the URL currently on screen with what the session wants.
pub fn plan(opened: Option<&str>, session: &AppSession) -> SurfaceAction {
    match (session.session_surface(), opened) {
        (Some(wanted), Some(current)) if wanted.url == current => SurfaceAction::Unchanged,
        (Some(wanted), _) => SurfaceAction::Open(wanted),
        (None, Some(_)) => SurfaceAction::Close,
        (None, None) => SurfaceAction::Unchanged,
    }
}

/// The surface could not be shown: end the session and plan the cleanup.
pub fn abandon(opened: Option<&str>, session: &mut AppSession) -> SurfaceAction {
    match session.close_session() {
        Ok(_) => plan(opened, session),
        Err(_) => SurfaceAction::Unchanged,
    }
}

/// The user closed the surface outside the app's own close action.
///
/// Returns whether this ended the session.
pub fn surface_gone(session: &mut AppSession) -> bool {
    session.view() == ViewState::ActiveSession && session.close_session().is_ok()
}

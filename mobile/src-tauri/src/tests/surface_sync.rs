use crate::surface_sync::{SurfaceAction, abandon, plan, surface_gone};

use af_core::{AppSession, IdentityRecord, LinkSource, ViewState};

use googletest::prelude::*;

const FORM_URL: &str = "https://forms.office.com/r/xyz";
const OTHER_URL: &str = "https://forms.microsoft.com/r/other";

fn ready_session() -> AppSession {
    let mut session = AppSession::new();
    session
        .finish_loading(Some(IdentityRecord::new("21CS001", "A B", "ab@x.edu")))
        .unwrap();
    session
}

fn active_session(url: &str) -> AppSession {
    let mut session = ready_session();
    session.open_link(LinkSource::DeepLinkEvent, url).unwrap();
    session
}

// =========================================================================
// plan
// =========================================================================

#[test]
fn given_active_session_and_nothing_shown_when_plan_then_open_with_script() {
    let session = active_session(FORM_URL);

    let action = plan(None, &session);

    match action {
        SurfaceAction::Open(surface) => {
            assert_eq!(surface.url, FORM_URL);
            assert_that!(surface.script, contains_substring("21CS001"));
        }
        other => panic!("Expected Open, got {other:?}"),
    }
}

#[test]
fn given_same_url_shown_when_plan_then_unchanged() {
    let session = active_session(FORM_URL);

    assert_eq!(plan(Some(FORM_URL), &session), SurfaceAction::Unchanged);
}

#[test]
fn given_other_url_shown_when_plan_then_open_new_url() {
    let session = active_session(FORM_URL);

    let action = plan(Some(OTHER_URL), &session);

    assert!(matches!(action, SurfaceAction::Open(surface) if surface.url == FORM_URL));
}

#[test]
fn given_ready_and_surface_shown_when_plan_then_close() {
    let session = ready_session();

    assert_eq!(plan(Some(FORM_URL), &session), SurfaceAction::Close);
}

#[test]
fn given_ready_and_nothing_shown_when_plan_then_unchanged() {
    let session = ready_session();

    assert_eq!(plan(None, &session), SurfaceAction::Unchanged);
}

// =========================================================================
// abandon
// =========================================================================

#[test]
fn given_open_failed_with_nothing_shown_when_abandon_then_ready_and_unchanged() {
    let mut session = active_session(FORM_URL);

    let cleanup = abandon(None, &mut session);

    assert_eq!(cleanup, SurfaceAction::Unchanged);
    assert_that!(session.view(), eq(ViewState::Ready));
    assert_that!(session.active_link(), none());
}

#[test]
fn given_navigation_failed_over_old_surface_when_abandon_then_close() {
    let mut session = active_session(FORM_URL);

    let cleanup = abandon(Some(OTHER_URL), &mut session);

    assert_eq!(cleanup, SurfaceAction::Close);
    assert_that!(session.view(), eq(ViewState::Ready));
}

#[test]
fn given_not_in_session_when_abandon_then_unchanged() {
    let mut session = ready_session();

    assert_eq!(abandon(None, &mut session), SurfaceAction::Unchanged);
    assert_that!(session.view(), eq(ViewState::Ready));
}

// =========================================================================
// surface_gone
// =========================================================================

#[test]
fn given_active_session_when_surface_gone_then_session_closed() {
    let mut session = active_session(FORM_URL);

    assert!(surface_gone(&mut session));
    assert_that!(session.view(), eq(ViewState::Ready));
    assert_eq!(plan(None, &session), SurfaceAction::Unchanged);
}

#[test]
fn given_ready_when_surface_gone_then_nothing_to_close() {
    let mut session = ready_session();

    assert!(!surface_gone(&mut session));
    assert_that!(session.view(), eq(ViewState::Ready));
}

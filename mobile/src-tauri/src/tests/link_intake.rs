use crate::link_intake::unwrap_deep_link;

use af_core::{LinkSource, detect_link};

use tauri::Url;

#[test]
fn given_app_link_when_unwrap_then_form_url_itself() {
    let url = Url::parse("https://forms.office.com/r/xyz").unwrap();

    assert_eq!(unwrap_deep_link(&url), "https://forms.office.com/r/xyz");
}

#[test]
fn given_desktop_scheme_with_encoded_url_when_unwrap_then_form_url() {
    let url = Url::parse(
        "attendance-autofill://open?url=https%3A%2F%2Fforms.office.com%2Fr%2Fxyz%3Fa%3D1",
    )
    .unwrap();

    assert_eq!(unwrap_deep_link(&url), "https://forms.office.com/r/xyz?a=1");
}

#[test]
fn given_desktop_scheme_link_when_unwrapped_then_detector_accepts_it() {
    let url =
        Url::parse("attendance-autofill://open?url=https%3A%2F%2Fforms.office.com%2Fr%2Fxyz")
            .unwrap();

    let detected = detect_link(LinkSource::LaunchDeepLink, &unwrap_deep_link(&url));

    assert_eq!(detected.as_deref(), Some("https://forms.office.com/r/xyz"));
}

#[test]
fn given_desktop_scheme_without_url_param_when_unwrap_then_unchanged_and_rejected() {
    let url = Url::parse("attendance-autofill://open").unwrap();

    let unwrapped = unwrap_deep_link(&url);

    assert_eq!(unwrapped, "attendance-autofill://open");
    assert_eq!(detect_link(LinkSource::LaunchDeepLink, &unwrapped), None);
}

//! Recognizes links to the supported forms provider.
//!
//! Matching is a case-sensitive substring check against [`FORM_HOST_FRAGMENTS`].
//! It does not parse the URL, so a fragment appearing in the path or query of
//! an unrelated site also matches.

use log::debug;

/// Host fragments of the forms provider, one per known domain variant.
pub const FORM_HOST_FRAGMENTS: [&str; 3] = [
    "forms.office.com",
    "forms.microsoft.com",
    "forms.cloud.microsoft",
];

const HTTP_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Where a candidate link came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSource {
    /// URL the process was launched with.
    LaunchDeepLink,
    /// URL delivered while the process was running.
    DeepLinkEvent,
    /// Text read from the clipboard.
    Clipboard,
}

/// Returns the allow-list entry contained in `candidate`, if any.
pub fn matched_fragment(candidate: &str) -> Option<&'static str> {
    FORM_HOST_FRAGMENTS
        .iter()
        .copied()
        .find(|fragment| candidate.contains(fragment))
}

pub fn is_form_link(candidate: &str) -> bool {
    matched_fragment(candidate).is_some()
}

/// Applies the match rule for `source` and returns the link to activate.
///
/// Deep links must be http(s) URLs. Clipboard text is trimmed first.
pub fn detect_link(source: LinkSource, raw: &str) -> Option<String> {
    let candidate = match source {
        LinkSource::LaunchDeepLink | LinkSource::DeepLinkEvent => {
            if !has_http_scheme(raw) {
                debug!("Ignoring non-http deep link from {source:?}");
                return None;
            }
            raw
        }
        LinkSource::Clipboard => raw.trim(),
    };

    if candidate.is_empty() {
        return None;
    }

    let fragment = matched_fragment(candidate)?;
    debug!("Detected forms link ({fragment}) from {source:?}");
    Some(candidate.to_string())
}

fn has_http_scheme(raw: &str) -> bool {
    HTTP_SCHEMES.iter().any(|scheme| {
        raw.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

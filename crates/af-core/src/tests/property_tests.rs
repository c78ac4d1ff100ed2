use crate::{
    AppSession, FORM_HOST_FRAGMENTS, IdentityRecord, LinkSource, ProbeTrigger, ViewState,
    generate_autofill_script, is_form_link,
};

use proptest::prelude::*;

// =========================================================================
// Property-Based Tests - Match rule
// =========================================================================

proptest! {
    #[test]
    fn given_fragment_anywhere_when_matched_then_true(
        prefix in ".{0,20}",
        suffix in ".{0,20}",
        index in 0usize..3,
    ) {
        let candidate = format!("{prefix}{}{suffix}", FORM_HOST_FRAGMENTS[index]);
        prop_assert!(is_form_link(&candidate));
    }

    #[test]
    fn given_text_without_dots_when_matched_then_false(candidate in "[a-zA-Z0-9:/ ]{0,60}") {
        prop_assert!(!is_form_link(&candidate));
    }
}

// =========================================================================
// Property-Based Tests - Identity and script
// =========================================================================

proptest! {
    #[test]
    fn given_non_blank_fields_when_validated_then_succeeds(
        roll in "[A-Z0-9]{1,12}",
        name in "[a-zA-Z][a-zA-Z ]{0,30}",
        email in "[a-z]{1,10}@[a-z]{1,10}\\.edu",
    ) {
        prop_assert!(IdentityRecord::new(roll, name, email).validate().is_ok());
    }

    #[test]
    fn given_whitespace_field_when_validated_then_fails(
        blank in r"\s{0,10}",
        index in 0usize..3,
    ) {
        let mut values = ["r".to_string(), "n".to_string(), "e".to_string()];
        values[index] = blank;
        let [roll, name, email] = values;
        prop_assert!(IdentityRecord::new(roll, name, email).validate().is_err());
    }

    #[test]
    fn given_any_record_when_generated_twice_then_identical(
        roll in ".{0,20}",
        name in ".{0,20}",
        email in ".{0,20}",
    ) {
        let record = IdentityRecord::new(roll, name, email);
        prop_assert_eq!(generate_autofill_script(&record), generate_autofill_script(&record));
    }
}

// =========================================================================
// Property-Based Tests - View invariant
// =========================================================================

#[derive(Debug, Clone)]
enum Action {
    DeepLink(bool),
    Probe(bool),
    Accept,
    Decline,
    Close,
    Edit,
    Save(bool),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        any::<bool>().prop_map(Action::DeepLink),
        any::<bool>().prop_map(Action::Probe),
        Just(Action::Accept),
        Just(Action::Decline),
        Just(Action::Close),
        Just(Action::Edit),
        any::<bool>().prop_map(Action::Save),
    ]
}

proptest! {
    #[test]
    fn given_any_action_sequence_when_active_session_then_configured_with_link(
        configured in any::<bool>(),
        actions in proptest::collection::vec(action(), 0..40),
    ) {
        let store = crate::MemoryIdentityStore::new();
        let mut session = AppSession::new();
        let loaded = configured.then(|| IdentityRecord::new("21CS001", "A B", "ab@x.edu"));
        session.finish_loading(loaded).unwrap();

        for action in actions {
            match action {
                Action::DeepLink(matching) => {
                    let url = if matching { "https://forms.office.com/r/x" } else { "https://a.b" };
                    session.open_link(LinkSource::DeepLinkEvent, url);
                }
                Action::Probe(matching) => {
                    let text = if matching { "https://forms.microsoft.com/r/y" } else { "hello" };
                    session.probe_clipboard(text, ProbeTrigger::Automatic);
                }
                Action::Accept => { let _ = session.accept_clipboard_link(); }
                Action::Decline => { session.decline_clipboard_link(); }
                Action::Close => { let _ = session.close_session(); }
                Action::Edit => { let _ = session.edit_details(); }
                Action::Save(valid) => {
                    let record = if valid {
                        IdentityRecord::new("1", "n", "e")
                    } else {
                        IdentityRecord::default()
                    };
                    let _ = session.submit_identity(record, &store);
                }
            }

            if session.view() == ViewState::ActiveSession {
                prop_assert!(session.is_configured());
                prop_assert!(session.active_link().is_some());
                prop_assert!(session.session_surface().is_some());
            }
            if session.view() == ViewState::Ready {
                prop_assert!(session.active_link().is_none());
            }
        }
    }
}

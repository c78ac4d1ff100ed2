use crate::commands::command_error;
use crate::error::ShellError;

use af_core::{IdentityError, SessionError, ViewState};

use googletest::prelude::*;

#[test]
fn given_validation_error_when_command_error_then_includes_fill_all_hint() {
    let e = ShellError::from(SessionError::from(IdentityError::validation("email")));

    let message = command_error("save identity", &e);

    assert_that!(message, contains_substring("'email' must not be empty"));
    assert_that!(message, contains_substring("Hint: Please fill all fields."));
}

#[test]
fn given_invalid_transition_when_command_error_then_names_state() {
    let e = ShellError::from(SessionError::invalid_transition(
        ViewState::Ready,
        "close the session",
    ));

    let message = command_error("close session", &e);

    assert_that!(
        message,
        contains_substring("Cannot close the session while in ready state")
    );
    assert_that!(message, contains_substring("Hint: "));
}

#[test]
fn given_clipboard_error_when_recovery_hint_then_mentions_copy() {
    let e = ShellError::clipboard("no text");

    assert_that!(e.recovery_hint(), contains_substring("Copy the link again"));
}

#[test]
fn given_any_shell_error_when_to_command_error_then_separates_hint() {
    let errors = vec![
        ShellError::clipboard("empty"),
        ShellError::invalid_url("x", "relative URL without a base"),
        ShellError::from(SessionError::from(IdentityError::validation("roll"))),
    ];

    for e in errors {
        let message = e.to_command_error();
        assert!(message.contains("\n\nHint: "), "missing hint in {message:?}");
    }
}

use crate::tests::sample_record;
use crate::{IdentityRecord, POLL_INTERVAL_MS, generate_autofill_script};

use googletest::prelude::*;

#[test]
fn given_same_record_when_generate_twice_then_byte_identical() {
    let record = sample_record();

    assert_eq!(
        generate_autofill_script(&record),
        generate_autofill_script(&record.clone())
    );
}

#[test]
fn given_record_when_generate_then_embeds_values_in_form_order() {
    let script = generate_autofill_script(&sample_record());

    assert_that!(
        script,
        contains_substring(r#"var values = ["21CS001", "A B", "ab@x.edu"];"#)
    );
}

#[test]
fn given_record_when_generate_then_no_placeholders_remain() {
    let script = generate_autofill_script(&sample_record());

    assert!(!script.contains("__AUTOFILL_"));
    assert_that!(script, contains_substring(format!("attemptFill, {POLL_INTERVAL_MS})")));
    assert_that!(script, contains_substring("inputs.length < 3"));
}

#[test]
fn given_record_when_generate_then_dispatches_bubbling_input_and_change() {
    let script = generate_autofill_script(&sample_record());

    assert_that!(
        script,
        contains_substring(r#"new Event("input", { bubbles: true })"#)
    );
    assert_that!(
        script,
        contains_substring(r#"new Event("change", { bubbles: true })"#)
    );
    assert_that!(
        script,
        contains_substring("getOwnPropertyDescriptor(window.HTMLInputElement.prototype, \"value\").set")
    );
}

#[test]
fn given_record_when_generate_then_targets_text_and_email_inputs() {
    let script = generate_autofill_script(&sample_record());

    assert_that!(
        script,
        contains_substring(r#"el.type === "text" || el.type === "email""#)
    );
}

#[test]
fn given_values_with_quotes_when_generate_then_escaped_as_json() {
    let record = IdentityRecord::new("1\"); alert(1); (\"", "O'Brien\\", "a\nb@x.edu");

    let script = generate_autofill_script(&record);

    assert_that!(
        script,
        contains_substring(r#"["1\"); alert(1); (\"", "O'Brien\\", "a\nb@x.edu"]"#)
    );
}

#[test]
fn given_record_when_generate_then_ends_with_true_expression() {
    let script = generate_autofill_script(&sample_record());

    assert!(script.trim_end().ends_with("true;"));
}

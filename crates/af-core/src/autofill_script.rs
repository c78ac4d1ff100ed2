//! Script injected into every page of the session webview.
//!
//! The script is a fixed template; the only inputs are the three identity
//! values, embedded as JSON string literals. It talks to nothing: once
//! installed it polls the page and fills fields until the page goes away.

use crate::identity::IdentityRecord;

use serde_json::Value;

/// Delay between fill attempts inside the page.
pub const POLL_INTERVAL_MS: u32 = 1000;

/// Number of leading text/email inputs the script fills.
pub const TARGET_FIELD_COUNT: usize = 3;

const VALUES_PLACEHOLDER: &str = "__AUTOFILL_VALUES__";
const COUNT_PLACEHOLDER: &str = "__AUTOFILL_COUNT__";
const INTERVAL_PLACEHOLDER: &str = "__AUTOFILL_INTERVAL_MS__";

const SCRIPT_TEMPLATE: &str = r#"(function () {
  if (window.__attendanceAutofillInstalled) {
    return;
  }
  window.__attendanceAutofillInstalled = true;

  var values = [__AUTOFILL_VALUES__];
  var valueSetter = Object.getOwnPropertyDescriptor(window.HTMLInputElement.prototype, "value").set;

  function attemptFill() {
    var inputs = Array.prototype.filter.call(document.querySelectorAll("input"), function (el) {
      return el.type === "text" || el.type === "email";
    });
    if (inputs.length < __AUTOFILL_COUNT__) {
      return;
    }
    values.forEach(function (value, index) {
      var input = inputs[index];
      if (input.value !== value) {
        valueSetter.call(input, value);
        input.dispatchEvent(new Event("input", { bubbles: true }));
        input.dispatchEvent(new Event("change", { bubbles: true }));
      }
    });
  }

  window.setInterval(attemptFill, __AUTOFILL_INTERVAL_MS__);
})();
true;
"#;

/// Builds the auto-fill script for `record`.
///
/// Deterministic: the same record always yields the same bytes.
pub fn generate(record: &IdentityRecord) -> String {
    let values = record
        .values()
        .map(|value| Value::from(value).to_string())
        .join(", ");

    SCRIPT_TEMPLATE
        .replace(VALUES_PLACEHOLDER, &values)
        .replace(COUNT_PLACEHOLDER, &TARGET_FIELD_COUNT.to_string())
        .replace(INTERVAL_PLACEHOLDER, &POLL_INTERVAL_MS.to_string())
}

//! Unit tests for af-core.
//!
//! These tests can access crate internals via `use crate::`.

mod autofill_script;
mod property_tests;

use crate::IdentityRecord;

pub(crate) fn sample_record() -> IdentityRecord {
    IdentityRecord::new("21CS001", "A B", "ab@x.edu")
}

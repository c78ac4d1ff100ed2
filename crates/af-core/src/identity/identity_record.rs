use crate::identity::error::{IdentityError, Result as IdentityResult};

use serde::{Deserialize, Serialize};

/// The three values the auto-fill script writes into a form, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub roll: String,
    pub name: String,
    pub email: String,
}

impl IdentityRecord {
    pub fn new(roll: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            roll: roll.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// True when every field holds something other than whitespace.
    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }

    /// Rejects the record if any field is empty or whitespace-only.
    ///
    /// Reports the first offending field in form order.
    #[track_caller]
    pub fn validate(&self) -> IdentityResult<()> {
        for (field, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(IdentityError::validation(field));
            }
        }
        Ok(())
    }

    /// Values in the order the form presents them: roll, name, email.
    pub fn values(&self) -> [&str; 3] {
        [&self.roll, &self.name, &self.email]
    }

    fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("roll", &self.roll),
            ("name", &self.name),
            ("email", &self.email),
        ]
    }
}

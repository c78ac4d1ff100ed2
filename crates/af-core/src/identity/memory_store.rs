use crate::identity::{IdentityStore, error::Result as IdentityResult, identity_record::IdentityRecord};

use std::sync::Mutex;

/// Non-persistent store, for previews and tests.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    record: Mutex<Option<IdentityRecord>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: IdentityRecord) -> Self {
        Self {
            record: Mutex::new(Some(record)),
        }
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Option<IdentityRecord> {
        let guard = self.record.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        guard.clone().filter(IdentityRecord::is_configured)
    }

    fn persist(&self, record: &IdentityRecord) -> IdentityResult<()> {
        let mut guard = self.record.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(record.clone());
        Ok(())
    }
}

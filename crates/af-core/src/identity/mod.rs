pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod identity_record;
pub(crate) mod memory_store;

pub use error::{IdentityError, Result as IdentityResult};
pub use file_store::FileIdentityStore;
pub use identity_record::IdentityRecord;
pub use memory_store::MemoryIdentityStore;

/// Durable home of the single identity record.
///
/// There is one in-process caller at a time; implementations need no
/// coordination between concurrent writers.
pub trait IdentityStore: Send + Sync {
    /// Returns the stored record, or `None` if nothing usable is stored.
    ///
    /// Never fails: unreadable or malformed data reads as "not configured".
    fn load(&self) -> Option<IdentityRecord>;

    /// Writes an already validated record, replacing whatever was stored.
    fn persist(&self, record: &IdentityRecord) -> IdentityResult<()>;

    /// Validates then persists. Leaves the stored record untouched on rejection.
    fn save(&self, record: &IdentityRecord) -> IdentityResult<()> {
        record.validate()?;
        self.persist(record)
    }
}

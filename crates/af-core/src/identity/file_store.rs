use crate::{
    CORRUPTED_BACKUP_DATE_FORMAT, DEFAULT_IDENTITY_FILENAME,
    identity::{
        IdentityStore,
        error::{IdentityError, Result as IdentityResult},
        identity_record::IdentityRecord,
    },
};

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::{debug, info, warn};

/// Stores the identity record as a JSON file inside a data directory.
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    dir: PathBuf,
    filename: String,
}

impl FileIdentityStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_filename(dir, DEFAULT_IDENTITY_FILENAME)
    }

    pub fn with_filename(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            filename: filename.into(),
        }
    }

    /// Full path of the identity file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    /// Reads and parses the identity file.
    ///
    /// Returns:
    /// - `Ok(None)` - file doesn't exist (first launch)
    /// - `Ok(Some(...))` - parsed successfully, possibly with empty fields
    /// - `Err(Corrupted)` - file exists but is not a valid record
    pub fn read(&self) -> IdentityResult<Option<IdentityRecord>> {
        let path = self.path();

        if !path.exists() {
            info!("No identity file at {path:?} (first launch)");
            return Ok(None);
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| IdentityError::file_read(path.clone(), e))?;

        serde_json::from_str::<IdentityRecord>(&contents)
            .map(Some)
            .map_err(|e| IdentityError::corrupted(path, e.to_string()))
    }

    /// Backs up a corrupted identity file for debugging.
    ///
    /// Renames `identity.json` to `identity.json.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> IdentityResult<Option<PathBuf>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(CORRUPTED_BACKUP_DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{}.corrupted.{timestamp}", self.filename));

        fs::rename(&path, &backup_path).map_err(IdentityError::backup_failed)?;

        warn!("Backed up corrupted identity to {backup_path:?}");
        Ok(Some(backup_path))
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> Option<IdentityRecord> {
        match self.read() {
            Ok(Some(record)) if record.is_configured() => {
                info!("Loaded identity (roll: {} chars)", record.roll.chars().count());
                Some(record)
            }
            Ok(Some(_)) => {
                debug!("Stored identity has empty fields; treating as not configured");
                None
            }
            Ok(None) => None,
            Err(e @ IdentityError::Corrupted { .. }) => {
                warn!("{e}");
                if let Err(backup_err) = self.backup_corrupted() {
                    warn!("{backup_err}");
                }
                None
            }
            Err(e) => {
                warn!("{e}");
                None
            }
        }
    }

    /// Saves using the atomic write pattern.
    ///
    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn persist(&self, record: &IdentityRecord) -> IdentityResult<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| IdentityError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path();
        let temp_path = self
            .dir
            .join(format!("{}.tmp.{}", self.filename, std::process::id()));

        let json = serde_json::to_string_pretty(record)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| IdentityError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            IdentityError::atomic_rename(temp_path, final_path.clone(), e)
        })?;

        info!("Saved identity to {final_path:?}");
        Ok(())
    }
}

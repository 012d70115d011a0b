//! JSON file-based storage backend.
//!
//! Each slot is a file named `<key>.json` inside the data directory. Writes go
//! to a temporary file first and are renamed into place, so a crash mid-write
//! leaves the previous value intact.
//!
//! # File Layout
//!
//! ```text
//! <data_dir>/
//! ├── rz_jobs.json          [{"id":1,"type":"Government","title":...}, ...]
//! └── rz_admissions.json    [{"id":1,"program":...,"lastDate":...}, ...]
//! ```

use crate::domain::error::{Result, RozgarError};
use crate::storage::backend::Storage;
use std::path::PathBuf;

/// JSON file storage backend.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by the single worker
/// thread, which is the only writer.
#[derive(Debug)]
pub struct JsonStorage {
    /// Directory holding one file per slot.
    data_dir: PathBuf,
}

impl JsonStorage {
    /// Opens a storage rooted at `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?data_dir, "initializing JSON storage");
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Rejects keys that would escape the data directory.
    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(RozgarError::Storage(format!("invalid slot key: {key:?}")));
        }
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

impl Storage for JsonStorage {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let _span = tracing::debug_span!("json_read_slot", key = %key).entered();

        let path = self.slot_path(key)?;
        if !path.exists() {
            tracing::debug!("slot file absent");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)?;
        tracing::debug!(bytes = contents.len(), "slot read");
        Ok(Some(contents))
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_write_slot",
            key = %key,
            bytes = value.len()
        ).entered();

        let path = self.slot_path(key)?;
        let tmp_path = path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!("slot saved");
        Ok(())
    }
}

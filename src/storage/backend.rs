//! Storage backend abstraction.
//!
//! A backend is a durable key-value store of raw string slots. It knows
//! nothing about jobs or admissions: encoding collections and the fallback
//! policy for unreadable data live in [`crate::storage::ListingStore`].

use crate::domain::error::Result;

/// Abstraction over durable key-value slots.
///
/// # Implementations
///
/// - [`crate::storage::JsonStorage`]: one JSON file per key (default)
/// - [`crate::storage::MemoryStorage`]: in-process map, lost on exit
///
/// # Examples
///
/// ```
/// use rozgarhub::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::default();
/// storage.write_slot("rz_jobs", "[]")?;
/// assert_eq!(storage.read_slot("rz_jobs")?.as_deref(), Some("[]"));
/// # Ok::<(), rozgarhub::RozgarError>(())
/// ```
pub trait Storage: Send {
    /// Reads the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored under the key yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn write_slot(&mut self, key: &str, value: &str) -> Result<()>;
}

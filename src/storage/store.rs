//! Collection-level load/save policy on top of a [`Storage`] backend.
//!
//! The board favors availability over durability:
//!
//! - [`ListingStore::load`] never fails. An absent, unreadable or corrupt slot
//!   yields the caller's default (the seed listings).
//! - [`ListingStore::save`] reports failures as a `Result`, but callers only
//!   log them; the in-memory collection stays authoritative for the session.
//!
//! Every save serializes the whole collection; there is no delta persistence.

use crate::domain::error::Result;
use crate::domain::{Admission, Job};
use crate::storage::backend::Storage;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Durable slot holding the jobs collection.
pub const JOBS_KEY: &str = "rz_jobs";

/// Durable slot holding the admissions collection.
pub const ADMISSIONS_KEY: &str = "rz_admissions";

/// Typed access to the two listing collections.
pub struct ListingStore {
    backend: Box<dyn Storage>,
}

impl ListingStore {
    #[must_use]
    pub fn new(backend: Box<dyn Storage>) -> Self {
        Self { backend }
    }

    /// Loads the collection stored under `key`, or `default` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use rozgarhub::storage::{ListingStore, MemoryStorage};
    ///
    /// let store = ListingStore::new(Box::new(MemoryStorage::default()));
    /// let numbers: Vec<u32> = store.load("missing", vec![1, 2]);
    /// assert_eq!(numbers, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: Vec<T>) -> Vec<T> {
        let _span = tracing::debug_span!("store_load", key = %key).entered();

        let raw = match self.backend.read_slot(key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                tracing::debug!("slot empty, using default collection");
                return default;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to read slot, using default collection");
                return default;
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(collection) => {
                tracing::debug!(count = collection.len(), "collection loaded");
                collection
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored collection is corrupt, using default collection");
                default
            }
        }
    }

    /// Serializes `collection` and stores it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn save<T: Serialize>(&mut self, key: &str, collection: &[T]) -> Result<()> {
        let _span = tracing::debug_span!("store_save",
            key = %key,
            count = collection.len()
        ).entered();

        let json = serde_json::to_string(collection)?;
        self.backend.write_slot(key, &json)?;

        tracing::debug!("collection saved");
        Ok(())
    }

    /// Loads the jobs collection, falling back to `default`.
    #[must_use]
    pub fn load_jobs(&self, default: Vec<Job>) -> Vec<Job> {
        self.load(JOBS_KEY, default)
    }

    /// Loads the admissions collection, falling back to `default`.
    #[must_use]
    pub fn load_admissions(&self, default: Vec<Admission>) -> Vec<Admission> {
        self.load(ADMISSIONS_KEY, default)
    }

    /// Persists the full jobs collection.
    ///
    /// # Errors
    ///
    /// See [`ListingStore::save`].
    pub fn save_jobs(&mut self, jobs: &[Job]) -> Result<()> {
        self.save(JOBS_KEY, jobs)
    }

    /// Persists the full admissions collection.
    ///
    /// # Errors
    ///
    /// See [`ListingStore::save`].
    pub fn save_admissions(&mut self, admissions: &[Admission]) -> Result<()> {
        self.save(ADMISSIONS_KEY, admissions)
    }
}

impl std::fmt::Debug for ListingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::RozgarError;
    use crate::domain::{sample_admissions, sample_jobs};
    use crate::storage::{JsonStorage, MemoryStorage};

    /// Backend whose every operation fails, like a full disk.
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn read_slot(&self, _key: &str) -> Result<Option<String>> {
            Err(RozgarError::Storage("disk unavailable".to_string()))
        }

        fn write_slot(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(RozgarError::Storage("quota exceeded".to_string()))
        }
    }

    fn memory_store() -> ListingStore {
        ListingStore::new(Box::new(MemoryStorage::default()))
    }

    #[test]
    fn test_absent_slot_yields_seed() {
        let store = memory_store();
        assert_eq!(store.load_jobs(sample_jobs()), sample_jobs());
        assert_eq!(store.load_admissions(sample_admissions()), sample_admissions());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut store = memory_store();
        let mut jobs = sample_jobs();
        jobs.remove(0);
        store.save_jobs(&jobs).unwrap();

        assert_eq!(store.load_jobs(sample_jobs()), jobs);
    }

    #[test]
    fn test_round_trip_through_fresh_json_session() {
        let dir = tempfile::tempdir().unwrap();
        let admissions = sample_admissions();
        {
            let backend = JsonStorage::new(dir.path().to_path_buf()).unwrap();
            let mut store = ListingStore::new(Box::new(backend));
            store.save_admissions(&admissions).unwrap();
        }

        let backend = JsonStorage::new(dir.path().to_path_buf()).unwrap();
        let store = ListingStore::new(Box::new(backend));
        assert_eq!(store.load_admissions(vec![]), admissions);
    }

    #[test]
    fn test_corrupt_slot_yields_seed() {
        let mut backend = MemoryStorage::default();
        backend.write_slot(JOBS_KEY, "{not json").unwrap();
        backend.write_slot(ADMISSIONS_KEY, "null").unwrap();
        let store = ListingStore::new(Box::new(backend));

        assert_eq!(store.load_jobs(sample_jobs()), sample_jobs());
        assert_eq!(store.load_admissions(sample_admissions()), sample_admissions());
    }

    #[test]
    fn test_empty_stored_collection_is_kept() {
        let mut store = memory_store();
        store.save_jobs(&[]).unwrap();
        assert!(store.load_jobs(sample_jobs()).is_empty());
    }

    #[test]
    fn test_backend_failures_degrade_gracefully() {
        let mut store = ListingStore::new(Box::new(BrokenStorage));
        assert_eq!(store.load_jobs(sample_jobs()), sample_jobs());
        assert!(store.save_jobs(&sample_jobs()).is_err());
    }

    #[test]
    fn test_reads_camel_case_records() {
        let mut backend = MemoryStorage::default();
        backend
            .write_slot(
                JOBS_KEY,
                r#"[{"id":1756400000000,"title":"Clerk","organization":"WAPDA","location":"Multan","salary":"30,000","details":"Walk-in"}]"#,
            )
            .unwrap();
        let store = ListingStore::new(Box::new(backend));

        let jobs = store.load_jobs(sample_jobs());
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].organization, "WAPDA");
        assert!(jobs[0].job_type.is_none());
        assert!(jobs[0].date_posted.is_empty());
    }
}

//! Worker thread owning the durable listing store.
//!
//! All slot I/O happens here so the plugin's render loop never touches the
//! filesystem. Zellij delivers messages to the worker in the order they were
//! posted, which makes the worker the single writer of both slots.

use crate::domain::error::{Result, RozgarError};
use crate::domain::{sample_admissions, sample_jobs, Admission, Job};
use crate::infrastructure::paths;
use crate::storage::{JsonStorage, ListingStore, MemoryStorage, ADMISSIONS_KEY, JOBS_KEY};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// The store is opened by the first `LoadListings` message, which tells the
/// worker where the data directory is.
#[derive(Serialize, Deserialize, Default)]
pub struct ListingsWorker {
    #[serde(skip)]
    store: Option<ListingStore>,
}

impl ListingsWorker {
    /// Creates a worker whose store is already open. Used by tests and by
    /// embedders that bypass the Zellij message loop.
    #[must_use]
    pub fn with_store(store: ListingStore) -> Self {
        Self { store: Some(store) }
    }

    /// Opens the JSON store in `data_dir`.
    ///
    /// When the directory cannot be created the session falls back to an
    /// in-memory store: listings keep working but are not persisted.
    fn open_store(data_dir: PathBuf) -> ListingStore {
        match JsonStorage::new(data_dir) {
            Ok(storage) => ListingStore::new(Box::new(storage)),
            Err(e) => {
                tracing::warn!(error = %e, "data directory unavailable, listings will not persist");
                ListingStore::new(Box::new(MemoryStorage::default()))
            }
        }
    }

    fn store(&mut self) -> &mut ListingStore {
        self.store
            .get_or_insert_with(|| Self::open_store(paths::get_data_dir()))
    }

    /// Turns a save result into a response with consistent logging.
    fn saved_response(key: &str, count: usize, result: Result<()>) -> WorkerResponse {
        match result {
            Ok(()) => {
                tracing::debug!(key = key, count = count, "collection persisted");
                WorkerResponse::Saved {
                    key: key.to_string(),
                    count,
                }
            }
            Err(e) => {
                tracing::debug!(key = key, error = %e, "failed to persist collection");
                WorkerResponse::Error {
                    message: format!("save {key}: {e}"),
                }
            }
        }
    }

    fn handle_load_listings(&mut self, data_dir: &str) -> WorkerResponse {
        let store = Self::open_store(PathBuf::from(data_dir));
        let jobs = store.load_jobs(sample_jobs());
        let admissions = store.load_admissions(sample_admissions());
        self.store = Some(store);

        tracing::debug!(
            job_count = jobs.len(),
            admission_count = admissions.len(),
            "listings loaded"
        );
        WorkerResponse::ListingsLoaded { jobs, admissions }
    }

    fn handle_save_jobs(&mut self, jobs: &[Job]) -> WorkerResponse {
        let result = self.store().save_jobs(jobs);
        Self::saved_response(JOBS_KEY, jobs.len(), result)
    }

    fn handle_save_admissions(&mut self, admissions: &[Admission]) -> WorkerResponse {
        let result = self.store().save_admissions(admissions);
        Self::saved_response(ADMISSIONS_KEY, admissions.len(), result)
    }

    /// Re-attaches the plugin-side span as the parent of worker spans.
    ///
    /// The returned guard must be held while the message is processed.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Decodes a request posted by the plugin thread.
    ///
    /// # Errors
    ///
    /// Returns [`RozgarError::Worker`] if the payload is not a valid request.
    pub fn parse_message(payload: &str) -> Result<WorkerMessage> {
        serde_json::from_str(payload)
            .map_err(|e| RozgarError::Worker(format!("invalid request: {e}")))
    }

    /// Processes one request and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadListings { data_dir, .. } => self.handle_load_listings(&data_dir),
            WorkerMessage::SaveJobs { jobs, .. } => self.handle_save_jobs(&jobs),
            WorkerMessage::SaveAdmissions { admissions, .. } => {
                self.handle_save_admissions(&admissions)
            }
        }
    }
}

/// Set once the worker thread has installed its tracing subscriber.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for ListingsWorker {
    /// Entry point for messages posted by the plugin thread.
    ///
    /// Deserializes the request, handles it, and posts the JSON response back
    /// under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        let worker_message = match Self::parse_message(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                post_response(message, &WorkerResponse::Error {
                    message: e.to_string(),
                });
                return;
            }
        };

        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            let mut config = crate::Config::default();
            if let WorkerMessage::LoadListings { data_dir, .. } = &worker_message {
                config.data_dir = PathBuf::from(data_dir);
            }
            crate::observability::init_tracing(&config);
        }

        let response = self.handle_message(worker_message);
        post_response(message, &response);
    }
}

/// Posts `response` back to the plugin under the request's message name.
fn post_response(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => {
            tracing::debug!(error = %e, "failed to serialize worker response");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobType;

    fn job(id: i64, title: &str) -> Job {
        Job {
            id,
            job_type: Some(JobType::Education),
            title: title.to_string(),
            organization: String::new(),
            location: String::new(),
            salary: String::new(),
            date_posted: String::new(),
            details: String::new(),
        }
    }

    #[test]
    fn test_first_load_returns_seed_listings() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker = ListingsWorker::default();
        let response = worker.handle_message(WorkerMessage::load_listings(
            dir.path().to_string_lossy().to_string(),
        ));

        assert_eq!(
            response,
            WorkerResponse::ListingsLoaded {
                jobs: sample_jobs(),
                admissions: sample_admissions(),
            }
        );
    }

    #[test]
    fn test_saved_jobs_are_loaded_next_session() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_string_lossy().to_string();

        let mut first = ListingsWorker::default();
        first.handle_message(WorkerMessage::load_listings(data_dir.clone()));
        let saved = first.handle_message(WorkerMessage::save_jobs(vec![job(42, "Lecturer")]));
        assert_eq!(
            saved,
            WorkerResponse::Saved {
                key: JOBS_KEY.to_string(),
                count: 1,
            }
        );

        let mut second = ListingsWorker::default();
        match second.handle_message(WorkerMessage::load_listings(data_dir)) {
            WorkerResponse::ListingsLoaded { jobs, admissions } => {
                assert_eq!(jobs, vec![job(42, "Lecturer")]);
                assert_eq!(admissions, sample_admissions());
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_save_with_memory_store() {
        let mut worker =
            ListingsWorker::with_store(ListingStore::new(Box::new(MemoryStorage::default())));
        let response = worker.handle_message(WorkerMessage::save_admissions(vec![]));
        assert_eq!(
            response,
            WorkerResponse::Saved {
                key: ADMISSIONS_KEY.to_string(),
                count: 0,
            }
        );
    }

    #[test]
    fn test_parse_message_rejects_garbage_as_worker_error() {
        let err = ListingsWorker::parse_message("{\"Unknown\":{}}").unwrap_err();
        assert!(matches!(err, RozgarError::Worker(_)));
        assert!(err.to_string().starts_with("Worker communication error: invalid request"));

        let payload = serde_json::to_string(&WorkerMessage::save_jobs(vec![])).unwrap();
        assert!(matches!(
            ListingsWorker::parse_message(&payload),
            Ok(WorkerMessage::SaveJobs { .. })
        ));
    }
}

//! Worker thread message types for cross-thread communication.
//!
//! The plugin thread owns the in-memory collections; the worker thread owns
//! the durable store. Requests carry full collection snapshots, so the worker
//! never needs to read before it writes. Each request also carries an
//! optional [`TraceContext`] so worker spans join the plugin's trace.

use crate::domain::{Admission, Job};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span ids of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span
    /// context is otherwise invalid.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_listings(LoadListings { data_dir: String }),
    save_jobs(SaveJobs { jobs: Vec<Job> }),
    save_admissions(SaveAdmissions { admissions: Vec<Admission> }),
}

/// Requests sent from the plugin thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Open the store in `data_dir` and read both collections.
    LoadListings {
        /// Directory holding the slot files (already sandbox-expanded).
        data_dir: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Overwrite the jobs slot with this collection.
    SaveJobs {
        jobs: Vec<Job>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Overwrite the admissions slot with this collection.
    SaveAdmissions {
        admissions: Vec<Admission>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context attached to this message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadListings { trace_context, .. }
            | Self::SaveJobs { trace_context, .. }
            | Self::SaveAdmissions { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker thread back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Both collections, read from storage or defaulted to the seed data.
    ListingsLoaded {
        jobs: Vec<Job>,
        admissions: Vec<Admission>,
    },

    /// A collection was written to its slot.
    Saved {
        /// Slot key that was written.
        key: String,
        /// Number of records in the saved collection.
        count: usize,
    },

    /// A worker operation failed. Logged by the plugin, never shown.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_jobs;

    #[test]
    fn test_messages_survive_json_transport() {
        let message = WorkerMessage::save_jobs(sample_jobs());
        let payload = serde_json::to_string(&message).unwrap();
        let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_no_trace_context_without_subscriber() {
        let message = WorkerMessage::load_listings("/tmp/board".to_string());
        assert!(message.trace_context().is_none());

        let payload = serde_json::to_string(&message).unwrap();
        assert!(!payload.contains("trace_context"));
    }
}

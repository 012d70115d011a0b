//! Span exporter writing OTLP JSON lines to a rotating file.

use super::otlp_json::OtlpJsonEncoder;
use super::rotating_file::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Instrumentation scope written into every batch.
pub const SCOPE_NAME: &str = "rozgarhub";

/// Exports every span batch as one JSON line.
#[derive(Debug)]
struct OtlpFileExporter {
    file: RotatingFile,
    encoder: OtlpJsonEncoder,
    is_shutdown: AtomicBool,
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("trace file exporter is shut down"))
        } else {
            let line = self.encoder.encode(&batch).to_string();
            self.file
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

/// Builds a tracer provider that exports synchronously to `file_path`.
///
/// Spans are written as each one ends; there is no async runtime in the
/// plugin sandbox to drive a batch processor.
#[must_use]
pub fn file_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter {
        file: RotatingFile::new(file_path),
        encoder: OtlpJsonEncoder::new(resource.clone(), SCOPE_NAME),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

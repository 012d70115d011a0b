//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → OtlpFileExporter → JSON lines
//! ```
//!
//! Traces land in `<data_dir>/rozgarhub-otlp.json`, one OTLP JSON document per
//! exported batch. The file rotates at 10 MB into `.1`, `.2` and `.3`.
//!
//! The level comes from the `trace_level` plugin option (default `"info"`),
//! using `EnvFilter` directive syntax, e.g. `"rozgarhub=debug"`.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: `SpanExporter` writing to the trace file
//! - `otlp_json`: OTLP JSON encoding
//! - `rotating_file`: Size-rotated line writer

mod exporter;
mod init;
mod otlp_json;
mod rotating_file;

pub use init::{init_tracing, TRACE_FILE_NAME};

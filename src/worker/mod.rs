//! Background worker thread for listing persistence.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol with trace context propagation
//! - `handler`: Worker implementation owning the durable store

pub mod handler;
pub mod messages;

pub use handler::ListingsWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};

//! Storage layer for the durable listing collections.
//!
//! # Modules
//!
//! - `backend`: Key-value slot trait implemented by every backend
//! - `json`: One JSON file per slot with atomic writes
//! - `memory`: In-process slots (fallback and tests)
//! - `store`: Typed load/save of the jobs and admissions collections

pub mod backend;
pub mod json;
pub mod memory;
pub mod store;

pub use backend::Storage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use store::{ListingStore, ADMISSIONS_KEY, JOBS_KEY};

//! Domain layer for the RozgarHub plugin.
//!
//! Record types, seed data, id generation and job filtering, independent of
//! Zellij APIs and of how collections are persisted.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: `Job` and `Admission` records
//! - [`filter`]: Type filter and free-text search over jobs
//! - [`id`]: Collision-free record ids
//! - [`seed`]: Sample records for a board with no saved data

pub mod error;
pub mod filter;
pub mod id;
pub mod listing;
pub mod seed;

pub use error::{Result, RozgarError};
pub use filter::{filtered_jobs, match_range, matches_query, TypeFilter};
pub use id::IdGenerator;
pub use listing::{Admission, Job, JobType, Listing};
pub use seed::{sample_admissions, sample_jobs};

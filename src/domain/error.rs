//! Error types for the RozgarHub plugin.
//!
//! This module defines the centralized error type [`RozgarError`] and the
//! [`Result`] alias used across the crate. None of these errors ever reach the
//! user: storage and worker failures are logged at the plugin boundary and the
//! board keeps running on its in-memory collections.

use thiserror::Error;

/// The main error type for RozgarHub operations.
///
/// # Examples
///
/// ```
/// use rozgarhub::RozgarError;
///
/// fn read_slot() -> Result<(), RozgarError> {
///     Err(RozgarError::Storage("slot file is locked".to_string()))
/// }
///
/// assert!(read_slot().is_err());
/// ```
#[derive(Debug, Error)]
pub enum RozgarError {
    /// Reading or writing a durable slot failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Converts from `std::io::Error` via `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection or message could not be encoded or decoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for RozgarHub operations.
pub type Result<T> = std::result::Result<T, RozgarError>;

//! Error taxonomy for task operations.
//!
//! Two families of failures exist at the library boundary:
//!
//! - [`ValidationError`]: the caller supplied input that can never be stored
//!   (an empty title). It is returned to the caller before any persistence
//!   call is made, and the caller is expected to correct and retry.
//! - [`PersistenceError`]: a backend could not read or write. The task store
//!   logs these and keeps running; they never escape a [`TaskStore`] operation.
//!
//! Operating on an unknown task id is not an error at all: the store treats
//! it as a silent no-op.
//!
//! [`TaskStore`]: crate::libs::store::TaskStore

use thiserror::Error;

/// Input rejected before it reaches a backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming surrounding whitespace.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Failure reported by a persistence backend.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Stored data exists but cannot be decoded.
    #[error("stored value under '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// The value would exceed the configured storage quota.
    #[error("storage quota exceeded: {size} bytes > {quota} bytes")]
    QuotaExceeded { size: usize, quota: usize },

    /// The remote store could not be reached.
    #[error("remote request failed: {0}")]
    Remote(#[from] reqwest::Error),

    /// The remote store answered with a non-success status.
    #[error("remote store responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// The remote store answered with a body that does not match the schema.
    #[error("unexpected remote response: {0}")]
    Decode(String),
}

//! Error types for the commit worker

use thiserror::Error;

/// Errors raised while reading transfer records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Underlying reader failed.
    #[error("Read failed: {0}")]
    Io(String),
}

/// Errors raised by the storage writer.
///
/// Any error from `commit_batch` means nothing from that batch was written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// A value violated a column constraint; the whole batch was rolled back.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A stored row could not be decoded.
    #[error("Corrupt row: {0}")]
    Corrupt(String),

    /// The blocking storage task did not complete.
    #[error("Storage task failed: {0}")]
    Task(String),
}

/// Errors that stop the worker's run loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkerError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

//! # Outbound Ports (Driven Ports)
//!
//! SPIs required by the commit worker.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::TransferRecord;

use crate::domain::{SourceError, StoreError};

/// Supplies decoded transfer records in batches.
#[async_trait]
pub trait TransferSource: Send {
    /// Pull up to `max` records.
    ///
    /// ## Returns
    ///
    /// - `Ok(records)`: next records in order; an empty vec means exhausted
    /// - `Err(SourceError)`: the underlying reader failed
    async fn next_batch(&mut self, max: usize) -> Result<Vec<TransferRecord>, SourceError>;
}

/// Relational storage for transfer records.
#[async_trait]
pub trait TransferStore: Send + Sync {
    /// Write a batch atomically.
    ///
    /// Records already present (same `tx_hash`, `log_index`) are skipped.
    ///
    /// ## Returns
    ///
    /// - `Ok(n)`: number of newly inserted rows
    /// - `Err(StoreError)`: nothing from the batch was written
    async fn commit_batch(&self, records: &[TransferRecord]) -> Result<usize, StoreError>;

    /// Most recent records, newest block first.
    async fn load_recent(&self, limit: usize) -> Result<Vec<TransferRecord>, StoreError>;
}

#[async_trait]
impl<T: TransferStore + ?Sized> TransferStore for Arc<T> {
    async fn commit_batch(&self, records: &[TransferRecord]) -> Result<usize, StoreError> {
        (**self).commit_batch(records).await
    }

    async fn load_recent(&self, limit: usize) -> Result<Vec<TransferRecord>, StoreError> {
        (**self).load_recent(limit).await
    }
}

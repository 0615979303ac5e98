//! In-memory source and store.
//!
//! The store enforces the same amount-column constraint as the SQLite
//! schema, so an unscreened offender fails its whole batch here too.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::TransferRecord;
use ti_01_amount_guard::NUMERIC_PRECISION;

use crate::domain::{SourceError, StoreError};
use crate::ports::{TransferSource, TransferStore};

/// Source that yields a fixed list of records.
#[derive(Debug, Default)]
pub struct InMemorySource {
    pending: VecDeque<TransferRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<TransferRecord>) -> Self {
        Self {
            pending: records.into(),
        }
    }

    /// Records not yet handed out.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

#[async_trait]
impl TransferSource for InMemorySource {
    async fn next_batch(&mut self, max: usize) -> Result<Vec<TransferRecord>, SourceError> {
        let take = max.min(self.pending.len());
        Ok(self.pending.drain(..take).collect())
    }
}

/// Store that keeps committed records in a vector.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<TransferRecord>>,
    fail_next: Mutex<Option<StoreError>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `commit_batch` fail with `err`.
    pub fn fail_next_commit(&self, err: StoreError) {
        *self.fail_next.lock() = Some(err);
    }

    /// Snapshot of committed records in insertion order.
    pub fn records(&self) -> Vec<TransferRecord> {
        self.rows.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

fn column_violation(record: &TransferRecord) -> Option<String> {
    let amount = &record.amount;
    if amount.is_negative() || amount.digit_count() > NUMERIC_PRECISION {
        return Some(format!(
            "amount {} out of range for NUMERIC({NUMERIC_PRECISION}, 0)",
            amount
        ));
    }
    None
}

#[async_trait]
impl TransferStore for InMemoryStore {
    async fn commit_batch(&self, records: &[TransferRecord]) -> Result<usize, StoreError> {
        if let Some(err) = self.fail_next.lock().take() {
            return Err(err);
        }

        if let Some(violation) = records.iter().find_map(column_violation) {
            return Err(StoreError::ConstraintViolation(violation));
        }

        let mut rows = self.rows.lock();
        let mut inserted = 0;
        for record in records {
            let duplicate = rows
                .iter()
                .any(|r| r.tx_hash == record.tx_hash && r.log_index == record.log_index);
            if !duplicate {
                rows.push(record.clone());
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn load_recent(&self, limit: usize) -> Result<Vec<TransferRecord>, StoreError> {
        let mut rows = self.rows.lock().clone();
        rows.sort_by(|a, b| {
            b.block_number
                .cmp(&a.block_number)
                .then(b.log_index.cmp(&a.log_index))
        });
        rows.truncate(limit);
        Ok(rows)
    }
}

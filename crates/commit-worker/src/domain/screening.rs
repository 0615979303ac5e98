//! # Batch Screening
//!
//! Applies the Amount Guard to every candidate record before a batch write,
//! and checks the integer key columns against the store's signed 64-bit
//! range. A rejected record is dropped from the batch and logged with its
//! value; it never fails the batch.

use shared_types::TransferRecord;
use thiserror::Error;
use ti_01_amount_guard::{AmountGuardApi, AmountRejection};
use tracing::warn;

/// Largest value an `INTEGER` column holds.
pub const STORAGE_INT_MAX: u64 = i64::MAX as u64;

/// Why a record was left out of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExclusionReason {
    /// The Amount Guard rejected the amount.
    #[error("{0}")]
    Amount(#[from] AmountRejection),

    /// A block number or log index exceeds the integer column.
    #[error("{field} {value} exceeds storage integer range")]
    IntegerOutOfRange { field: &'static str, value: u64 },
}

/// A record left out of the current commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedTransfer {
    pub record: TransferRecord,
    pub reason: ExclusionReason,
}

/// Result of screening one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenedBatch {
    /// Records safe to write, in input order.
    pub accepted: Vec<TransferRecord>,
    /// Records the storage column cannot hold.
    pub excluded: Vec<ExcludedTransfer>,
}

impl ScreenedBatch {
    /// Total number of records screened.
    pub fn len(&self) -> usize {
        self.accepted.len() + self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split a batch into records to commit and records to exclude.
pub fn screen_batch(guard: &dyn AmountGuardApi, records: Vec<TransferRecord>) -> ScreenedBatch {
    let mut screened = ScreenedBatch {
        accepted: Vec::with_capacity(records.len()),
        excluded: Vec::new(),
    };

    for record in records {
        match check_record(guard, &record) {
            Ok(()) => screened.accepted.push(record),
            Err(reason) => {
                warn!(
                    tx_hash = %record.short_hash(),
                    log_index = record.log_index,
                    block_number = record.block_number,
                    amount = %record.amount,
                    %reason,
                    "Excluding transfer from commit"
                );
                screened.excluded.push(ExcludedTransfer { record, reason });
            }
        }
    }

    screened
}

fn check_record(guard: &dyn AmountGuardApi, record: &TransferRecord) -> Result<(), ExclusionReason> {
    for (field, value) in [
        ("block_number", record.block_number),
        ("log_index", record.log_index),
    ] {
        if value > STORAGE_INT_MAX {
            return Err(ExclusionReason::IntegerOutOfRange { field, value });
        }
    }
    guard.check_amount(&record.amount)?;
    Ok(())
}

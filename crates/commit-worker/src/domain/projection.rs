//! # Display Projection
//!
//! Rows handed to the explorer UI. Each row carries a direction tag computed
//! from the sender's perspective; rendering decisions stay in the UI.

use serde::{Deserialize, Serialize};
use shared_types::{to_hex_string, TransferRecord};
use ti_02_direction_classifier::{DirectionClassifierApi, DirectionTag};

/// One transfer as shown in a transfer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRow {
    pub tx_hash: String,
    pub log_index: u64,
    pub block_number: u64,
    pub token: String,
    pub from: String,
    pub to: Option<String>,
    pub amount: String,
    pub direction: DirectionTag,
}

impl TransferRow {
    fn from_record(record: &TransferRecord, direction: DirectionTag) -> Self {
        Self {
            tx_hash: to_hex_string(&record.tx_hash),
            log_index: record.log_index,
            block_number: record.block_number,
            token: to_hex_string(&record.token_address),
            from: to_hex_string(&record.from_address),
            to: record.to_address.as_ref().map(|a| to_hex_string(a)),
            amount: record.amount.to_string(),
            direction,
        }
    }
}

/// Build display rows, one classifier call per record.
pub fn project_rows(
    classifier: &dyn DirectionClassifierApi,
    records: &[TransferRecord],
) -> Vec<TransferRow> {
    records
        .iter()
        .map(|record| TransferRow::from_record(record, classifier.classify_transfer(record)))
        .collect()
}

//! # Inbound Ports (Driving Ports)
//!
//! Public API exposed by the Direction Classifier subsystem.

use crate::domain::DirectionTag;
use shared_types::{Address, TransferRecord};

/// Primary API for the Direction Classifier subsystem.
pub trait DirectionClassifierApi: Send + Sync {
    /// Classify a sender/receiver pair.
    fn classify(&self, from: &Address, to: Option<&Address>) -> DirectionTag;

    /// Classify a decoded transfer event.
    fn classify_transfer(&self, record: &TransferRecord) -> DirectionTag {
        self.classify(&record.from_address, record.to_address.as_ref())
    }
}

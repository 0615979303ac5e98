//! # Transfer Direction
//!
//! Compares sender and receiver by raw bytes. Address normalization such as
//! checksumming is the decoder's job and never happens here.

use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Direction of a transfer relative to its sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectionTag {
    /// Funds leave the sender for another account, or the receiver is unknown.
    #[serde(rename = "out")]
    Out,
    /// Sender and receiver are the same account.
    #[serde(rename = "self")]
    SelfTransfer,
}

impl DirectionTag {
    /// Wire label rendered by the presentation layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Out => "out",
            Self::SelfTransfer => "self",
        }
    }
}

impl fmt::Display for DirectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a transfer from the sender's perspective.
///
/// Returns `SelfTransfer` only when `to` is present and byte-equal to `from`.
pub fn classify_direction(from: &Address, to: Option<&Address>) -> DirectionTag {
    match to {
        Some(to) if to == from => DirectionTag::SelfTransfer,
        _ => DirectionTag::Out,
    }
}

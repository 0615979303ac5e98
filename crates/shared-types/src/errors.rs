//! # Error Types
//!
//! Decoding errors raised at the boundary where raw chain data enters the
//! pipeline. The commit-safety core never produces these.

use thiserror::Error;

/// Errors raised when parsing a decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    /// Input contained no digits.
    #[error("Empty amount")]
    Empty,

    /// A character other than an ASCII digit was found.
    #[error("Invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// Errors raised when decoding a hex-encoded byte string (address or hash).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    /// Hex payload has the wrong number of characters.
    #[error("Invalid length: expected {expected} hex chars, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Payload is not valid hex.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

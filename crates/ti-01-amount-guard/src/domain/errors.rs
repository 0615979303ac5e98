//! Rejection reasons for the Amount Guard

use thiserror::Error;

/// Why an amount cannot be written to the amount column.
///
/// This is a verdict, not a failure: the worker excludes the record and logs
/// the reason, then carries on with the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountRejection {
    /// Amount is below zero.
    #[error("Negative amount")]
    Negative,

    /// Amount has more decimal digits than the column holds.
    #[error("Precision exceeded: {digits} digits > {max}")]
    PrecisionExceeded { digits: usize, max: usize },
}

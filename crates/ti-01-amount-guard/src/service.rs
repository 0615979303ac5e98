//! # Amount Guard Service
//!
//! Application service that implements the `AmountGuardApi` trait by
//! delegating to the pure domain check.

use tracing::debug;

use crate::domain::{guard, AmountRejection, NUMERIC_PRECISION};
use crate::ports::inbound::AmountGuardApi;
use shared_types::TransferAmount;

/// Amount Guard Service.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountGuard;

impl AmountGuard {
    /// Create a new guard.
    pub fn new() -> Self {
        Self
    }
}

impl AmountGuardApi for AmountGuard {
    fn check_amount(&self, amount: &TransferAmount) -> Result<(), AmountRejection> {
        let verdict = guard::check_amount(amount);
        if let Err(reason) = verdict {
            debug!(%amount, %reason, "Amount rejected by guard");
        }
        verdict
    }

    fn precision(&self) -> usize {
        NUMERIC_PRECISION
    }
}

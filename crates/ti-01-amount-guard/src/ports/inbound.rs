//! # Inbound Ports (Driving Ports)
//!
//! Public API exposed by the Amount Guard subsystem.

use crate::domain::AmountRejection;
use shared_types::TransferAmount;

/// Primary API for the Amount Guard subsystem.
///
/// Implementations must be stateless: the commit worker calls them
/// concurrently, once per candidate record, without synchronization.
pub trait AmountGuardApi: Send + Sync {
    /// Check an amount, naming the reason on rejection.
    fn check_amount(&self, amount: &TransferAmount) -> Result<(), AmountRejection>;

    /// Returns true if the amount can be written to storage.
    fn is_amount_supported(&self, amount: &TransferAmount) -> bool {
        self.check_amount(amount).is_ok()
    }

    /// Maximum number of decimal digits accepted.
    fn precision(&self) -> usize;
}

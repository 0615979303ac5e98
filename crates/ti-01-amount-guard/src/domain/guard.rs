//! # Amount Guard
//!
//! Range check mirroring a zero-scale `NUMERIC(78, 0)` column.
//!
//! ## Decision Table
//!
//! | Amount | Verdict |
//! |--------|---------|
//! | `< 0` | reject (`Negative`) |
//! | more than 78 digits | reject (`PrecisionExceeded`) |
//! | otherwise, including `0` | accept |

use super::errors::AmountRejection;
use super::value_objects::{IntegerAmount, NUMERIC_PRECISION};

/// Check an amount against the storage column, naming the reason on rejection.
///
/// Sign is checked first, so a negative amount that is also too long
/// reports `Negative`.
pub fn check_amount<A: IntegerAmount + ?Sized>(amount: &A) -> Result<(), AmountRejection> {
    if amount.is_negative() {
        return Err(AmountRejection::Negative);
    }

    let digits = amount.decimal_digits();
    if digits > NUMERIC_PRECISION {
        return Err(AmountRejection::PrecisionExceeded {
            digits,
            max: NUMERIC_PRECISION,
        });
    }

    Ok(())
}

/// Returns true if the amount can be written to the amount column.
pub fn is_amount_supported<A: IntegerAmount + ?Sized>(amount: &A) -> bool {
    check_amount(amount).is_ok()
}

//! # Value Objects
//!
//! Storage constants and the arbitrary-precision integer boundary.

use primitive_types::{U256, U512};
use shared_types::TransferAmount;

/// Precision of the amount column (`NUMERIC(78, 0)`).
///
/// MUST stay in lockstep with the storage schema. The SQLite adapter builds
/// its DDL from this constant; any other schema change requires changing it
/// here as well. The largest accepted magnitude is `10^78 - 1`.
pub const NUMERIC_PRECISION: usize = 78;

/// Scale of the amount column. Token amounts are integers.
pub const NUMERIC_SCALE: usize = 0;

/// An integer of unbounded magnitude as seen by the guard.
///
/// Implementations must be total and must not allocate.
pub trait IntegerAmount {
    /// True if the value is strictly below zero.
    fn is_negative(&self) -> bool;

    /// Base-10 digit count of the absolute value. Zero has one digit.
    fn decimal_digits(&self) -> usize;
}

impl IntegerAmount for TransferAmount {
    fn is_negative(&self) -> bool {
        TransferAmount::is_negative(self)
    }

    fn decimal_digits(&self) -> usize {
        self.digit_count()
    }
}

fn u64_digits(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |d| d as usize + 1)
}

fn u128_digits(value: u128) -> usize {
    value.checked_ilog10().map_or(1, |d| d as usize + 1)
}

impl IntegerAmount for u64 {
    fn is_negative(&self) -> bool {
        false
    }

    fn decimal_digits(&self) -> usize {
        u64_digits(*self)
    }
}

impl IntegerAmount for u128 {
    fn is_negative(&self) -> bool {
        false
    }

    fn decimal_digits(&self) -> usize {
        u128_digits(*self)
    }
}

impl IntegerAmount for i64 {
    fn is_negative(&self) -> bool {
        *self < 0
    }

    fn decimal_digits(&self) -> usize {
        u64_digits(self.unsigned_abs())
    }
}

impl IntegerAmount for i128 {
    fn is_negative(&self) -> bool {
        *self < 0
    }

    fn decimal_digits(&self) -> usize {
        u128_digits(self.unsigned_abs())
    }
}

/// Largest power of ten that fits in a `u64`.
const WORD_CHUNK: u64 = 10_000_000_000_000_000_000;
const WORD_CHUNK_DIGITS: usize = 19;

macro_rules! impl_wide_unsigned {
    ($($ty:ty),*) => {
        $(
            impl IntegerAmount for $ty {
                fn is_negative(&self) -> bool {
                    false
                }

                fn decimal_digits(&self) -> usize {
                    let chunk = <$ty>::from(WORD_CHUNK);
                    let mut rest = *self;
                    let mut digits = 0;
                    while rest >= chunk {
                        rest /= chunk;
                        digits += WORD_CHUNK_DIGITS;
                    }
                    digits + u64_digits(rest.low_u64())
                }
            }
        )*
    };
}

impl_wide_unsigned!(U256, U512);

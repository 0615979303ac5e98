//! # Transfer Amount
//!
//! Arbitrary-precision, sign-aware integer holding an on-chain token quantity.
//!
//! The canonical form is a sign flag plus base-10 magnitude digits without
//! leading zeros. Zero is always `"0"` and never negative. The decimal text is
//! also the wire and storage encoding, matching how a zero-scale `NUMERIC`
//! column renders its values.

use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::errors::AmountParseError;

/// A token quantity moved by one transfer event.
///
/// Not bounded by any machine word: values beyond 256 bits are representable
/// so that out-of-range inputs can be detected instead of silently truncated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct TransferAmount {
    negative: bool,
    digits: String,
}

impl TransferAmount {
    /// The zero amount.
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: "0".to_string(),
        }
    }

    /// Build from a sign and an already canonical magnitude.
    fn from_canonical(negative: bool, digits: String) -> Self {
        let negative = negative && digits != "0";
        Self { negative, digits }
    }

    /// Returns true if the amount is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Base-10 digits of the magnitude, without sign or leading zeros.
    pub fn magnitude(&self) -> &str {
        &self.digits
    }

    /// Number of base-10 digits in the magnitude. Zero has one digit.
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Converts to a `U256` if the amount is non-negative and fits.
    pub fn to_u256(&self) -> Option<U256> {
        if self.negative {
            return None;
        }
        U256::from_dec_str(&self.digits).ok()
    }
}

impl Default for TransferAmount {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for TransferAmount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body, offset) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..], 1),
            Some(b'+') => (false, &s[1..], 1),
            _ => (false, s, 0),
        };

        if body.is_empty() {
            return Err(AmountParseError::Empty);
        }

        if let Some((position, found)) = body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(AmountParseError::InvalidDigit {
                position: position + offset,
                found,
            });
        }

        let trimmed = body.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };

        Ok(Self::from_canonical(negative, digits.to_string()))
    }
}

impl fmt::Display for TransferAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

impl From<u64> for TransferAmount {
    fn from(value: u64) -> Self {
        Self::from_canonical(false, value.to_string())
    }
}

impl From<u128> for TransferAmount {
    fn from(value: u128) -> Self {
        Self::from_canonical(false, value.to_string())
    }
}

impl From<i64> for TransferAmount {
    fn from(value: i64) -> Self {
        Self::from_canonical(value < 0, value.unsigned_abs().to_string())
    }
}

impl From<i128> for TransferAmount {
    fn from(value: i128) -> Self {
        Self::from_canonical(value < 0, value.unsigned_abs().to_string())
    }
}

impl From<U256> for TransferAmount {
    fn from(value: U256) -> Self {
        Self::from_canonical(false, value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_strips_leading_zeros() {
        let amount: TransferAmount = "000123".parse().unwrap();
        assert_eq!(amount.magnitude(), "123");
        assert_eq!(amount.digit_count(), 3);
        assert!(!amount.is_negative());
    }

    #[test]
    fn test_parse_zero_forms() {
        for input in ["0", "000", "-0", "+0", "-000"] {
            let amount: TransferAmount = input.parse().unwrap();
            assert!(amount.is_zero(), "{input} should be zero");
            assert!(!amount.is_negative(), "{input} should not be negative");
            assert_eq!(amount.to_string(), "0");
        }
    }

    #[test]
    fn test_parse_negative() {
        let amount: TransferAmount = "-42".parse().unwrap();
        assert!(amount.is_negative());
        assert_eq!(amount.magnitude(), "42");
        assert_eq!(amount.to_string(), "-42");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<TransferAmount>(), Err(AmountParseError::Empty));
        assert_eq!("-".parse::<TransferAmount>(), Err(AmountParseError::Empty));
        assert_eq!(
            "12a4".parse::<TransferAmount>(),
            Err(AmountParseError::InvalidDigit {
                position: 2,
                found: 'a'
            })
        );
        assert_eq!(
            "-1.5".parse::<TransferAmount>(),
            Err(AmountParseError::InvalidDigit {
                position: 2,
                found: '.'
            })
        );
    }

    #[test]
    fn test_parse_beyond_256_bits() {
        let text = format!("1{}", "0".repeat(100));
        let amount: TransferAmount = text.parse().unwrap();
        assert_eq!(amount.digit_count(), 101);
        assert_eq!(amount.to_u256(), None);
    }

    #[test]
    fn test_from_native_integers() {
        assert_eq!(TransferAmount::from(0u64), TransferAmount::zero());
        assert_eq!(TransferAmount::from(u128::MAX).digit_count(), 39);

        let min = TransferAmount::from(i128::MIN);
        assert!(min.is_negative());
        assert_eq!(min.to_string(), i128::MIN.to_string());

        let neg = TransferAmount::from(-7i64);
        assert_eq!(neg.to_string(), "-7");
        assert_eq!(neg.to_u256(), None);
    }

    #[test]
    fn test_from_u256_max_has_78_digits() {
        let amount = TransferAmount::from(U256::MAX);
        assert_eq!(amount.digit_count(), 78);
        assert_eq!(amount.to_u256(), Some(U256::MAX));
    }

    #[test]
    fn test_serde_as_decimal_string() {
        let amount: TransferAmount = "-900".parse().unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"-900\"");

        let back: TransferAmount = serde_json::from_str("\"0900\"").unwrap();
        assert_eq!(back.to_string(), "900");
        assert!(serde_json::from_str::<TransferAmount>("\"9e9\"").is_err());
    }

    proptest! {
        #[test]
        fn prop_display_matches_i128(value in any::<i128>()) {
            prop_assert_eq!(TransferAmount::from(value).to_string(), value.to_string());
        }

        #[test]
        fn prop_parse_display_is_canonical(value in any::<i128>(), zeros in 0usize..5) {
            let sign = if value < 0 { "-" } else { "" };
            let padded = format!("{sign}{}{}", "0".repeat(zeros), value.unsigned_abs());
            let parsed: TransferAmount = padded.parse().unwrap();
            prop_assert_eq!(parsed, TransferAmount::from(value));
        }
    }
}

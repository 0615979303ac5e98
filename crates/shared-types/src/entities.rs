//! # Core Domain Entities
//!
//! Defines the transfer entities produced by the chain-event decoder and
//! consumed by the commit pipeline.
//!
//! ## Clusters
//!
//! - **Chain Primitives**: `Hash`, `Address`, `U256`
//! - **Transfers**: `TransferRecord`

use serde::{Deserialize, Serialize};

use crate::amount::TransferAmount;
use crate::errors::AddressParseError;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: CHAIN PRIMITIVES
// =============================================================================

/// A 32-byte hash (transaction hash, block hash).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
///
/// Two addresses are equal iff their bytes are identical.
pub type Address = [u8; 20];

/// Decode a `0x`-prefixed (or bare) hex string into a fixed-size byte array.
pub fn parse_hex_array<const N: usize>(input: &str) -> Result<[u8; N], AddressParseError> {
    let body = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if body.len() != N * 2 {
        return Err(AddressParseError::InvalidLength {
            expected: N * 2,
            actual: body.len(),
        });
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(body, &mut out)
        .map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
    Ok(out)
}

/// Parse an address from its hex encoding.
pub fn parse_address(input: &str) -> Result<Address, AddressParseError> {
    parse_hex_array(input)
}

/// Lowercase `0x`-prefixed hex encoding of raw bytes.
pub fn to_hex_string(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Serde adapter encoding fixed-size byte arrays as `0x` hex strings.
pub mod hex_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S, const N: usize>(bytes: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_hex_string(bytes))
    }

    pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::parse_hex_array(&text).map_err(de::Error::custom)
    }
}

/// Serde adapter for optional hex-encoded byte arrays (`null` when absent).
pub mod hex_bytes_opt {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S, const N: usize>(
        bytes: &Option<[u8; N]>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bytes {
            Some(b) => serializer.serialize_some(&super::to_hex_string(b)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D, const N: usize>(
        deserializer: D,
    ) -> Result<Option<[u8; N]>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|text| super::parse_hex_array(&text).map_err(de::Error::custom))
            .transpose()
    }
}

// =============================================================================
// CLUSTER B: TRANSFERS
// =============================================================================

/// A decoded token-transfer event, ready to be screened and persisted.
///
/// The pair `(tx_hash, log_index)` identifies the event uniquely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Hash of the transaction that emitted the event.
    #[serde(with = "hex_bytes")]
    pub tx_hash: Hash,
    /// Position of the event within the transaction receipt.
    pub log_index: u64,
    /// Block containing the transaction.
    pub block_number: u64,
    /// Contract of the transferred token.
    #[serde(with = "hex_bytes")]
    pub token_address: Address,
    /// Sending account.
    #[serde(with = "hex_bytes")]
    pub from_address: Address,
    /// Receiving account (absent for burns and some decoder outputs).
    #[serde(with = "hex_bytes_opt", default)]
    pub to_address: Option<Address>,
    /// Quantity moved.
    pub amount: TransferAmount,
}

impl TransferRecord {
    /// Short hex prefix of the tx hash for log lines.
    pub fn short_hash(&self) -> String {
        to_hex_string(&self.tx_hash[..8])
    }
}

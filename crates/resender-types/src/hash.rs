//! Transaction hash type.

use alloy::primitives::B256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of hexadecimal digits in a transaction hash without its prefix.
pub const HASH_HEX_LEN: usize = 64;

/// A 32-byte transaction hash.
///
/// Parsing accepts upper- or lowercase digits with or without a `0x` prefix.
/// The canonical textual form is always `0x` followed by 64 lowercase digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransactionHash(pub B256);

impl From<B256> for TransactionHash {
	fn from(hash: B256) -> Self {
		Self(hash)
	}
}

impl From<TransactionHash> for B256 {
	fn from(hash: TransactionHash) -> Self {
		hash.0
	}
}

impl fmt::Display for TransactionHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{}", hex::encode(self.0.as_slice()))
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashParseError {
	#[error("expected {HASH_HEX_LEN} hex digits, got {0}")]
	InvalidLength(usize),

	#[error("invalid hex digit in transaction hash: {0}")]
	InvalidHex(String),
}

impl FromStr for TransactionHash {
	type Err = HashParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let digits = s
			.strip_prefix("0x")
			.or_else(|| s.strip_prefix("0X"))
			.unwrap_or(s);

		if digits.len() != HASH_HEX_LEN {
			return Err(HashParseError::InvalidLength(digits.len()));
		}

		let mut bytes = [0u8; 32];
		hex::decode_to_slice(digits, &mut bytes)
			.map_err(|e| HashParseError::InvalidHex(e.to_string()))?;

		Ok(Self(B256::from(bytes)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const LOWER: &str = "0x9cd1a111624f45993193fa5a4907ad73d43d0c809dcd751b7be95275ae364d53";

	#[test]
	fn test_parse_and_display_round_trip() {
		let hash: TransactionHash = LOWER.parse().unwrap();
		assert_eq!(hash.to_string(), LOWER);
		assert_eq!(hash.to_string().len(), 66);
	}

	#[test]
	fn test_parse_is_case_insensitive_and_normalizes() {
		let upper = LOWER.trim_start_matches("0x").to_uppercase();
		let hash: TransactionHash = upper.parse().unwrap();
		assert_eq!(hash.to_string(), LOWER);

		let prefixed: TransactionHash = format!("0X{}", upper).parse().unwrap();
		assert_eq!(prefixed, hash);
	}

	#[test]
	fn test_parse_rejects_wrong_length() {
		assert_eq!(
			"0xabcd".parse::<TransactionHash>(),
			Err(HashParseError::InvalidLength(4))
		);
		let too_long = format!("{}00", LOWER);
		assert!(matches!(
			too_long.parse::<TransactionHash>(),
			Err(HashParseError::InvalidLength(66))
		));
	}

	#[test]
	fn test_parse_rejects_non_hex() {
		let bad = format!("0x{}", "g".repeat(64));
		assert!(matches!(
			bad.parse::<TransactionHash>(),
			Err(HashParseError::InvalidHex(_))
		));
	}

	#[test]
	fn test_serde_uses_canonical_form() {
		let hash: TransactionHash = LOWER.parse().unwrap();
		let json = serde_json::to_string(&hash).unwrap();
		assert_eq!(json, format!("\"{}\"", LOWER));

		let back: TransactionHash = serde_json::from_str(&json).unwrap();
		assert_eq!(back, hash);
	}
}

//! Raw transaction payloads and send acknowledgements.

use crate::hash::TransactionHash;
use alloy::primitives::Bytes;
use serde::{Deserialize, Serialize};

/// A signed transaction in the exact wire encoding it was originally broadcast with.
///
/// The payload is the EIP-2718 encoding of the signed envelope, signature fields
/// included, so it can be resubmitted with `eth_sendRawTransaction` unchanged.
/// Values are moved from the fetch phase into the send phase and never mutated,
/// which is why the type is deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct RawTransaction {
	hash: TransactionHash,
	payload: Bytes,
}

impl RawTransaction {
	pub fn new(hash: TransactionHash, payload: Bytes) -> Self {
		Self { hash, payload }
	}

	/// The hash this transaction was fetched by.
	pub fn hash(&self) -> &TransactionHash {
		&self.hash
	}

	pub fn payload(&self) -> &Bytes {
		&self.payload
	}

	pub fn into_parts(self) -> (TransactionHash, Bytes) {
		(self.hash, self.payload)
	}
}

/// Destination acceptance of a resubmitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendAcknowledgement {
	/// Hash the transaction was fetched by on the source network.
	pub hash: TransactionHash,
	/// Hash reported by the destination node for the accepted payload.
	pub destination_hash: TransactionHash,
}

impl SendAcknowledgement {
	/// True when the destination computed the same hash as the source.
	pub fn matches_source(&self) -> bool {
		self.hash == self.destination_hash
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::primitives::B256;

	#[test]
	fn test_raw_transaction_accessors() {
		let hash = TransactionHash(B256::repeat_byte(0xaa));
		let tx = RawTransaction::new(hash, Bytes::from(vec![0xf8, 0x6b, 0x01]));

		assert_eq!(tx.hash(), &hash);
		assert_eq!(tx.payload().len(), 3);

		let (parts_hash, payload) = tx.into_parts();
		assert_eq!(parts_hash, hash);
		assert_eq!(payload.as_ref(), &[0xf8, 0x6b, 0x01]);
	}

	#[test]
	fn test_acknowledgement_matches_source() {
		let hash = TransactionHash(B256::repeat_byte(0x01));
		let ack = SendAcknowledgement {
			hash,
			destination_hash: hash,
		};
		assert!(ack.matches_source());

		let other = SendAcknowledgement {
			hash,
			destination_hash: TransactionHash(B256::repeat_byte(0x02)),
		};
		assert!(!other.matches_source());
	}
}

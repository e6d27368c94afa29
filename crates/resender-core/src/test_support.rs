//! In-memory network client and signed fixtures for unit tests.

use alloy::consensus::{SignableTransaction, TxEnvelope, TxLegacy};
use alloy::network::TxSignerSync;
use alloy::primitives::{Address, Bytes, TxKind, B256, U256};
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use resender_types::{ClientError, NetworkClient, TransactionHash};
use std::collections::HashMap;
use std::sync::Mutex;

// Well-known development key, never funded outside local networks.
const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

pub(crate) fn signed_envelope(nonce: u64) -> TxEnvelope {
	let signer: PrivateKeySigner = DEV_KEY.parse().unwrap();
	let mut tx = TxLegacy {
		chain_id: Some(31337),
		nonce,
		gas_price: 1_000_000_000,
		gas_limit: 21_000,
		to: TxKind::Call(Address::repeat_byte(0x11)),
		value: U256::from(1_000u64),
		input: Bytes::new(),
	};
	let signature = signer.sign_transaction_sync(&mut tx).unwrap();
	TxEnvelope::Legacy(tx.into_signed(signature))
}

pub(crate) fn hash_of(byte: u8) -> TransactionHash {
	TransactionHash(B256::repeat_byte(byte))
}

/// Mock client that serves a fixed set of transactions and records every call.
#[derive(Default)]
pub(crate) struct MockClient {
	pub transactions: HashMap<TransactionHash, TxEnvelope>,
	pub fail_lookups: bool,
	/// One-based broadcast attempt that is rejected.
	pub reject_broadcast: Option<usize>,
	pub lookups: Mutex<Vec<TransactionHash>>,
	pub broadcasts: Mutex<Vec<Bytes>>,
}

impl MockClient {
	pub fn with_transactions(hashes: &[TransactionHash]) -> Self {
		let transactions = hashes
			.iter()
			.enumerate()
			.map(|(nonce, hash)| (*hash, signed_envelope(nonce as u64)))
			.collect();
		Self {
			transactions,
			..Default::default()
		}
	}

	pub fn lookups(&self) -> Vec<TransactionHash> {
		self.lookups.lock().unwrap().clone()
	}

	pub fn broadcasts(&self) -> Vec<Bytes> {
		self.broadcasts.lock().unwrap().clone()
	}
}

#[async_trait]
impl NetworkClient for MockClient {
	fn endpoint(&self) -> &str {
		"mock://endpoint"
	}

	async fn get_transaction(
		&self,
		hash: &TransactionHash,
	) -> Result<Option<TxEnvelope>, ClientError> {
		self.lookups.lock().unwrap().push(*hash);
		if self.fail_lookups {
			return Err(ClientError::Transport("connection refused".to_string()));
		}
		Ok(self.transactions.get(hash).cloned())
	}

	async fn broadcast_transaction(&self, payload: &Bytes) -> Result<TransactionHash, ClientError> {
		let attempt = {
			let mut broadcasts = self.broadcasts.lock().unwrap();
			broadcasts.push(payload.clone());
			broadcasts.len()
		};
		if self.reject_broadcast == Some(attempt) {
			return Err(ClientError::Rejected {
				code: -32000,
				message: "nonce too low".to_string(),
			});
		}
		Ok(TransactionHash(alloy::primitives::keccak256(payload)))
	}
}

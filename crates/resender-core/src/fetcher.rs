//! Source-side transaction lookups.

use alloy::eips::eip2718::Encodable2718;
use alloy::primitives::Bytes;
use resender_types::{NetworkClient, RawTransaction, ResendError, TransactionHash};
use std::sync::Arc;
use tracing::debug;

/// Fetches transactions from the source endpoint and rebuilds their wire form.
#[derive(Clone)]
pub struct TransactionFetcher {
	client: Arc<dyn NetworkClient>,
}

impl TransactionFetcher {
	pub fn new(client: Arc<dyn NetworkClient>) -> Self {
		Self { client }
	}

	/// Looks up `hash` once and returns the signed transaction in the exact
	/// EIP-2718 encoding it was broadcast with.
	///
	/// A missing transaction is reported as `TransactionNotFound` and nothing is
	/// retried.
	pub async fn fetch(&self, hash: TransactionHash) -> Result<RawTransaction, ResendError> {
		debug!(%hash, endpoint = self.client.endpoint(), "Looking up transaction");

		let envelope = self
			.client
			.get_transaction(&hash)
			.await
			.map_err(|cause| ResendError::FetchFailed { hash, cause })?
			.ok_or(ResendError::TransactionNotFound { hash })?;

		let payload = Bytes::from(envelope.encoded_2718());
		debug!(
			%hash,
			tx_type = ?envelope.tx_type(),
			size = payload.len(),
			"Reconstructed raw transaction"
		);

		Ok(RawTransaction::new(hash, payload))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::{hash_of, signed_envelope, MockClient};
	use alloy::primitives::keccak256;
	use resender_types::ClientError;

	#[tokio::test]
	async fn test_fetch_reconstructs_signed_encoding() {
		let hash = hash_of(0xaa);
		let client = Arc::new(MockClient::with_transactions(&[hash]));
		let fetcher = TransactionFetcher::new(client.clone());

		let tx = fetcher.fetch(hash).await.unwrap();

		let expected = signed_envelope(0);
		assert_eq!(tx.hash(), &hash);
		assert_eq!(tx.payload().as_ref(), expected.encoded_2718().as_slice());
		// The encoding hashes back to the envelope's own hash, signature included.
		assert_eq!(keccak256(tx.payload()), *expected.tx_hash());
		assert_eq!(client.lookups(), vec![hash]);
	}

	#[tokio::test]
	async fn test_fetch_missing_transaction() {
		let client = Arc::new(MockClient::default());
		let fetcher = TransactionFetcher::new(client.clone());
		let hash = hash_of(0x01);

		let err = fetcher.fetch(hash).await.unwrap_err();

		assert_eq!(err, ResendError::TransactionNotFound { hash });
		assert_eq!(client.lookups().len(), 1);
	}

	#[tokio::test]
	async fn test_fetch_transport_failure() {
		let client = Arc::new(MockClient {
			fail_lookups: true,
			..Default::default()
		});
		let fetcher = TransactionFetcher::new(client);
		let hash = hash_of(0x02);

		match fetcher.fetch(hash).await {
			Err(ResendError::FetchFailed { hash: failed, cause }) => {
				assert_eq!(failed, hash);
				assert!(matches!(cause, ClientError::Transport(_)));
			}
			other => panic!("Expected FetchFailed, got {:?}", other),
		}
	}
}

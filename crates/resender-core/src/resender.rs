//! Destination-side submission of raw transactions.

use resender_types::{NetworkClient, RawTransaction, ResendError, SendAcknowledgement};
use std::sync::Arc;
use tracing::{debug, warn};

/// Submits previously fetched raw transactions to the destination endpoint.
#[derive(Clone)]
pub struct TransactionResender {
	client: Arc<dyn NetworkClient>,
}

impl TransactionResender {
	pub fn new(client: Arc<dyn NetworkClient>) -> Self {
		Self { client }
	}

	/// Broadcasts the captured payload byte for byte.
	///
	/// Transport errors and node-side rejections (nonce conflicts, insufficient
	/// balance, already-known transactions) all become `SendRejected` and are not
	/// retried.
	pub async fn send(&self, tx: RawTransaction) -> Result<SendAcknowledgement, ResendError> {
		let (hash, payload) = tx.into_parts();
		debug!(%hash, size = payload.len(), endpoint = self.client.endpoint(), "Broadcasting raw transaction");

		let destination_hash = self
			.client
			.broadcast_transaction(&payload)
			.await
			.map_err(|cause| ResendError::SendRejected { hash, cause })?;

		let acknowledgement = SendAcknowledgement {
			hash,
			destination_hash,
		};
		if !acknowledgement.matches_source() {
			warn!(
				%hash,
				%destination_hash,
				"Destination reported a different hash for the resent transaction"
			);
		}

		Ok(acknowledgement)
	}
}

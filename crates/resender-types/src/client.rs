//! Network client capability consumed by the resend pipeline.

use crate::{errors::ClientError, hash::TransactionHash};
use alloy::consensus::TxEnvelope;
use alloy::primitives::Bytes;
use async_trait::async_trait;

/// Access to a single JSON-RPC endpoint.
///
/// The pipeline uses one client per endpoint: the source client only during the
/// fetch phase and the destination client only during the send phase. Timeouts,
/// transport retries and signature handling all belong to the implementation.
#[async_trait]
pub trait NetworkClient: Send + Sync {
	/// Endpoint description used in progress reporting.
	fn endpoint(&self) -> &str;

	/// Looks up a transaction by hash.
	///
	/// Returns `Ok(None)` when the endpoint has no record of the hash. An
	/// implementation must only return an envelope whose encoding hashes to `hash`.
	async fn get_transaction(
		&self,
		hash: &TransactionHash,
	) -> Result<Option<TxEnvelope>, ClientError>;

	/// Submits an EIP-2718 encoded signed transaction and returns the hash the
	/// endpoint assigned to it.
	async fn broadcast_transaction(&self, payload: &Bytes) -> Result<TransactionHash, ClientError>;
}

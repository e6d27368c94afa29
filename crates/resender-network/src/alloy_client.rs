//! Alloy-based `NetworkClient` implementation.
//!
//! Wraps an HTTP alloy provider and exposes the two calls the pipeline needs:
//! `eth_getTransactionByHash` and `eth_sendRawTransaction`. Responses from the
//! source node are checked so that the returned envelope re-encodes to exactly
//! the hash it was requested by.

use alloy::consensus::TxEnvelope;
use alloy::eips::eip2718::Encodable2718;
use alloy::primitives::{keccak256, Bytes};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::transports::{RpcError, TransportError};
use async_trait::async_trait;
use resender_types::{ClientError, NetworkClient, TransactionHash};
use tracing::{debug, info};

/// Shortens a hash for log lines.
fn truncate_hash(hash: &TransactionHash) -> String {
	let full = hash.to_string();
	format!("{}..", &full[..10])
}

/// JSON-RPC client for one EVM endpoint.
pub struct AlloyClient {
	endpoint: String,
	provider: DynProvider,
}

impl AlloyClient {
	/// Creates a client for an HTTP(S) JSON-RPC endpoint.
	///
	/// No request is made here, so an unreachable node only surfaces on first use.
	pub fn connect(rpc_url: &str) -> Result<Self, ClientError> {
		let url: reqwest::Url = rpc_url
			.parse()
			.map_err(|e| ClientError::InvalidEndpoint(format!("{}: {}", rpc_url, e)))?;

		if !matches!(url.scheme(), "http" | "https") {
			return Err(ClientError::InvalidEndpoint(format!(
				"{}: only http and https endpoints are supported",
				rpc_url
			)));
		}

		let provider = ProviderBuilder::new().connect_http(url).erased();
		info!(endpoint = %rpc_url, "Created JSON-RPC client");

		Ok(Self::from_provider(rpc_url, provider))
	}

	/// Wraps an already configured provider.
	pub fn from_provider(endpoint: impl Into<String>, provider: DynProvider) -> Self {
		Self {
			endpoint: endpoint.into(),
			provider,
		}
	}
}

/// Checks that `envelope` encodes to the transaction identified by `expected`.
pub(crate) fn verify_envelope(
	expected: &TransactionHash,
	envelope: &TxEnvelope,
) -> Result<(), ClientError> {
	let actual = TransactionHash(keccak256(envelope.encoded_2718()));
	if &actual != expected {
		return Err(ClientError::HashMismatch {
			expected: *expected,
			actual,
		});
	}
	Ok(())
}

/// Separates node-side rejections from transport failures.
pub(crate) fn map_rpc_error(error: TransportError) -> ClientError {
	match error {
		RpcError::ErrorResp(payload) => ClientError::Rejected {
			code: payload.code,
			message: payload.message.to_string(),
		},
		other => ClientError::Transport(other.to_string()),
	}
}

#[async_trait]
impl NetworkClient for AlloyClient {
	fn endpoint(&self) -> &str {
		&self.endpoint
	}

	async fn get_transaction(
		&self,
		hash: &TransactionHash,
	) -> Result<Option<TxEnvelope>, ClientError> {
		let response = self
			.provider
			.get_transaction_by_hash(hash.0)
			.await
			.map_err(map_rpc_error)?;

		let Some(transaction) = response else {
			debug!(tx_hash = %truncate_hash(hash), "Transaction unknown to endpoint");
			return Ok(None);
		};

		let (envelope, from) = transaction.inner.into_parts();
		verify_envelope(hash, &envelope)?;
		debug!(tx_hash = %truncate_hash(hash), %from, "Received transaction");

		Ok(Some(envelope))
	}

	async fn broadcast_transaction(&self, payload: &Bytes) -> Result<TransactionHash, ClientError> {
		let pending = self
			.provider
			.send_raw_transaction(payload)
			.await
			.map_err(map_rpc_error)?;

		let hash = TransactionHash(*pending.tx_hash());
		info!(tx_hash = %truncate_hash(&hash), "Submitted raw transaction");

		Ok(hash)
	}
}

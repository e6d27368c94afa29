//! Error types for the resender.

use crate::hash::TransactionHash;
use crate::pipeline::{ItemPosition, Phase};
use thiserror::Error;

/// Failure reported by a `NetworkClient` implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
	#[error("Invalid endpoint: {0}")]
	InvalidEndpoint(String),

	#[error("Transport error: {0}")]
	Transport(String),

	#[error("Node rejected the request (code {code}): {message}")]
	Rejected { code: i64, message: String },

	#[error("Hash mismatch: requested {expected}, payload hashes to {actual}")]
	HashMismatch {
		expected: TransactionHash,
		actual: TransactionHash,
	},
}

/// Per-item failure of a resend run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResendError {
	#[error("Transaction {hash} does not exist on the source network")]
	TransactionNotFound { hash: TransactionHash },

	#[error("Failed to fetch transaction {hash}: {cause}")]
	FetchFailed {
		hash: TransactionHash,
		#[source]
		cause: ClientError,
	},

	#[error("Destination rejected transaction {hash}: {cause}")]
	SendRejected {
		hash: TransactionHash,
		#[source]
		cause: ClientError,
	},
}

impl ResendError {
	/// Hash of the item that failed.
	pub fn hash(&self) -> &TransactionHash {
		match self {
			ResendError::TransactionNotFound { hash }
			| ResendError::FetchFailed { hash, .. }
			| ResendError::SendRejected { hash, .. } => hash,
		}
	}
}

/// A run that stopped before completing both phases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Resend aborted while {phase} item {position}: {error}")]
pub struct PipelineError {
	pub phase: Phase,
	pub position: ItemPosition,
	#[source]
	pub error: ResendError,
}

impl PipelineError {
	pub fn hash(&self) -> &TransactionHash {
		self.error.hash()
	}
}

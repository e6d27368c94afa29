//! Configuration types.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SOURCE_RPC_URL: &str = "http://localhost:7545";
pub const DEFAULT_DESTINATION_RPC_URL: &str = "http://localhost:8545/";
pub const DEFAULT_TX_HASH_LIST: &str = "
0x9cd1a111624f45993193fa5a4907ad73d43d0c809dcd751b7be95275ae364d53
0x1f66558beb2f6d2371e6bd1409002a3dfa8ee88d0d1e6f26128c4179cda0be9e
0x672ba326e12c655f81894c6a78e995ea33be6f20b6f7b446fd739c6af7d979ec
0x833cc1095d727f036bcf33c5df983682075c9175e1c5c9c6a5bad4f4cdb8ddaa
0x3f30097f232f978e781e4b2734f1a2c38406ba7142fb6c554573ddd5b94a6091
0xd364a9f3dbbfe6af2e5b85b8db4082e421977a64aa409deaad07839b9261148a
0x7a57a49081f239f09862b5d0bc9a18b5132ea6ce484f7431debbcef73687b392
0x4d2442fdee6a64b4d207f1f63ca2fed6dbef9ab45b43e25638566fd8d173319a
0xd0e15bfe33b0b59d0d5c95d4d9e0c56199cb49d343aaf98ecf70769091f31fb9
";

/// Complete resender configuration.
///
/// Every section is optional in configuration files; missing sections fall back
/// to the defaults of the original tooling (a local Ganache-style source on port
/// 7545 and a local node on port 8545).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResenderConfig {
	/// Endpoint transactions are fetched from.
	pub source: EndpointConfig,
	/// Endpoint transactions are resubmitted to.
	pub destination: EndpointConfig,
	/// Where the list of transaction hashes comes from.
	pub input: InputConfig,
}

impl Default for ResenderConfig {
	fn default() -> Self {
		Self {
			source: EndpointConfig::new(DEFAULT_SOURCE_RPC_URL),
			destination: EndpointConfig::new(DEFAULT_DESTINATION_RPC_URL),
			input: InputConfig::default(),
		}
	}
}

impl ResenderConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		self.source.validate("source")?;
		self.destination.validate("destination")?;

		if self.source.rpc_url.trim_end_matches('/') == self.destination.rpc_url.trim_end_matches('/')
		{
			return Err(ConfigError::ValidationError(format!(
				"Source and destination both point at {}",
				self.source.rpc_url
			)));
		}

		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointConfig {
	/// HTTP or HTTPS JSON-RPC URL.
	pub rpc_url: String,
}

impl EndpointConfig {
	pub fn new(rpc_url: impl Into<String>) -> Self {
		Self {
			rpc_url: rpc_url.into(),
		}
	}

	fn validate(&self, role: &str) -> Result<(), ConfigError> {
		let rest = self
			.rpc_url
			.strip_prefix("http://")
			.or_else(|| self.rpc_url.strip_prefix("https://"))
			.ok_or_else(|| {
				ConfigError::ValidationError(format!(
					"The {} RPC URL must start with http:// or https://, got {:?}",
					role, self.rpc_url
				))
			})?;

		if rest.is_empty() || rest.starts_with('/') {
			return Err(ConfigError::ValidationError(format!(
				"The {} RPC URL has no host: {:?}",
				role, self.rpc_url
			)));
		}

		Ok(())
	}
}

/// Source of the transaction hash list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
	/// Free-form text containing transaction hashes.
	pub tx_hash_list: String,
	/// File whose contents replace `tx_hash_list` when set.
	pub hash_file: Option<PathBuf>,
}

impl Default for InputConfig {
	fn default() -> Self {
		Self {
			tx_hash_list: DEFAULT_TX_HASH_LIST.to_string(),
			hash_file: None,
		}
	}
}

impl InputConfig {
	/// Returns the text to extract hashes from.
	pub async fn load_text(&self) -> Result<String, ConfigError> {
		match &self.hash_file {
			Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
				ConfigError::FileNotFound(format!("{}: {}", path.display(), e))
			}),
			None => Ok(self.tx_hash_list.clone()),
		}
	}
}

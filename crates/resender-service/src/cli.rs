//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use resender_config::ResenderConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tx-resender")]
#[command(about = "Resend signed transactions from one EVM network to another", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
	/// Subcommand to execute, `resend` when omitted
	#[command(subcommand)]
	pub command: Option<Command>,

	/// Path to a TOML, JSON or YAML configuration file
	#[arg(short, long, value_name = "FILE", env = "SP_CONFIG_FILE", global = true)]
	pub config: Option<PathBuf>,

	/// Source JSON-RPC URL, overrides SP_RPC_URL_SOURCE. Must differ from the destination
	#[arg(long, value_name = "URL", global = true)]
	pub source_rpc_url: Option<String>,

	/// Destination JSON-RPC URL, overrides SP_RPC_URL_DESTINATION. Must differ from the source
	#[arg(long, value_name = "URL", global = true)]
	pub destination_rpc_url: Option<String>,

	/// Text containing the transaction hashes, overrides SP_TX_HASH_LIST
	#[arg(long, value_name = "TEXT", global = true)]
	pub tx_hash_list: Option<String>,

	/// File containing the transaction hashes
	#[arg(long, value_name = "FILE", global = true)]
	pub hash_file: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, env = "SP_LOG_LEVEL", default_value = "info", global = true)]
	pub log_level: String,

	/// Emit logs as JSON lines
	#[arg(long, global = true)]
	pub json_logs: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
	/// Fetch every listed transaction from the source and resend it to the destination
	#[default]
	Resend,
	/// Print the transaction hashes found in the input without touching the network
	Extract,
	/// Load and validate the configuration, then print the effective settings.
	///
	/// Validation requires http(s) URLs and rejects a destination equal to the
	/// source, ignoring a trailing slash.
	Validate,
}

impl Cli {
	/// Applies flags given on the command line on top of the loaded configuration.
	pub fn apply_overrides(&self, config: &mut ResenderConfig) {
		if let Some(url) = &self.source_rpc_url {
			config.source.rpc_url = url.clone();
		}
		if let Some(url) = &self.destination_rpc_url {
			config.destination.rpc_url = url.clone();
		}
		if let Some(list) = &self.tx_hash_list {
			config.input.tx_hash_list = list.clone();
			config.input.hash_file = None;
		}
		if let Some(path) = &self.hash_file {
			config.input.hash_file = Some(path.clone());
		}
	}
}

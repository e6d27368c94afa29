//! Subcommand implementations.

use anyhow::{Context, Result};
use resender_config::ResenderConfig;
use resender_core::{extract_hashes, ResendPipeline};
use resender_monitoring::TracingObserver;
use resender_network::AlloyClient;
use resender_types::NetworkClient;
use std::sync::Arc;
use tracing::info;

/// Fetches every listed transaction from the source and resends it to the
/// destination. Any failure aborts the run and becomes the process error.
pub async fn resend(config: ResenderConfig) -> Result<()> {
	let hash_list = config
		.input
		.load_text()
		.await
		.context("Failed to read the transaction hash list")?;

	let source: Arc<dyn NetworkClient> = Arc::new(
		AlloyClient::connect(&config.source.rpc_url)
			.context("Failed to create the source network client")?,
	);
	let destination: Arc<dyn NetworkClient> = Arc::new(
		AlloyClient::connect(&config.destination.rpc_url)
			.context("Failed to create the destination network client")?,
	);

	let pipeline = ResendPipeline::new(Arc::new(TracingObserver::new()));
	pipeline
		.run(&hash_list, source, destination)
		.await
		.context("Failed to resend the transactions")?;

	Ok(())
}

/// Prints the hashes that a resend run would process, one per line.
pub async fn extract(config: ResenderConfig) -> Result<()> {
	let hash_list = config
		.input
		.load_text()
		.await
		.context("Failed to read the transaction hash list")?;

	let hashes = extract_hashes(&hash_list);
	info!(count = hashes.len(), "Extracted transaction hashes");

	for hash in &hashes {
		println!("{}", hash);
	}

	Ok(())
}

/// Prints the effective configuration after every layer has been applied.
pub async fn validate(config: ResenderConfig) -> Result<()> {
	info!("Configuration is valid");
	info!("Source RPC URL: {}", config.source.rpc_url);
	info!("Destination RPC URL: {}", config.destination.rpc_url);
	info!("Source and destination differ (identical endpoints are rejected)");
	match &config.input.hash_file {
		Some(path) => info!("Hash list file: {:?}", path),
		None => info!("Hash list: inline"),
	}

	let rendered =
		serde_json::to_string_pretty(&config).context("Failed to render the configuration")?;
	println!("{}", rendered);

	Ok(())
}

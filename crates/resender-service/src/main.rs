use anyhow::{Context, Result};
use clap::Parser;
use resender_config::{ConfigLoader, ResenderConfig};
use resender_monitoring::{init_tracing, TracingConfig};
use tracing::info;

mod cli;
mod commands;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize tracing
	setup_tracing(&cli)?;

	let config = load_config(&cli, |name| std::env::var(name).ok()).await?;

	match cli.command.unwrap_or_default() {
		Command::Resend => commands::resend(config).await,
		Command::Extract => commands::extract(config).await,
		Command::Validate => commands::validate(config).await,
	}
}

fn setup_tracing(cli: &Cli) -> Result<()> {
	let config = TracingConfig::from_level_str(&cli.log_level)
		.context("Failed to parse the log level")?
		.with_json_format(cli.json_logs);

	init_tracing(config).context("Failed to initialize tracing")?;
	Ok(())
}

/// Layers defaults, file, environment and command-line flags, then validates the
/// merged result once.
async fn load_config<F>(cli: &Cli, lookup: F) -> Result<ResenderConfig>
where
	F: Fn(&str) -> Option<String>,
{
	let mut loader = ConfigLoader::new();
	if let Some(path) = &cli.config {
		info!("Loading configuration from: {:?}", path);
		loader = loader.with_file(path);
	}

	let mut config = loader
		.load_unvalidated_with_env(lookup)
		.await
		.context("Failed to load configuration")?;

	cli.apply_overrides(&mut config);
	config.validate().context("Invalid configuration")?;

	Ok(config)
}

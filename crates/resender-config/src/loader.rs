//! Configuration loading from files and environment.

use crate::{ConfigError, ResenderConfig};
use regex::Regex;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

static ENV_REFERENCE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env reference pattern is a valid regex"));

/// Configuration loader with environment variable substitution and overrides.
pub struct ConfigLoader {
	file_path: Option<PathBuf>,
	env_prefix: String,
}

impl Default for ConfigLoader {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			env_prefix: "SP_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_path_buf());
		self
	}

	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	/// Loads, overrides and validates the configuration using the process
	/// environment.
	pub async fn load(&self) -> Result<ResenderConfig, ConfigError> {
		self.load_with_env(|name| env::var(name).ok()).await
	}

	/// Same as [`ConfigLoader::load`] with an explicit variable lookup.
	pub async fn load_with_env<F>(&self, lookup: F) -> Result<ResenderConfig, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let config = self.load_unvalidated_with_env(lookup).await?;
		config.validate()?;

		Ok(config)
	}

	/// Loads the file and environment layers without validating the result.
	///
	/// For callers that layer further overrides on top and validate once at the end.
	pub async fn load_unvalidated_with_env<F>(
		&self,
		lookup: F,
	) -> Result<ResenderConfig, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = match &self.file_path {
			Some(path) => self.load_from_file(path, &lookup).await?,
			None => {
				debug!("No configuration file given, starting from defaults");
				ResenderConfig::default()
			}
		};

		self.apply_env_overrides(&mut config, &lookup);

		Ok(config)
	}

	async fn load_from_file<F>(&self, path: &Path, lookup: &F) -> Result<ResenderConfig, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		info!("Loading configuration from {:?}", path);

		let content = tokio::fs::read_to_string(path)
			.await
			.map_err(|e| ConfigError::FileNotFound(format!("{}: {}", path.display(), e)))?;
		let content = substitute_env_vars(&content, lookup)?;

		match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => {
				toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
			}
			Some("json") => {
				serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
			}
			Some("yaml") | Some("yml") => {
				serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
			}
			_ => Err(ConfigError::ParseError(format!(
				"Unsupported config format: {:?}",
				path
			))),
		}
	}

	fn apply_env_overrides<F>(&self, config: &mut ResenderConfig, lookup: &F)
	where
		F: Fn(&str) -> Option<String>,
	{
		let var = |suffix: &str| lookup(&format!("{}{}", self.env_prefix, suffix));

		if let Some(url) = var("RPC_URL_SOURCE") {
			debug!("Overriding source RPC URL from environment");
			config.source.rpc_url = url;
		}

		if let Some(url) = var("RPC_URL_DESTINATION") {
			debug!("Overriding destination RPC URL from environment");
			config.destination.rpc_url = url;
		}

		if let Some(list) = var("TX_HASH_LIST") {
			debug!("Overriding transaction hash list from environment");
			config.input.tx_hash_list = list;
		}

		if let Some(file) = var("TX_HASH_FILE") {
			debug!("Overriding transaction hash file from environment");
			config.input.hash_file = Some(PathBuf::from(file));
		}
	}
}

/// Replaces every `${VAR_NAME}` in `content` with the variable's value.
fn substitute_env_vars<F>(content: &str, lookup: &F) -> Result<String, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let mut result = content.to_string();

	for cap in ENV_REFERENCE.captures_iter(content) {
		let full_match = &cap[0];
		let var_name = &cap[1];

		let value = lookup(var_name).ok_or_else(|| ConfigError::EnvVarNotFound(var_name.to_string()))?;
		result = result.replace(full_match, &value);
	}

	Ok(result)
}

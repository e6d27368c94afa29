//! Tracing subscriber setup.

use thiserror::Error;
use tracing::{info, Level};
use tracing_subscriber::{
	filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Error, Debug)]
pub enum TracingError {
	#[error("Invalid log level: {0}")]
	InvalidLevel(String),

	#[error("Failed to initialize tracing: {0}")]
	Init(String),
}

/// Tracing configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
	pub level: Level,
	pub json_format: bool,
	pub with_target: bool,
	pub with_thread_ids: bool,
	pub with_file_and_line: bool,
}

impl Default for TracingConfig {
	fn default() -> Self {
		Self {
			level: Level::INFO,
			json_format: false,
			with_target: false,
			with_thread_ids: false,
			with_file_and_line: false,
		}
	}
}

impl TracingConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a configuration from a level name such as `info` or `DEBUG`.
	pub fn from_level_str(level: &str) -> Result<Self, TracingError> {
		let level = level
			.parse::<Level>()
			.map_err(|_| TracingError::InvalidLevel(level.to_string()))?;
		Ok(Self::default().with_level(level))
	}

	pub fn with_level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	pub fn with_json_format(mut self, json: bool) -> Self {
		self.json_format = json;
		self
	}

	pub fn with_target(mut self, target: bool) -> Self {
		self.with_target = target;
		self
	}

	pub fn debug() -> Self {
		Self {
			level: Level::DEBUG,
			with_target: true,
			with_file_and_line: true,
			..Self::default()
		}
	}

	pub fn production() -> Self {
		Self {
			level: Level::INFO,
			json_format: true,
			with_target: true,
			with_thread_ids: false,
			with_file_and_line: false,
		}
	}
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level when it is set.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::default().add_directive(LevelFilter::from_level(config.level).into())
	});

	let subscriber = tracing_subscriber::registry().with(env_filter);

	if config.json_format {
		let json_layer = tracing_subscriber::fmt::layer()
			.json()
			.with_thread_ids(config.with_thread_ids)
			.with_file(config.with_file_and_line)
			.with_line_number(config.with_file_and_line)
			.with_target(config.with_target);

		subscriber
			.with(json_layer)
			.try_init()
			.map_err(|e| TracingError::Init(e.to_string()))?;
	} else {
		let fmt_layer = tracing_subscriber::fmt::layer()
			.compact()
			.with_thread_ids(config.with_thread_ids)
			.with_file(config.with_file_and_line)
			.with_line_number(config.with_file_and_line)
			.with_target(config.with_target);

		subscriber
			.with(fmt_layer)
			.try_init()
			.map_err(|e| TracingError::Init(e.to_string()))?;
	}

	info!("Tracing initialized with level: {:?}", config.level);
	Ok(())
}

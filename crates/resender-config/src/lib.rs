//! Configuration for the transaction resender.
//!
//! Settings are layered: built-in defaults, then an optional TOML, JSON or YAML
//! file (with `${VAR}` substitution), then `SP_`-prefixed environment variables.
//! Command-line flags are applied on top by the binary.

use thiserror::Error;

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),
}

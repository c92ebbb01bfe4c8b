//! Configuration loading utilities

use config::{Config, ConfigError, Environment, File};
use thiserror::Error;

use crate::{ConfigValidationError, Settings};

/// Prefix of environment overrides, e.g. `BUYER__ROUTER__TIMEOUT_MS=5000`
pub const ENV_PREFIX: &str = "BUYER";

const DEFAULT_CONFIG_PATH: &str = "config/config";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("Failed to read configuration: {0}")]
	Source(#[from] ConfigError),

	#[error("Invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load configuration from `config/config` and `BUYER__*` environment overrides
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from(DEFAULT_CONFIG_PATH)
}

/// Load configuration from `path` (any format the config crate supports, the
/// file may be absent) layered under environment overrides, then validate it
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let settings: Settings = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__"),
		)
		.build()?
		.try_deserialize()?;

	settings.validate()?;
	Ok(settings)
}

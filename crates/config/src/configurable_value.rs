//! Configurable values that load from environment variables or plain text
//!
//! Wallet secrets and credentialed URLs are referenced by environment
//! variable name so they never have to live in a committed config file.

use buyer_types::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value read from an environment variable or given inline
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConfigurableValue {
	/// "env" to read an environment variable, "plain" for an inline value
	#[serde(rename = "type")]
	pub value_type: ValueType,
	/// Environment variable name, or the value itself
	pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
	Env,
	Plain,
}

impl ConfigurableValue {
	pub fn from_env(env_var_name: &str) -> Self {
		Self {
			value_type: ValueType::Env,
			value: env_var_name.to_string(),
		}
	}

	pub fn from_plain(plain_value: &str) -> Self {
		Self {
			value_type: ValueType::Plain,
			value: plain_value.to_string(),
		}
	}

	/// Resolve the value, reading the environment for `Env` values
	pub fn resolve(&self) -> Result<String, ConfigurableValueError> {
		match self.value_type {
			ValueType::Env => std::env::var(&self.value).map_err(|_| {
				ConfigurableValueError::EnvironmentVariableNotFound(self.value.clone())
			}),
			ValueType::Plain => Ok(self.value.clone()),
		}
	}

	/// Resolve straight into a `SecretString`
	pub fn resolve_secret(&self) -> Result<SecretString, ConfigurableValueError> {
		self.resolve().map(SecretString::new)
	}

	/// Plain values are stored in the config file itself
	pub fn is_plaintext(&self) -> bool {
		matches!(self.value_type, ValueType::Plain)
	}

	/// Description safe for logs
	pub fn description(&self) -> String {
		match self.value_type {
			ValueType::Env => format!("environment variable '{}'", self.value),
			ValueType::Plain => "inline configuration value".to_string(),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurableValueError {
	#[error("Environment variable '{0}' not found")]
	EnvironmentVariableNotFound(String),
}

// Never show inline values, they may be secrets
impl fmt::Display for ConfigurableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value_type {
			ValueType::Env => write!(f, "env:{}", self.value),
			ValueType::Plain => write!(f, "plain:[REDACTED]"),
		}
	}
}

/// `"env:NAME"` reads the environment, anything else is taken literally
impl From<&str> for ConfigurableValue {
	fn from(value: &str) -> Self {
		if let Some(env_var) = value.strip_prefix("env:") {
			Self::from_env(env_var)
		} else {
			Self::from_plain(value)
		}
	}
}

impl From<String> for ConfigurableValue {
	fn from(value: String) -> Self {
		ConfigurableValue::from(value.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::env;

	#[test]
	fn test_plain_value() {
		let config = ConfigurableValue::from_plain("https://api.mainnet-beta.solana.com");
		assert_eq!(config.value_type, ValueType::Plain);
		assert_eq!(config.resolve().unwrap(), "https://api.mainnet-beta.solana.com");
		assert!(config.is_plaintext());
	}

	#[test]
	fn test_env_value() {
		env::set_var("BUYER_TEST_RPC_URL", "https://rpc.example/?api-key=k");

		let config = ConfigurableValue::from_env("BUYER_TEST_RPC_URL");
		assert_eq!(config.resolve().unwrap(), "https://rpc.example/?api-key=k");
		assert!(!config.is_plaintext());

		env::remove_var("BUYER_TEST_RPC_URL");
	}

	#[test]
	fn test_env_value_not_found() {
		let config = ConfigurableValue::from_env("BUYER_TEST_DOES_NOT_EXIST");
		let err = config.resolve().unwrap_err();
		assert!(err.to_string().contains("BUYER_TEST_DOES_NOT_EXIST"));
	}

	#[test]
	fn test_from_string_conversion() {
		let env_config = ConfigurableValue::from("env:BUYER_PRIVATE_KEY");
		assert_eq!(env_config.value_type, ValueType::Env);
		assert_eq!(env_config.value, "BUYER_PRIVATE_KEY");

		let plain_config = ConfigurableValue::from("literal".to_string());
		assert_eq!(plain_config.value_type, ValueType::Plain);
	}

	#[test]
	fn test_display_hides_plain_values() {
		let config = ConfigurableValue::from_plain("super-secret-key");
		assert_eq!(config.to_string(), "plain:[REDACTED]");
		assert!(!config.description().contains("super-secret-key"));

		let config = ConfigurableValue::from_env("BUYER_PRIVATE_KEY");
		assert_eq!(config.to_string(), "env:BUYER_PRIVATE_KEY");
	}

	#[test]
	fn test_resolve_secret() {
		let secret = ConfigurableValue::from_plain("abc").resolve_secret().unwrap();
		assert_eq!(secret.expose_secret(), "abc");
	}
}

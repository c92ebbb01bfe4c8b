//! Configuration settings structures

use buyer_types::constants::{
	DEFAULT_EXPLORER_TX_URL, DEFAULT_PRIVATE_KEY_ENV, DEFAULT_ROUTER_ENDPOINT,
	DEFAULT_ROUTER_TIMEOUT_MS, DEFAULT_RPC_TIMEOUT_MS, DEFAULT_RPC_URL, DEFAULT_SPEND_AMOUNT,
	MAX_REQUEST_TIMEOUT_MS, MIN_REQUEST_TIMEOUT_MS,
};
use buyer_types::rust_decimal::Decimal;
use buyer_types::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{configurable_value::ConfigurableValue, ConfigurableValueError};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
	pub rpc: RpcSettings,
	pub router: RouterSettings,
	pub wallet: WalletSettings,
	pub trade: TradeSettings,
	pub explorer: ExplorerSettings,
	pub logging: LoggingSettings,
}

/// Ledger JSON-RPC node
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RpcSettings {
	/// Node URL. Provider URLs often embed an API key, so env is preferred.
	pub url: ConfigurableValue,
	pub timeout_ms: u64,
}

/// Swap router (Jupiter Ultra API)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RouterSettings {
	/// Base URL; `order` and `execute` are joined onto it
	pub endpoint: String,
	/// Sent as `x-api-key` when present
	pub api_key: Option<ConfigurableValue>,
	pub timeout_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WalletSettings {
	/// Base58-encoded 64-byte keypair
	pub private_key: ConfigurableValue,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TradeSettings {
	/// SOL spent when the CLI is not given `--amount`
	pub default_spend_amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExplorerSettings {
	/// Prefix a transaction signature is appended to
	pub tx_base_url: String,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
	#[error("{section}.timeout_ms must be between {min} and {max}, got {value}")]
	TimeoutOutOfRange {
		section: &'static str,
		value: u64,
		min: u64,
		max: u64,
	},

	#[error("trade.default_spend_amount must be positive, got {0}")]
	NonPositiveSpendAmount(Decimal),

	#[error("{field} must not be empty")]
	EmptyField { field: &'static str },
}

impl Default for RpcSettings {
	fn default() -> Self {
		Self {
			url: ConfigurableValue::from_plain(DEFAULT_RPC_URL),
			timeout_ms: DEFAULT_RPC_TIMEOUT_MS,
		}
	}
}

impl Default for RouterSettings {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ROUTER_ENDPOINT.to_string(),
			api_key: None,
			timeout_ms: DEFAULT_ROUTER_TIMEOUT_MS,
		}
	}
}

impl Default for WalletSettings {
	fn default() -> Self {
		Self {
			private_key: ConfigurableValue::from_env(DEFAULT_PRIVATE_KEY_ENV),
		}
	}
}

impl Default for TradeSettings {
	fn default() -> Self {
		Self {
			default_spend_amount: DEFAULT_SPEND_AMOUNT,
		}
	}
}

impl Default for ExplorerSettings {
	fn default() -> Self {
		Self {
			tx_base_url: DEFAULT_EXPLORER_TX_URL.to_string(),
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			rpc: RpcSettings::default(),
			router: RouterSettings::default(),
			wallet: WalletSettings::default(),
			trade: TradeSettings::default(),
			explorer: ExplorerSettings::default(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Settings {
	/// Check bounds the rest of the program relies on
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		check_timeout("rpc", self.rpc.timeout_ms)?;
		check_timeout("router", self.router.timeout_ms)?;

		if self.router.endpoint.trim().is_empty() {
			return Err(ConfigValidationError::EmptyField {
				field: "router.endpoint",
			});
		}
		if self.explorer.tx_base_url.trim().is_empty() {
			return Err(ConfigValidationError::EmptyField {
				field: "explorer.tx_base_url",
			});
		}
		if self.trade.default_spend_amount <= Decimal::ZERO {
			return Err(ConfigValidationError::NonPositiveSpendAmount(
				self.trade.default_spend_amount,
			));
		}

		Ok(())
	}

	/// Resolve the RPC node URL (may carry an API key)
	pub fn rpc_url(&self) -> Result<SecretString, ConfigurableValueError> {
		self.rpc.url.resolve_secret()
	}

	/// Resolve the wallet secret
	pub fn wallet_secret(&self) -> Result<SecretString, ConfigurableValueError> {
		self.wallet.private_key.resolve_secret()
	}

	/// Resolve the router API key, if one is configured
	pub fn router_api_key(&self) -> Result<Option<SecretString>, ConfigurableValueError> {
		self.router
			.api_key
			.as_ref()
			.map(ConfigurableValue::resolve_secret)
			.transpose()
	}
}

fn check_timeout(section: &'static str, value: u64) -> Result<(), ConfigValidationError> {
	if (MIN_REQUEST_TIMEOUT_MS..=MAX_REQUEST_TIMEOUT_MS).contains(&value) {
		Ok(())
	} else {
		Err(ConfigValidationError::TimeoutOutOfRange {
			section,
			value,
			min: MIN_REQUEST_TIMEOUT_MS,
			max: MAX_REQUEST_TIMEOUT_MS,
		})
	}
}

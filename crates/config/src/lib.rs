//! Token Buyer Configuration
//!
//! Configuration management and startup utilities for the token buyer.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::{load_config, load_config_from, ConfigLoadError, ENV_PREFIX};
pub use settings::{
	ConfigValidationError, ExplorerSettings, LogFormat, LoggingSettings, RouterSettings,
	RpcSettings, Settings, TradeSettings, WalletSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_wallet_ready};

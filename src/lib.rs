//! Token Buyer
//!
//! Acquires SPL tokens with SOL through an external swap router, then
//! reconciles the result by re-reading on-chain balances.
//!
//! ```rust,no_run
//! use token_buyer::{load_config, AssetReference, BuyerBuilder, DEFAULT_SPEND_AMOUNT};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let buyer = BuyerBuilder::from_config(load_config()?).build()?;
//! let target = AssetReference::from("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
//! let report = buyer.buy(DEFAULT_SPEND_AMOUNT, &target).await?;
//! println!("{}", report.transaction_url);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use buyer_adapters::{build_http_client, HttpClientConfig, JupiterUltraRouter, SolanaRpcClient};
use buyer_config::{ConfigValidationError, ConfigurableValueError, LogFormat, LoggingSettings};
use thiserror::Error;
use tracing::info;

// Core domain types
pub use buyer_types::{
	constants::{DEFAULT_SPEND_AMOUNT, NATIVE_MINT, TOKEN_PROGRAM_ID},
	rust_decimal::Decimal,
	AcquireError, AssetReference, BalanceSnapshot, ErrorKind, IdentityError, LedgerError,
	LedgerRpc, NativeBalance, RawTokenAccount, RouterError, RouterResponse, SecretString,
	SigningIdentity, SwapOutcome, SwapRequest, SwapRouter,
};

// Service layer
pub use buyer_service::{
	classify, AcquisitionReport, BalanceReading, ExplorerLinks, LedgerReader, SwapOrchestrator,
	TokenBuyer,
};

// Config
pub use buyer_config::{
	load_config, load_config_from, log_service_info, log_service_shutdown, log_wallet_ready,
	Settings,
};

pub mod types {
	pub use buyer_types::*;
}

pub mod config {
	pub use buyer_config::*;
}

pub mod adapters {
	pub use buyer_adapters::*;
}

pub mod service {
	pub use buyer_service::*;
}

pub mod mocks;

/// Errors assembling a `TokenBuyer`
#[derive(Debug, Error)]
pub enum BuilderError {
	#[error("Invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),

	#[error("Configuration value unavailable: {0}")]
	Value(#[from] ConfigurableValueError),

	#[error(transparent)]
	Identity(#[from] IdentityError),

	#[error("Failed to create HTTP client: {0}")]
	HttpClient(#[from] reqwest::Error),

	#[error("Failed to create swap router: {0}")]
	Router(#[from] RouterError),
}

/// Wires settings, identity and adapters into a `TokenBuyer`.
///
/// Anything not supplied explicitly is built from settings. Adapters built
/// here share a single HTTP client created once per builder.
#[derive(Debug, Default)]
pub struct BuyerBuilder {
	settings: Settings,
	identity: Option<Arc<SigningIdentity>>,
	ledger: Option<Arc<dyn LedgerRpc>>,
	router: Option<Arc<dyn SwapRouter>>,
	http_client: Option<Arc<reqwest::Client>>,
}

impl BuyerBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_config(settings: Settings) -> Self {
		Self::new().with_settings(settings)
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = settings;
		self
	}

	/// Use an already derived identity instead of `wallet.private_key`
	pub fn with_identity(mut self, identity: Arc<SigningIdentity>) -> Self {
		self.identity = Some(identity);
		self
	}

	pub fn with_ledger(mut self, ledger: Arc<dyn LedgerRpc>) -> Self {
		self.ledger = Some(ledger);
		self
	}

	pub fn with_router(mut self, router: Arc<dyn SwapRouter>) -> Self {
		self.router = Some(router);
		self
	}

	pub fn with_http_client(mut self, client: Arc<reqwest::Client>) -> Self {
		self.http_client = Some(client);
		self
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	fn shared_client(&mut self) -> Result<Arc<reqwest::Client>, reqwest::Error> {
		if let Some(client) = &self.http_client {
			return Ok(client.clone());
		}
		let client = build_http_client(&HttpClientConfig::default())?;
		self.http_client = Some(client.clone());
		Ok(client)
	}

	/// Validate settings and assemble the buyer
	pub fn build(mut self) -> Result<TokenBuyer, BuilderError> {
		self.settings.validate()?;

		let identity = match self.identity.take() {
			Some(identity) => identity,
			None => Arc::new(SigningIdentity::from_base58(
				&self.settings.wallet_secret()?,
			)?),
		};

		let ledger: Arc<dyn LedgerRpc> = match self.ledger.take() {
			Some(ledger) => ledger,
			None => Arc::new(SolanaRpcClient::new(
				self.shared_client()?,
				self.settings.rpc_url()?,
				self.settings.rpc.timeout_ms,
			)),
		};

		let router: Arc<dyn SwapRouter> = match self.router.take() {
			Some(router) => router,
			None => Arc::new(JupiterUltraRouter::new(
				self.shared_client()?,
				&self.settings.router.endpoint,
				self.settings.router_api_key()?,
				self.settings.router.timeout_ms,
			)?),
		};

		info!(
			"Token buyer ready for wallet {} using {} router",
			identity.public_address(),
			router.name()
		);

		Ok(TokenBuyer::new(
			identity,
			LedgerReader::new(ledger),
			SwapOrchestrator::new(router),
			ExplorerLinks::new(self.settings.explorer.tx_base_url.clone()),
		))
	}
}

/// Install the global tracing subscriber from logging settings.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(logging: &LoggingSettings) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

	match logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
			if logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()?;
			} else {
				subscriber.try_init()?;
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);
			if logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()?;
			} else {
				subscriber.try_init()?;
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);
			if logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()?;
			} else {
				subscriber.try_init()?;
			}
		},
	}

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		logging.level, logging.format, logging.structured
	);

	Ok(())
}

//! Startup and shutdown logging for the token buyer

use std::env;
use tracing::{info, warn};

use crate::Settings;

/// Log service, platform and configuration details at startup.
///
/// Only descriptions of credentials are logged, never their values.
pub fn log_service_info(settings: &Settings) {
	info!("=== Token Buyer Starting ===");
	info!("🚀 Service: token-buyer v{}", env!("CARGO_PKG_VERSION"));
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🔗 Ledger RPC: {} (timeout {}ms)",
		settings.rpc.url.description(),
		settings.rpc.timeout_ms
	);
	info!(
		"🔀 Swap router: {} (timeout {}ms)",
		settings.router.endpoint, settings.router.timeout_ms
	);
	info!(
		"🔑 Wallet secret: {}",
		settings.wallet.private_key.description()
	);

	if settings.wallet.private_key.is_plaintext() {
		warn!("Wallet secret is stored inline in configuration; prefer an environment variable");
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Log the wallet address once the identity is derived
pub fn log_wallet_ready(address: &str) {
	info!("👛 Using wallet: {}", address);
}

/// Log service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 Token Buyer Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

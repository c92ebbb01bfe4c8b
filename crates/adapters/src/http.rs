//! Shared HTTP client construction
//!
//! One client is built at startup and handed to every adapter so connection
//! pools are reused across ledger and router calls.

use buyer_types::constants::{DEFAULT_KEEP_ALIVE_TIMEOUT_MS, DEFAULT_POOL_MAX_IDLE_PER_HOST};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Settings for the process-wide HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
	pub user_agent: String,
	/// Maximum number of idle connections per host
	pub max_idle_per_host: usize,
	/// Connection keep-alive timeout
	pub keep_alive_timeout_ms: u64,
	/// Extra default headers
	pub headers: Vec<(String, String)>,
}

impl Default for HttpClientConfig {
	fn default() -> Self {
		Self {
			user_agent: format!("token-buyer/{}", env!("CARGO_PKG_VERSION")),
			max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
			keep_alive_timeout_ms: DEFAULT_KEEP_ALIVE_TIMEOUT_MS,
			headers: vec![("Accept".to_string(), "application/json".to_string())],
		}
	}
}

/// Build the shared client.
///
/// No overall timeout is set here; adapters apply their configured
/// per-request timeouts.
pub fn build_http_client(config: &HttpClientConfig) -> Result<Arc<Client>, reqwest::Error> {
	let mut header_map = HeaderMap::new();
	for (key, value) in &config.headers {
		match (
			HeaderName::from_bytes(key.as_bytes()),
			HeaderValue::from_str(value),
		) {
			(Ok(name), Ok(value)) => {
				header_map.insert(name, value);
			},
			_ => warn!("Skipping invalid default header '{}'", key),
		}
	}

	let client = ClientBuilder::new()
		.user_agent(config.user_agent.clone())
		.pool_max_idle_per_host(config.max_idle_per_host)
		.pool_idle_timeout(Duration::from_millis(config.keep_alive_timeout_ms))
		.tcp_keepalive(Duration::from_secs(60))
		.default_headers(header_map)
		.build()?;

	debug!(
		"Created shared HTTP client (max idle per host: {})",
		config.max_idle_per_host
	);

	Ok(Arc::new(client))
}

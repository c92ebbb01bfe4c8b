//! Global limits and defaults for configuration and runtime

/// Minimum allowed timeout for ledger and router requests in milliseconds
pub const MIN_REQUEST_TIMEOUT_MS: u64 = 100; // 100ms

/// Maximum allowed timeout for ledger and router requests in milliseconds
pub const MAX_REQUEST_TIMEOUT_MS: u64 = 120_000; // 2min

/// Default timeout for ledger RPC requests in milliseconds
pub const DEFAULT_RPC_TIMEOUT_MS: u64 = 10_000; // 10s

/// Default timeout for swap router requests in milliseconds
pub const DEFAULT_ROUTER_TIMEOUT_MS: u64 = 30_000; // 30s

/// Idle connections kept per host by the shared HTTP client
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Keep-alive for pooled connections in milliseconds
pub const DEFAULT_KEEP_ALIVE_TIMEOUT_MS: u64 = 90_000; // 90s

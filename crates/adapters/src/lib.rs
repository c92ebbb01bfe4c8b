//! Token Buyer Adapters
//!
//! Network adapters for the token buyer: a Solana JSON-RPC ledger client and
//! a Jupiter Ultra swap router, sharing one HTTP client.

pub mod http;
pub mod jupiter_adapter;
pub mod solana_rpc;
pub mod transaction;

pub use http::{build_http_client, HttpClientConfig};
pub use jupiter_adapter::JupiterUltraRouter;
pub use solana_rpc::SolanaRpcClient;
pub use buyer_types::{LedgerRpc, RouterError, RouterResult, SwapRouter};

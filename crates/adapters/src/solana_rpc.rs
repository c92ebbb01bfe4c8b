//! Solana JSON-RPC ledger adapter

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use buyer_types::{LedgerError, LedgerResult, LedgerRpc, RawTokenAccount, SecretString};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
	jsonrpc: &'static str,
	id: u64,
	method: &'a str,
	params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
	result: Option<T>,
	error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
	code: i64,
	message: String,
}

/// `{ context, value }` wrapper used by most account methods
#[derive(Debug, Deserialize)]
struct WithContext<T> {
	value: T,
}

#[derive(Debug, Deserialize)]
struct KeyedAccount {
	pubkey: String,
	account: EncodedAccount,
}

/// Account data arrives as `[payload, encoding]`
#[derive(Debug, Deserialize)]
struct EncodedAccount {
	data: Vec<String>,
}

/// JSON-RPC client for a Solana node
#[derive(Debug)]
pub struct SolanaRpcClient {
	client: Arc<Client>,
	/// Provider URLs commonly embed an API key
	url: SecretString,
	timeout: Duration,
}

impl SolanaRpcClient {
	pub fn new(client: Arc<Client>, url: SecretString, timeout_ms: u64) -> Self {
		Self {
			client,
			url,
			timeout: Duration::from_millis(timeout_ms),
		}
	}

	async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> LedgerResult<T> {
		let request = RpcRequest {
			jsonrpc: "2.0",
			id: 1,
			method,
			params,
		};

		debug!("Sending {} to ledger RPC", method);

		// Strip the URL from transport errors so API keys never reach logs
		let response = self
			.client
			.post(self.url.expose_secret())
			.timeout(self.timeout)
			.json(&request)
			.send()
			.await
			.map_err(|e| LedgerError::Http(e.without_url()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(LedgerError::HttpStatus {
				status_code: status.as_u16(),
				reason: format!("{} returned status {}", method, status),
			});
		}

		let body = response
			.text()
			.await
			.map_err(|e| LedgerError::Http(e.without_url()))?;
		debug!("{} responded with {} bytes", method, body.len());

		let parsed: RpcResponse<T> =
			serde_json::from_str(&body).map_err(|e| LedgerError::InvalidResponse {
				reason: format!("Failed to parse {} response: {}", method, e),
			})?;

		if let Some(error) = parsed.error {
			return Err(LedgerError::Rpc {
				code: error.code,
				message: error.message,
			});
		}

		parsed.result.ok_or_else(|| LedgerError::InvalidResponse {
			reason: format!("{} response has neither result nor error", method),
		})
	}
}

fn decode_account(keyed: KeyedAccount) -> Option<RawTokenAccount> {
	let (payload, encoding) = match keyed.account.data.as_slice() {
		[payload, encoding, ..] => (payload, encoding.as_str()),
		_ => {
			warn!("Token account {} has no encoded data", keyed.pubkey);
			return None;
		},
	};
	if encoding != "base64" {
		warn!(
			"Token account {} uses unexpected encoding '{}'",
			keyed.pubkey, encoding
		);
		return None;
	}

	match BASE64.decode(payload) {
		Ok(data) => Some(RawTokenAccount::new(keyed.pubkey, data)),
		Err(e) => {
			warn!("Token account {} data is not base64: {}", keyed.pubkey, e);
			None
		},
	}
}

#[async_trait]
impl LedgerRpc for SolanaRpcClient {
	async fn get_balance(&self, address: &str) -> LedgerResult<u64> {
		let balance: WithContext<u64> = self.call("getBalance", json!([address])).await?;
		Ok(balance.value)
	}

	async fn get_token_accounts_by_owner(
		&self,
		owner: &str,
		program_id: &str,
	) -> LedgerResult<Vec<RawTokenAccount>> {
		let accounts: WithContext<Vec<KeyedAccount>> = self
			.call(
				"getTokenAccountsByOwner",
				json!([owner, { "programId": program_id }, { "encoding": "base64" }]),
			)
			.await?;

		debug!(
			"Ledger returned {} token accounts for {}",
			accounts.value.len(),
			owner
		);

		Ok(accounts.value.into_iter().filter_map(decode_account).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_balance_response() {
		let body = r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":1},"value":1500000000}}"#;
		let parsed: RpcResponse<WithContext<u64>> = serde_json::from_str(body).unwrap();
		assert_eq!(parsed.result.unwrap().value, 1_500_000_000);
	}

	#[test]
	fn test_parse_error_response() {
		let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid param"}}"#;
		let parsed: RpcResponse<WithContext<u64>> = serde_json::from_str(body).unwrap();
		assert!(parsed.result.is_none());
		assert_eq!(parsed.error.unwrap().code, -32602);
	}

	#[test]
	fn test_decode_account_data() {
		let keyed = KeyedAccount {
			pubkey: "acct".to_string(),
			account: EncodedAccount {
				data: vec![BASE64.encode([1u8, 2, 3]), "base64".to_string()],
			},
		};
		let account = decode_account(keyed).unwrap();
		assert_eq!(account.data, vec![1, 2, 3]);
	}

	#[test]
	fn test_decode_account_rejects_other_encodings() {
		let keyed = KeyedAccount {
			pubkey: "acct".to_string(),
			account: EncodedAccount {
				data: vec!["AQID".to_string(), "base58".to_string()],
			},
		};
		assert!(decode_account(keyed).is_none());

		let keyed = KeyedAccount {
			pubkey: "acct".to_string(),
			account: EncodedAccount { data: vec![] },
		};
		assert!(decode_account(keyed).is_none());
	}
}

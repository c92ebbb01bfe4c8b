//! axum servers standing in for a Solana RPC node and the Jupiter Ultra API

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
	extract::{Query, State},
	http::{HeaderMap, StatusCode},
	response::{IntoResponse, Response},
	routing::{get, post},
	Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use token_buyer::TOKEN_PROGRAM_ID;

use super::fixtures::unsigned_transaction;

/// A server bound to an ephemeral local port, stopped on drop
pub struct MockServer {
	pub base_url: String,
	handle: JoinHandle<()>,
}

impl MockServer {
	async fn spawn(app: Router) -> Self {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		let handle = tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});

		Self {
			base_url: format!("http://{}", addr),
			handle,
		}
	}
}

impl Drop for MockServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

/// What the mock RPC node answers
#[derive(Debug, Clone, Default)]
pub struct LedgerScript {
	pub lamports: u64,
	/// `(account address, raw data)`
	pub accounts: Vec<(String, Vec<u8>)>,
	pub rpc_error: Option<(i64, String)>,
	pub http_status: Option<u16>,
}

pub async fn spawn_ledger_server(script: LedgerScript) -> MockServer {
	let app = Router::new()
		.route("/", post(ledger_handler))
		.with_state(Arc::new(script));
	MockServer::spawn(app).await
}

async fn ledger_handler(
	State(script): State<Arc<LedgerScript>>,
	Json(request): Json<Value>,
) -> Response {
	if let Some(code) = script.http_status {
		return (StatusCode::from_u16(code).unwrap(), "unavailable").into_response();
	}

	let id = request["id"].clone();
	if let Some((code, message)) = &script.rpc_error {
		return Json(json!({
			"jsonrpc": "2.0",
			"id": id,
			"error": { "code": code, "message": message }
		}))
		.into_response();
	}

	let result = match request["method"].as_str() {
		Some("getBalance") => json!({ "context": { "slot": 1 }, "value": script.lamports }),
		Some("getTokenAccountsByOwner") => {
			let accounts: Vec<Value> = script
				.accounts
				.iter()
				.map(|(pubkey, data)| {
					json!({
						"pubkey": pubkey,
						"account": {
							"data": [BASE64.encode(data), "base64"],
							"executable": false,
							"lamports": 2_039_280,
							"owner": TOKEN_PROGRAM_ID,
							"rentEpoch": 0
						}
					})
				})
				.collect();
			json!({ "context": { "slot": 1 }, "value": accounts })
		},
		_ => {
			return Json(json!({
				"jsonrpc": "2.0",
				"id": id,
				"error": { "code": -32601, "message": "Method not found" }
			}))
			.into_response()
		},
	};

	Json(json!({ "jsonrpc": "2.0", "id": id, "result": result })).into_response()
}

/// How the mock router answers `execute`
#[derive(Debug, Clone)]
pub enum ExecuteReply {
	Success { signature: String },
	Failed { signature: String, error: String, code: i64 },
	HttpStatus(u16),
}

/// Scripted Jupiter Ultra API; records what it receives
#[derive(Debug)]
pub struct RouterScript {
	/// Answer `order` with this error and no transaction
	pub order_error: Option<String>,
	/// Build the order transaction for this fee payer instead of the taker
	pub fee_payer_override: Option<[u8; 32]>,
	pub execute: ExecuteReply,
	pub orders: Mutex<Vec<HashMap<String, String>>>,
	pub executions: Mutex<Vec<Value>>,
	pub api_keys: Mutex<Vec<Option<String>>>,
}

impl RouterScript {
	pub fn new(execute: ExecuteReply) -> Self {
		Self {
			order_error: None,
			fee_payer_override: None,
			execute,
			orders: Mutex::new(Vec::new()),
			executions: Mutex::new(Vec::new()),
			api_keys: Mutex::new(Vec::new()),
		}
	}

	pub fn succeeding(signature: &str) -> Self {
		Self::new(ExecuteReply::Success {
			signature: signature.to_string(),
		})
	}

	pub fn orders(&self) -> Vec<HashMap<String, String>> {
		self.orders.lock().unwrap().clone()
	}

	pub fn executions(&self) -> Vec<Value> {
		self.executions.lock().unwrap().clone()
	}

	pub fn api_keys(&self) -> Vec<Option<String>> {
		self.api_keys.lock().unwrap().clone()
	}
}

/// Serve `script` under `/ultra/v1`; returns the server and its endpoint
pub async fn spawn_router_server(script: Arc<RouterScript>) -> (MockServer, String) {
	let app = Router::new()
		.route("/ultra/v1/order", get(order_handler))
		.route("/ultra/v1/execute", post(execute_handler))
		.with_state(script);
	let server = MockServer::spawn(app).await;
	let endpoint = format!("{}/ultra/v1", server.base_url);
	(server, endpoint)
}

fn record_api_key(script: &RouterScript, headers: &HeaderMap) {
	let key = headers
		.get("x-api-key")
		.and_then(|value| value.to_str().ok())
		.map(str::to_string);
	script.api_keys.lock().unwrap().push(key);
}

async fn order_handler(
	State(script): State<Arc<RouterScript>>,
	headers: HeaderMap,
	Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
	record_api_key(&script, &headers);
	script.orders.lock().unwrap().push(params.clone());

	if let Some(error) = &script.order_error {
		return Json(json!({ "errorMessage": error, "transaction": null }));
	}

	let fee_payer = match script.fee_payer_override {
		Some(payer) => payer,
		None => {
			let taker = params.get("taker").cloned().unwrap_or_default();
			let bytes = bs58::decode(taker).into_vec().unwrap();
			<[u8; 32]>::try_from(bytes.as_slice()).unwrap()
		},
	};

	Json(json!({
		"transaction": BASE64.encode(unsigned_transaction(&fee_payer)),
		"requestId": "req-0001",
		"inAmount": params.get("amount").cloned().unwrap_or_default(),
		"outAmount": "7250000",
		"swapType": "aggregator"
	}))
}

async fn execute_handler(
	State(script): State<Arc<RouterScript>>,
	headers: HeaderMap,
	Json(body): Json<Value>,
) -> Response {
	record_api_key(&script, &headers);
	script.executions.lock().unwrap().push(body);

	match &script.execute {
		ExecuteReply::Success { signature } => Json(json!({
			"status": "Success",
			"signature": signature,
			"code": 0,
			"slot": "123456"
		}))
		.into_response(),
		ExecuteReply::Failed {
			signature,
			error,
			code,
		} => Json(json!({
			"status": "Failed",
			"signature": signature,
			"error": error,
			"code": code
		}))
		.into_response(),
		ExecuteReply::HttpStatus(code) => {
			(StatusCode::from_u16(*code).unwrap(), "router error").into_response()
		},
	}
}

//! Jupiter Ultra swap router adapter
//!
//! Two calls per swap: `GET order` builds an unsigned transaction for the
//! taker, `POST execute` takes the signed transaction, lands it and reports
//! the result.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use buyer_types::{
	RouterError, RouterResponse, RouterResult, SecretString, SigningIdentity, SwapRequest,
	SwapRouter,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::transaction::sign_serialized_transaction;

const API_KEY_HEADER: &str = "x-api-key";

/// `GET order` response; only the fields the adapter reads
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderResponse {
	#[serde(default)]
	transaction: Option<String>,
	#[serde(default)]
	request_id: Option<String>,
	#[serde(default)]
	in_amount: Option<String>,
	#[serde(default)]
	out_amount: Option<String>,
	#[serde(default)]
	error_message: Option<String>,
	#[serde(default)]
	error: Option<String>,
}

impl OrderResponse {
	fn error_text(&self) -> Option<String> {
		self.error_message.clone().or_else(|| self.error.clone())
	}
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteRequest<'a> {
	signed_transaction: String,
	request_id: &'a str,
}

/// `POST execute` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteResponse {
	#[serde(default)]
	status: Option<String>,
	#[serde(default)]
	signature: Option<String>,
	#[serde(default)]
	error: Option<String>,
	#[serde(default)]
	code: Option<i64>,
}

impl From<ExecuteResponse> for RouterResponse {
	fn from(response: ExecuteResponse) -> Self {
		let success = response
			.status
			.as_deref()
			.map(|status| status.eq_ignore_ascii_case("success"));
		let error = response.error.or_else(|| match (success, response.code) {
			(Some(false), Some(code)) => Some(format!("execution failed with code {}", code)),
			_ => None,
		});

		RouterResponse {
			txid: response.signature,
			success,
			status: response.status,
			error,
		}
	}
}

/// Router backed by the Jupiter Ultra API
#[derive(Debug)]
pub struct JupiterUltraRouter {
	client: Arc<Client>,
	endpoint: Url,
	api_key: Option<SecretString>,
	timeout: Duration,
}

impl JupiterUltraRouter {
	pub fn new(
		client: Arc<Client>,
		endpoint: &str,
		api_key: Option<SecretString>,
		timeout_ms: u64,
	) -> RouterResult<Self> {
		// Joining relative paths onto a base without a trailing slash drops its last segment
		let mut endpoint = Url::parse(endpoint).map_err(|e| RouterError::Config {
			reason: format!("Invalid router endpoint '{}': {}", endpoint, e),
		})?;
		if !endpoint.path().ends_with('/') {
			let path = format!("{}/", endpoint.path());
			endpoint.set_path(&path);
		}

		Ok(Self {
			client,
			endpoint,
			api_key,
			timeout: Duration::from_millis(timeout_ms),
		})
	}

	fn build_url(&self, path: &str) -> RouterResult<Url> {
		self.endpoint
			.join(path)
			.map_err(|e| RouterError::Config {
				reason: format!("Failed to build router URL for '{}': {}", path, e),
			})
	}

	fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
		let builder = builder.timeout(self.timeout);
		match &self.api_key {
			Some(key) => builder.header(API_KEY_HEADER, key.expose_secret()),
			None => builder,
		}
	}

	async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> RouterResult<T> {
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			warn!("Router {} endpoint returned status {}: {}", what, status, body);
			return Err(RouterError::from_http_failure(status.as_u16()));
		}

		let body = response.text().await?;
		debug!("Router {} endpoint responded with {} bytes", what, body.len());

		serde_json::from_str(&body).map_err(|e| RouterError::InvalidResponse {
			reason: format!("Failed to parse router {} response: {}", what, e),
		})
	}

	async fn fetch_order(&self, request: &SwapRequest) -> RouterResult<OrderResponse> {
		let url = self.build_url("order")?;
		let amount = request.amount.to_string();

		let response = self
			.authorize(self.client.get(url))
			.query(&[
				("inputMint", request.source.as_str()),
				("outputMint", request.target.as_str()),
				("amount", amount.as_str()),
				("taker", request.owner.as_str()),
			])
			.send()
			.await?;

		Self::read_json(response, "order").await
	}

	async fn execute(&self, signed_transaction: String, request_id: &str) -> RouterResult<ExecuteResponse> {
		let url = self.build_url("execute")?;
		let body = ExecuteRequest {
			signed_transaction,
			request_id,
		};

		let response = self
			.authorize(self.client.post(url))
			.json(&body)
			.send()
			.await?;

		Self::read_json(response, "execute").await
	}
}

#[async_trait]
impl SwapRouter for JupiterUltraRouter {
	fn name(&self) -> &str {
		"jupiter-ultra"
	}

	async fn place_order(
		&self,
		identity: &SigningIdentity,
		request: &SwapRequest,
	) -> RouterResult<RouterResponse> {
		debug!(
			"Requesting Jupiter order: {} {} -> {} for {}",
			request.amount, request.source, request.target, request.owner
		);

		let order = self.fetch_order(request).await?;

		let (transaction, request_id) = match (&order.transaction, &order.request_id) {
			(Some(tx), Some(id)) if !tx.is_empty() && !id.is_empty() => (tx, id),
			_ => {
				// Nothing was signed or sent, so a reference cannot exist
				let reason = order
					.error_text()
					.unwrap_or_else(|| "router returned no transaction".to_string());
				warn!("Jupiter order produced no transaction: {}", reason);
				return Ok(RouterResponse {
					error: Some(reason),
					..RouterResponse::default()
				});
			},
		};

		info!(
			"Jupiter order {} quoted {} in / {} out",
			request_id,
			order.in_amount.as_deref().unwrap_or("?"),
			order.out_amount.as_deref().unwrap_or("?")
		);

		let mut bytes = BASE64
			.decode(transaction)
			.map_err(|e| RouterError::InvalidResponse {
				reason: format!("Order transaction is not base64: {}", e),
			})?;
		sign_serialized_transaction(&mut bytes, identity)?;

		let executed = self.execute(BASE64.encode(&bytes), request_id).await?;
		debug!("Jupiter execute result: {:?}", executed);

		Ok(executed.into())
	}
}

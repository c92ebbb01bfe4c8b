//! Jupiter Ultra adapter against a mock router API

mod mocks;

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use mocks::{
	identity, spawn_router_server, split_transaction, ExecuteReply, RouterScript, TARGET_MINT,
};
use rust_decimal_macros::dec;
use token_buyer::adapters::JupiterUltraRouter;
use token_buyer::{
	AssetReference, RouterError, SecretString, SwapOrchestrator, SwapOutcome, SwapRouter,
	NATIVE_MINT,
};

fn router(endpoint: &str, api_key: Option<&str>) -> JupiterUltraRouter {
	JupiterUltraRouter::new(
		Arc::new(reqwest::Client::new()),
		endpoint,
		api_key.map(SecretString::from),
		2_000,
	)
	.unwrap()
}

#[tokio::test]
async fn test_order_is_signed_and_executed() {
	let script = Arc::new(RouterScript::succeeding("5xSig"));
	let (_server, endpoint) = spawn_router_server(script.clone()).await;
	let wallet = identity(3);
	let request =
		SwapOrchestrator::prepare(&wallet, dec!(0.05), &AssetReference::from(TARGET_MINT))
			.unwrap();

	let response = router(&endpoint, None)
		.place_order(&wallet, &request)
		.await
		.unwrap();

	assert_eq!(response.txid.as_deref(), Some("5xSig"));
	assert_eq!(response.success, Some(true));

	let orders = script.orders();
	assert_eq!(orders.len(), 1);
	assert_eq!(orders[0]["inputMint"], NATIVE_MINT);
	assert_eq!(orders[0]["outputMint"], TARGET_MINT);
	assert_eq!(orders[0]["amount"], "50000000");
	assert_eq!(orders[0]["taker"], wallet.public_address());

	let executions = script.executions();
	assert_eq!(executions.len(), 1);
	assert_eq!(executions[0]["requestId"], "req-0001");

	let signed = BASE64
		.decode(executions[0]["signedTransaction"].as_str().unwrap())
		.unwrap();
	let (signature, message) = split_transaction(&signed);
	let verifying_key = VerifyingKey::from_bytes(&wallet.public_key_bytes()).unwrap();
	verifying_key
		.verify(message, &Signature::from_bytes(&signature))
		.unwrap();
}

#[tokio::test]
async fn test_api_key_header_is_sent() {
	let script = Arc::new(RouterScript::succeeding("5xSig"));
	let (_server, endpoint) = spawn_router_server(script.clone()).await;
	let wallet = identity(3);
	let request =
		SwapOrchestrator::prepare(&wallet, dec!(0.01), &AssetReference::from(TARGET_MINT))
			.unwrap();

	router(&endpoint, Some("test-key"))
		.place_order(&wallet, &request)
		.await
		.unwrap();

	assert_eq!(
		script.api_keys(),
		vec![Some("test-key".to_string()), Some("test-key".to_string())]
	);
}

#[tokio::test]
async fn test_order_without_transaction_is_not_executed() {
	let mut script = RouterScript::succeeding("unused");
	script.order_error = Some("Insufficient funds".to_string());
	let script = Arc::new(script);
	let (_server, endpoint) = spawn_router_server(script.clone()).await;
	let wallet = identity(3);
	let request =
		SwapOrchestrator::prepare(&wallet, dec!(0.05), &AssetReference::from(TARGET_MINT))
			.unwrap();

	let response = router(&endpoint, None)
		.place_order(&wallet, &request)
		.await
		.unwrap();

	assert_eq!(response.txid, None);
	assert_eq!(response.error.as_deref(), Some("Insufficient funds"));
	assert!(script.executions().is_empty());
	assert_eq!(
		SwapOutcome::from_router_response(&response),
		SwapOutcome::Failed {
			reference: None,
			reason: "Insufficient funds".to_string(),
		}
	);
}

#[tokio::test]
async fn test_failed_execution_keeps_signature() {
	let script = Arc::new(RouterScript::new(ExecuteReply::Failed {
		signature: "4yFailedSig".to_string(),
		error: "Slippage tolerance exceeded".to_string(),
		code: -1005,
	}));
	let (_server, endpoint) = spawn_router_server(script).await;
	let wallet = identity(3);
	let request =
		SwapOrchestrator::prepare(&wallet, dec!(0.05), &AssetReference::from(TARGET_MINT))
			.unwrap();

	let response = router(&endpoint, None)
		.place_order(&wallet, &request)
		.await
		.unwrap();

	assert_eq!(
		SwapOutcome::from_router_response(&response),
		SwapOutcome::Failed {
			reference: Some("4yFailedSig".to_string()),
			reason: "Slippage tolerance exceeded".to_string(),
		}
	);
}

#[tokio::test]
async fn test_execute_http_failure_is_router_error() {
	let script = Arc::new(RouterScript::new(ExecuteReply::HttpStatus(502)));
	let (_server, endpoint) = spawn_router_server(script).await;
	let wallet = identity(3);
	let request =
		SwapOrchestrator::prepare(&wallet, dec!(0.05), &AssetReference::from(TARGET_MINT))
			.unwrap();

	let err = router(&endpoint, None)
		.place_order(&wallet, &request)
		.await
		.unwrap_err();
	assert_eq!(err.status_code(), Some(502));
}

#[tokio::test]
async fn test_foreign_fee_payer_is_not_signed() {
	let mut script = RouterScript::succeeding("unused");
	script.fee_payer_override = Some([5u8; 32]);
	let script = Arc::new(script);
	let (_server, endpoint) = spawn_router_server(script.clone()).await;
	let wallet = identity(3);
	let request =
		SwapOrchestrator::prepare(&wallet, dec!(0.05), &AssetReference::from(TARGET_MINT))
			.unwrap();

	let err = router(&endpoint, None)
		.place_order(&wallet, &request)
		.await
		.unwrap_err();
	assert!(matches!(err, RouterError::Signing { .. }));
	assert!(script.executions().is_empty());
}

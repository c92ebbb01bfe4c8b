//! In-memory ledger and router for demos and testing
//!
//! `MockRouter` can credit a `MockLedger` when a swap succeeds, so the
//! before/after reconciliation of `TokenBuyer::buy` can be exercised without
//! any network access.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use buyer_types::constants::TOKEN_PROGRAM_ID;
use buyer_types::{
	LedgerError, LedgerResult, LedgerRpc, RawTokenAccount, RouterError, RouterResponse,
	RouterResult, SigningIdentity, SwapRequest, SwapRouter,
};

/// Build raw token account bytes holding `raw_amount` of `mint`
pub fn token_account_data(mint: &str, raw_amount: u64) -> Vec<u8> {
	let mut data = vec![0u8; 165];
	if let Ok(mint_bytes) = bs58::decode(mint).into_vec() {
		let len = mint_bytes.len().min(32);
		data[..len].copy_from_slice(&mint_bytes[..len]);
	}
	data[64..72].copy_from_slice(&raw_amount.to_le_bytes());
	data
}

#[derive(Debug, Default)]
struct LedgerState {
	lamports: u64,
	tokens: HashMap<String, u64>,
	offline: bool,
}

/// Ledger with a single wallet's balances held in memory
#[derive(Debug, Default)]
pub struct MockLedger {
	state: Mutex<LedgerState>,
	calls: AtomicUsize,
}

impl MockLedger {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_lamports(self, lamports: u64) -> Self {
		self.set_lamports(lamports);
		self
	}

	pub fn with_token(self, mint: &str, raw_amount: u64) -> Self {
		self.credit(mint, raw_amount);
		self
	}

	pub fn set_lamports(&self, lamports: u64) {
		if let Ok(mut state) = self.state.lock() {
			state.lamports = lamports;
		}
	}

	/// Add `raw_amount` to the holding of `mint`
	pub fn credit(&self, mint: &str, raw_amount: u64) {
		if let Ok(mut state) = self.state.lock() {
			let entry = state.tokens.entry(mint.to_string()).or_insert(0);
			*entry = entry.saturating_add(raw_amount);
		}
	}

	/// Make every query fail until switched back
	pub fn set_offline(&self, offline: bool) {
		if let Ok(mut state) = self.state.lock() {
			state.offline = offline;
		}
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	fn snapshot(&self) -> LedgerResult<(u64, HashMap<String, u64>)> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		let state = self.state.lock().map_err(|_| LedgerError::InvalidResponse {
			reason: "mock ledger state poisoned".to_string(),
		})?;
		if state.offline {
			return Err(LedgerError::HttpStatus {
				status_code: 503,
				reason: "mock ledger offline".to_string(),
			});
		}
		Ok((state.lamports, state.tokens.clone()))
	}
}

#[async_trait]
impl LedgerRpc for MockLedger {
	async fn get_balance(&self, _address: &str) -> LedgerResult<u64> {
		self.snapshot().map(|(lamports, _)| lamports)
	}

	async fn get_token_accounts_by_owner(
		&self,
		owner: &str,
		program_id: &str,
	) -> LedgerResult<Vec<RawTokenAccount>> {
		let (_, tokens) = self.snapshot()?;
		if program_id != TOKEN_PROGRAM_ID {
			return Ok(Vec::new());
		}
		Ok(tokens
			.iter()
			.map(|(mint, amount)| {
				RawTokenAccount::new(
					format!("{}-{}", owner, mint),
					token_account_data(mint, *amount),
				)
			})
			.collect())
	}
}

#[derive(Debug, Clone)]
enum MockBehavior {
	Respond(RouterResponse),
	Unavailable,
}

/// Router answering every order the same way
#[derive(Debug)]
pub struct MockRouter {
	behavior: MockBehavior,
	credit: Option<(Arc<MockLedger>, u64)>,
	calls: AtomicUsize,
	requests: Mutex<Vec<SwapRequest>>,
}

impl MockRouter {
	fn with_behavior(behavior: MockBehavior) -> Self {
		Self {
			behavior,
			credit: None,
			calls: AtomicUsize::new(0),
			requests: Mutex::new(Vec::new()),
		}
	}

	/// Confirms every order with `txid`
	pub fn succeeding(txid: &str) -> Self {
		Self::responding(RouterResponse {
			txid: Some(txid.to_string()),
			success: Some(true),
			status: Some("Success".to_string()),
			error: None,
		})
	}

	/// Lands a failed transaction `txid` with `error`
	pub fn failing(txid: &str, error: &str) -> Self {
		Self::responding(RouterResponse {
			txid: Some(txid.to_string()),
			success: Some(false),
			status: Some("Failed".to_string()),
			error: Some(error.to_string()),
		})
	}

	pub fn responding(response: RouterResponse) -> Self {
		Self::with_behavior(MockBehavior::Respond(response))
	}

	/// Every order fails before reaching the router
	pub fn unavailable() -> Self {
		Self::with_behavior(MockBehavior::Unavailable)
	}

	/// On confirmed orders, credit `raw_amount` of the target to `ledger`
	pub fn crediting(mut self, ledger: Arc<MockLedger>, raw_amount: u64) -> Self {
		self.credit = Some((ledger, raw_amount));
		self
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn requests(&self) -> Vec<SwapRequest> {
		self.requests
			.lock()
			.map(|requests| requests.clone())
			.unwrap_or_default()
	}
}

#[async_trait]
impl SwapRouter for MockRouter {
	fn name(&self) -> &str {
		"mock"
	}

	async fn place_order(
		&self,
		_identity: &SigningIdentity,
		request: &SwapRequest,
	) -> RouterResult<RouterResponse> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if let Ok(mut requests) = self.requests.lock() {
			requests.push(request.clone());
		}

		match &self.behavior {
			MockBehavior::Unavailable => Err(RouterError::HttpStatus {
				status_code: 503,
				reason: "mock router unavailable".to_string(),
			}),
			MockBehavior::Respond(response) => {
				if response.success == Some(true) {
					if let Some((ledger, raw_amount)) = &self.credit {
						ledger.credit(request.target.as_str(), *raw_amount);
					}
				}
				Ok(response.clone())
			},
		}
	}
}

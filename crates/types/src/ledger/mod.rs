//! Ledger RPC boundary and token account decoding

use async_trait::async_trait;
use std::fmt::Debug;
use std::ops::Range;
use thiserror::Error;

/// Byte range of the mint address in an SPL token account
pub const MINT_RANGE: Range<usize> = 0..32;

/// Byte range of the little-endian u64 amount in an SPL token account
pub const AMOUNT_RANGE: Range<usize> = 64..72;

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger RPC errors
#[derive(Error, Debug)]
pub enum LedgerError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatus { status_code: u16, reason: String },

	#[error("RPC error {code}: {message}")]
	Rpc { code: i64, message: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// A token account as returned by the ledger: its address and raw data bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTokenAccount {
	pub pubkey: String,
	pub data: Vec<u8>,
}

impl RawTokenAccount {
	pub fn new(pubkey: impl Into<String>, data: Vec<u8>) -> Self {
		Self {
			pubkey: pubkey.into(),
			data,
		}
	}

	/// Base58 mint address stored in bytes `[0, 32)`
	pub fn mint_address(&self) -> Option<String> {
		self.data
			.get(MINT_RANGE)
			.map(|bytes| bs58::encode(bytes).into_string())
	}

	/// Raw amount stored little-endian in bytes `[64, 72)`
	pub fn raw_amount(&self) -> Option<u64> {
		let bytes: [u8; 8] = self.data.get(AMOUNT_RANGE)?.try_into().ok()?;
		Some(u64::from_le_bytes(bytes))
	}
}

/// Read access to ledger state
///
/// Implementations perform exactly one network round trip per call and never
/// retry.
#[async_trait]
pub trait LedgerRpc: Send + Sync + Debug {
	/// Native balance of `address` in lamports
	async fn get_balance(&self, address: &str) -> LedgerResult<u64>;

	/// All token accounts owned by `owner` under `program_id`
	async fn get_token_accounts_by_owner(
		&self,
		owner: &str,
		program_id: &str,
	) -> LedgerResult<Vec<RawTokenAccount>>;
}

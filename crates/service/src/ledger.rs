//! Ledger reader
//!
//! Reads native and token balances straight from ledger account bytes.
//! Balances are informational: every read failure degrades to an
//! "unknown" or zero reading and never aborts an acquisition.

use std::sync::Arc;

use buyer_types::constants::{ASSUMED_TOKEN_DECIMALS, NATIVE_DECIMALS, TOKEN_PROGRAM_ID};
use buyer_types::rust_decimal::Decimal;
use buyer_types::{
	from_smallest_units, AssetReference, BalanceSnapshot, LedgerRpc, NativeBalance,
	SigningIdentity,
};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct LedgerReader {
	rpc: Arc<dyn LedgerRpc>,
}

impl LedgerReader {
	pub fn new(rpc: Arc<dyn LedgerRpc>) -> Self {
		Self { rpc }
	}

	/// SOL balance of `identity`, or `Unavailable` if the ledger cannot be read
	pub async fn native_balance(&self, identity: &SigningIdentity) -> NativeBalance {
		match self.rpc.get_balance(identity.public_address()).await {
			Ok(lamports) => NativeBalance::Available(from_smallest_units(lamports, NATIVE_DECIMALS)),
			Err(e) => {
				warn!(
					"Error getting balance for {}: {}",
					identity.public_address(),
					e
				);
				NativeBalance::Unavailable
			},
		}
	}

	/// Holdings of `asset` by `identity`.
	///
	/// The raw amount of the first token account whose mint matches is scaled
	/// by `ASSUMED_TOKEN_DECIMALS`, not by the mint's real decimals. A missing
	/// account and a failed enumeration both yield the zero snapshot.
	pub async fn token_snapshot(
		&self,
		identity: &SigningIdentity,
		asset: &AssetReference,
	) -> BalanceSnapshot {
		let owner = identity.public_address();
		let zero = || BalanceSnapshot::zero(asset.clone(), owner, ASSUMED_TOKEN_DECIMALS);

		let accounts = match self
			.rpc
			.get_token_accounts_by_owner(owner, TOKEN_PROGRAM_ID)
			.await
		{
			Ok(accounts) => accounts,
			Err(e) => {
				warn!("Error getting {} balance: {}", asset, e);
				return zero();
			},
		};

		for account in &accounts {
			let Some(mint) = account.mint_address() else {
				warn!("Skipping token account {}: data too short for a mint", account.pubkey);
				continue;
			};
			if mint != asset.as_str() {
				continue;
			}

			match account.raw_amount() {
				Some(raw_amount) => {
					let snapshot =
						BalanceSnapshot::new(asset.clone(), owner, raw_amount, ASSUMED_TOKEN_DECIMALS);
					info!("Found {} balance: {}", asset, snapshot.amount());
					return snapshot;
				},
				None => {
					warn!(
						"Skipping token account {}: data too short for an amount",
						account.pubkey
					);
				},
			}
		}

		debug!("Checked {} token accounts for {}", accounts.len(), owner);
		info!("No {} account found", asset);
		zero()
	}

	/// Token amount of `asset` held by `identity`, approximate for mints whose
	/// decimals differ from `ASSUMED_TOKEN_DECIMALS`
	pub async fn token_balance(&self, identity: &SigningIdentity, asset: &AssetReference) -> Decimal {
		self.token_snapshot(identity, asset).await.amount()
	}
}

//! Token buyer flow
//!
//! before balances → swap → classification → after balances.

use std::fmt;
use std::sync::Arc;

use buyer_types::rust_decimal::Decimal;
use buyer_types::{AcquireError, AssetReference, NativeBalance, SigningIdentity};
use tracing::info;

use crate::{classify, ExplorerLinks, LedgerReader, SwapOrchestrator};

/// Native and token balances read together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceReading {
	pub native: NativeBalance,
	/// Approximate; see `LedgerReader::token_snapshot`
	pub token: Decimal,
}

impl fmt::Display for BalanceReading {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SOL {}, token {}", self.native, self.token.normalize())
	}
}

/// Result of a successful acquisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionReport {
	pub owner: String,
	pub target: AssetReference,
	pub spend_amount: Decimal,
	pub lamports: u64,
	pub transaction_url: String,
	pub before: BalanceReading,
	pub after: BalanceReading,
}

impl AcquisitionReport {
	/// Observed change in token holdings
	pub fn token_delta(&self) -> Decimal {
		self.after.token - self.before.token
	}
}

/// Acquisition engine bound to one wallet.
///
/// Holds no mutable state, so concurrent `buy` calls are independent.
#[derive(Debug, Clone)]
pub struct TokenBuyer {
	identity: Arc<SigningIdentity>,
	ledger: LedgerReader,
	orchestrator: SwapOrchestrator,
	explorer: ExplorerLinks,
}

impl TokenBuyer {
	pub fn new(
		identity: Arc<SigningIdentity>,
		ledger: LedgerReader,
		orchestrator: SwapOrchestrator,
		explorer: ExplorerLinks,
	) -> Self {
		Self {
			identity,
			ledger,
			orchestrator,
			explorer,
		}
	}

	pub fn identity(&self) -> &SigningIdentity {
		&self.identity
	}

	pub fn ledger(&self) -> &LedgerReader {
		&self.ledger
	}

	/// Current SOL and `target` balances. Never fails.
	pub async fn balances(&self, target: &AssetReference) -> BalanceReading {
		BalanceReading {
			native: self.ledger.native_balance(&self.identity).await,
			token: self.ledger.token_balance(&self.identity, target).await,
		}
	}

	/// Spend `spend_amount` SOL on `target`.
	///
	/// The amount is validated before any network call. Balance reads never
	/// fail the flow; router failures and negative outcomes always do, with
	/// the best available explorer link attached.
	pub async fn buy(
		&self,
		spend_amount: Decimal,
		target: &AssetReference,
	) -> Result<AcquisitionReport, AcquireError> {
		let request = SwapOrchestrator::prepare(&self.identity, spend_amount, target)?;

		let before = self.balances(target).await;
		info!("Initial balances: {}", before);

		info!(
			"Initiating buy order for {} SOL worth of {}",
			spend_amount, target
		);
		info!("Using wallet: {}", self.identity.public_address());
		info!("Amount in lamports: {}", request.amount);

		let outcome = self.orchestrator.submit(&self.identity, &request).await?;
		let transaction_url = classify(outcome, &self.explorer)?;
		info!("Buy transaction URL: {}", transaction_url);

		let after = self.balances(target).await;
		info!("Final balances: {}", after);

		Ok(AcquisitionReport {
			owner: request.owner,
			target: request.target,
			spend_amount,
			lamports: request.amount,
			transaction_url,
			before,
			after,
		})
	}
}

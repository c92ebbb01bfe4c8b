//! Swap orchestrator
//!
//! Turns a human-denominated SOL amount into a router request, makes exactly
//! one router call and classifies whatever comes back.

use std::sync::Arc;

use buyer_types::constants::NATIVE_DECIMALS;
use buyer_types::rust_decimal::Decimal;
use buyer_types::{
	to_smallest_units, AcquireError, AssetReference, SigningIdentity, SwapOutcome, SwapRequest,
	SwapRouter,
};
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct SwapOrchestrator {
	router: Arc<dyn SwapRouter>,
}

impl SwapOrchestrator {
	pub fn new(router: Arc<dyn SwapRouter>) -> Self {
		Self { router }
	}

	/// Validate `spend_amount` and build the request. No I/O.
	///
	/// The amount is truncated to whole lamports so the request never spends
	/// more than asked. Amounts that are not positive, or that truncate to
	/// zero lamports, are rejected.
	pub fn prepare(
		identity: &SigningIdentity,
		spend_amount: Decimal,
		target: &AssetReference,
	) -> Result<SwapRequest, AcquireError> {
		if spend_amount <= Decimal::ZERO {
			return Err(AcquireError::invalid_amount(format!(
				"spend amount must be positive, got {}",
				spend_amount
			)));
		}

		let amount = to_smallest_units(spend_amount, NATIVE_DECIMALS).ok_or_else(|| {
			AcquireError::invalid_amount(format!("spend amount {} is too large", spend_amount))
		})?;
		if amount == 0 {
			return Err(AcquireError::invalid_amount(format!(
				"spend amount {} is below one lamport",
				spend_amount
			)));
		}

		Ok(SwapRequest {
			owner: identity.public_address().to_string(),
			source: AssetReference::native(),
			target: target.clone(),
			amount,
			source_decimals: NATIVE_DECIMALS,
		})
	}

	/// Send a prepared request to the router and classify the response.
	///
	/// Router and transport errors surface as `RouterUnavailable`; they are
	/// never retried here.
	pub async fn submit(
		&self,
		identity: &SigningIdentity,
		request: &SwapRequest,
	) -> Result<SwapOutcome, AcquireError> {
		info!("Calling {} router...", self.router.name());

		let response = self
			.router
			.place_order(identity, request)
			.await
			.map_err(|e| {
				error!("Swap router call failed: {}", e);
				AcquireError::RouterUnavailable(e)
			})?;

		info!("Router result: {:?}", response);
		Ok(SwapOutcome::from_router_response(&response))
	}

	/// Spend `spend_amount` SOL on `target` and return the classified outcome
	pub async fn acquire_token(
		&self,
		identity: &SigningIdentity,
		spend_amount: Decimal,
		target: &AssetReference,
	) -> Result<SwapOutcome, AcquireError> {
		let request = Self::prepare(identity, spend_amount, target)?;

		info!(
			"Initiating buy order for {} SOL worth of {}",
			spend_amount, target
		);
		info!("Amount in lamports: {}", request.amount);

		self.submit(identity, &request).await
	}
}

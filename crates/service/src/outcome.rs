//! Outcome classifier
//!
//! Maps a `SwapOutcome` to what the caller sees: the explorer link on
//! success, otherwise an error that still carries the link when one exists.

use buyer_types::constants::DEFAULT_EXPLORER_TX_URL;
use buyer_types::{AcquireError, SwapOutcome};
use tracing::{error, info};

/// Builds human-auditable transaction links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerLinks {
	tx_base_url: String,
}

impl ExplorerLinks {
	pub fn new(tx_base_url: impl Into<String>) -> Self {
		Self {
			tx_base_url: tx_base_url.into(),
		}
	}

	pub fn transaction_url(&self, reference: &str) -> String {
		format!("{}{}", self.tx_base_url, reference)
	}
}

impl Default for ExplorerLinks {
	fn default() -> Self {
		Self::new(DEFAULT_EXPLORER_TX_URL)
	}
}

/// Explorer URL for a successful swap, or a descriptive error
pub fn classify(outcome: SwapOutcome, explorer: &ExplorerLinks) -> Result<String, AcquireError> {
	match outcome {
		SwapOutcome::Succeeded { reference, status } => {
			let url = explorer.transaction_url(&reference);
			info!("Transaction URL: {}", url);
			info!("Transaction {}", status);
			Ok(url)
		},
		SwapOutcome::Failed { reference, reason } => {
			let url = reference.map(|r| explorer.transaction_url(&r));
			if let Some(url) = &url {
				info!("Transaction URL: {}", url);
			}
			error!("Transaction failed: {}", reason);
			Err(AcquireError::Failed {
				reference: url,
				reason,
			})
		},
		SwapOutcome::Indeterminate { reason } => {
			error!("Swap outcome unknown: {}", reason);
			Err(AcquireError::Indeterminate { reason })
		},
	}
}

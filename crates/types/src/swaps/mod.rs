//! Swap requests, router responses and classified outcomes

use serde::{Deserialize, Serialize};

use crate::AssetReference;

pub mod errors;

pub use errors::{AcquireError, ErrorKind};

/// Reason attached to a failed swap whose response carries no error text
pub const UNKNOWN_FAILURE_REASON: &str = "Unknown error";

/// Reason attached to a response with neither a reference nor an error
pub const NO_RESULT_REASON: &str = "no result produced";

/// Swap intent handed to a router.
///
/// Built fresh for every attempt. A retry is a new request chosen by the
/// caller; fields are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapRequest {
	/// Address of the identity that pays and receives
	pub owner: String,
	pub source: AssetReference,
	pub target: AssetReference,
	/// Spend amount in the source asset's smallest units
	pub amount: u64,
	/// Decimal exponent of the source asset
	pub source_decimals: u8,
}

/// Router answer with every field optional.
///
/// Absent fields are the common case. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterResponse {
	#[serde(default, alias = "signature")]
	pub txid: Option<String>,
	#[serde(default)]
	pub success: Option<bool>,
	#[serde(default)]
	pub status: Option<String>,
	#[serde(default, alias = "errorMessage")]
	pub error: Option<String>,
}

impl RouterResponse {
	/// Transaction reference, ignoring blank strings
	pub fn reference(&self) -> Option<&str> {
		non_blank(self.txid.as_deref())
	}

	pub fn error_message(&self) -> Option<&str> {
		non_blank(self.error.as_deref())
	}
}

fn non_blank(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.trim().is_empty())
}

/// Classified result of one swap attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SwapOutcome {
	Succeeded {
		reference: String,
		status: String,
	},
	Failed {
		reference: Option<String>,
		reason: String,
	},
	Indeterminate {
		reason: String,
	},
}

impl SwapOutcome {
	/// Classify a router response. The first matching rule wins:
	///
	/// 1. reference and `success == true` → `Succeeded`
	/// 2. reference, success false or absent → `Failed` with the reference
	/// 3. no reference, error present → `Failed` without a reference
	/// 4. otherwise → `Indeterminate`
	pub fn from_router_response(response: &RouterResponse) -> Self {
		match (response.reference(), response.success) {
			(Some(reference), Some(true)) => SwapOutcome::Succeeded {
				reference: reference.to_string(),
				status: response
					.status
					.clone()
					.unwrap_or_else(|| "succeeded".to_string()),
			},
			(Some(reference), _) => SwapOutcome::Failed {
				reference: Some(reference.to_string()),
				reason: response
					.error_message()
					.unwrap_or(UNKNOWN_FAILURE_REASON)
					.to_string(),
			},
			(None, _) => match response.error_message() {
				Some(error) => SwapOutcome::Failed {
					reference: None,
					reason: error.to_string(),
				},
				None => SwapOutcome::Indeterminate {
					reason: NO_RESULT_REASON.to_string(),
				},
			},
		}
	}

	/// Transaction reference, if the router produced one
	pub fn reference(&self) -> Option<&str> {
		match self {
			SwapOutcome::Succeeded { reference, .. } => Some(reference),
			SwapOutcome::Failed { reference, .. } => reference.as_deref(),
			SwapOutcome::Indeterminate { .. } => None,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, SwapOutcome::Succeeded { .. })
	}
}

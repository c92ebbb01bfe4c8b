//! Error taxonomy for token acquisition

use thiserror::Error;

use crate::{IdentityError, LedgerError, RouterError};

/// Broad class of an acquisition error, for callers that pattern-match on policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Bad input or configuration; retrying unchanged cannot help
	Programmer,
	/// Infrastructure failure; the whole attempt may be retried fresh
	Transient,
	/// The router reported a negative or unknown business outcome
	BusinessOutcome,
}

/// Errors surfaced by the acquisition engine
#[derive(Error, Debug)]
pub enum AcquireError {
	#[error(transparent)]
	InvalidKeyMaterial(#[from] IdentityError),

	#[error("invalid amount: {reason}")]
	InvalidAmount { reason: String },

	#[error("ledger unavailable: {0}")]
	Network(#[from] LedgerError),

	#[error("swap router unavailable: {0}")]
	RouterUnavailable(#[from] RouterError),

	#[error("transaction failed: {reason}{}", describe_reference(.reference))]
	Failed {
		reference: Option<String>,
		reason: String,
	},

	#[error("swap outcome unknown: {reason}; verify on-chain before retrying")]
	Indeterminate { reason: String },
}

fn describe_reference(reference: &Option<String>) -> String {
	reference
		.as_ref()
		.map(|r| format!(" (transaction: {})", r))
		.unwrap_or_default()
}

impl AcquireError {
	pub fn invalid_amount(reason: impl Into<String>) -> Self {
		Self::InvalidAmount {
			reason: reason.into(),
		}
	}

	pub fn kind(&self) -> ErrorKind {
		match self {
			AcquireError::InvalidKeyMaterial(_) | AcquireError::InvalidAmount { .. } => {
				ErrorKind::Programmer
			},
			AcquireError::Network(_) | AcquireError::RouterUnavailable(_) => ErrorKind::Transient,
			AcquireError::Failed { .. } | AcquireError::Indeterminate { .. } => {
				ErrorKind::BusinessOutcome
			},
		}
	}

	/// Whether a fresh attempt may be made without human intervention.
	///
	/// Indeterminate outcomes are never retryable: the swap may have executed.
	pub fn is_retryable(&self) -> bool {
		self.kind() == ErrorKind::Transient
	}

	/// Best available transaction reference for auditing the attempt
	pub fn reference(&self) -> Option<&str> {
		match self {
			AcquireError::Failed { reference, .. } => reference.as_deref(),
			_ => None,
		}
	}
}

//! Swap router boundary
//!
//! A router receives a swap intent, builds and settles the transaction, and
//! answers with a loosely shaped `RouterResponse`. Route finding is entirely
//! the router's business.

use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::{RouterResponse, SigningIdentity, SwapRequest};

pub type RouterResult<T> = Result<T, RouterError>;

/// Transport and protocol errors talking to a swap router
#[derive(Error, Debug)]
pub enum RouterError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatus { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Transaction signing failed: {reason}")]
	Signing { reason: String },

	#[error("Configuration error: {reason}")]
	Config { reason: String },
}

impl RouterError {
	/// HTTP status code carried by the error, if any
	pub fn status_code(&self) -> Option<u16> {
		match self {
			RouterError::HttpStatus { status_code, .. } => Some(*status_code),
			RouterError::Http(error) => error.status().map(|status| status.as_u16()),
			_ => None,
		}
	}

	/// Create an HTTP failure error from a response status with a default reason
	pub fn from_http_failure(status_code: u16) -> Self {
		let reason = match status_code {
			400 => "Bad Request".to_string(),
			401 => "Unauthorized".to_string(),
			403 => "Forbidden".to_string(),
			404 => "Not Found".to_string(),
			429 => "Too Many Requests".to_string(),
			500 => "Internal Server Error".to_string(),
			502 => "Bad Gateway".to_string(),
			503 => "Service Unavailable".to_string(),
			504 => "Gateway Timeout".to_string(),
			_ => format!("HTTP Error {}", status_code),
		};

		Self::HttpStatus {
			status_code,
			reason,
		}
	}
}

/// External swap routing service
#[async_trait]
pub trait SwapRouter: Send + Sync + Debug {
	/// Human-readable router name for logs
	fn name(&self) -> &str;

	/// Submit a swap intent and wait for settlement.
	///
	/// Exactly one attempt is made. `identity` signs whatever the router
	/// builds for `request.owner`.
	async fn place_order(
		&self,
		identity: &SigningIdentity,
		request: &SwapRequest,
	) -> RouterResult<RouterResponse>;
}

//! Ledger asset references

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::NATIVE_MINT;

/// Ledger-unique address of a native or token asset (an SPL mint).
///
/// References carry no state and compare by exact string equality; no
/// normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetReference(String);

impl AssetReference {
	pub fn new(address: impl Into<String>) -> Self {
		Self(address.into())
	}

	/// The wrapped-SOL mint routers use for the native coin
	pub fn native() -> Self {
		Self::new(NATIVE_MINT)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_native(&self) -> bool {
		self.0 == NATIVE_MINT
	}
}

impl fmt::Display for AssetReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for AssetReference {
	fn from(address: &str) -> Self {
		Self::new(address)
	}
}

impl From<String> for AssetReference {
	fn from(address: String) -> Self {
		Self(address)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_native_reference() {
		let native = AssetReference::native();
		assert!(native.is_native());
		assert_eq!(native.as_str(), NATIVE_MINT);
	}

	#[test]
	fn test_exact_equality() {
		let a = AssetReference::from("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
		let b = AssetReference::from("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string());
		let lower = AssetReference::from("epjfwdd5aufqssqem2qn1xzybapc8g4weggkzwytdt1v");
		assert_eq!(a, b);
		assert_ne!(a, lower);
		assert!(!a.is_native());
	}

	#[test]
	fn test_serializes_as_plain_string() {
		let asset = AssetReference::native();
		let json = serde_json::to_string(&asset).unwrap();
		assert_eq!(json, format!("\"{}\"", NATIVE_MINT));
	}
}

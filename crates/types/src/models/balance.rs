//! Point-in-time balance readings

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::{amount::from_smallest_units, AssetReference};

/// A token balance read at a point in time.
///
/// Snapshots are never cached beyond the read that produced them. When no
/// account for the asset exists the canonical zero snapshot is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceSnapshot {
	pub asset: AssetReference,
	pub owner: String,
	/// Smallest-unit amount as stored on the ledger
	pub raw_amount: u64,
	/// Exponent used to scale `raw_amount`
	pub decimals: u8,
}

impl BalanceSnapshot {
	pub fn new(asset: AssetReference, owner: impl Into<String>, raw_amount: u64, decimals: u8) -> Self {
		Self {
			asset,
			owner: owner.into(),
			raw_amount,
			decimals,
		}
	}

	/// Zero holdings of `asset` for `owner`
	pub fn zero(asset: AssetReference, owner: impl Into<String>, decimals: u8) -> Self {
		Self::new(asset, owner, 0, decimals)
	}

	/// The raw amount scaled by `decimals`
	pub fn amount(&self) -> Decimal {
		from_smallest_units(self.raw_amount, self.decimals)
	}

	pub fn is_zero(&self) -> bool {
		self.raw_amount == 0
	}
}

/// Native coin balance, or an explicit signal that it could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "amount")]
pub enum NativeBalance {
	Available(Decimal),
	Unavailable,
}

impl NativeBalance {
	pub fn amount(&self) -> Option<Decimal> {
		match self {
			NativeBalance::Available(amount) => Some(*amount),
			NativeBalance::Unavailable => None,
		}
	}

	pub fn is_available(&self) -> bool {
		matches!(self, NativeBalance::Available(_))
	}
}

impl fmt::Display for NativeBalance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NativeBalance::Available(amount) => write!(f, "{}", amount.normalize()),
			NativeBalance::Unavailable => f.write_str("unknown"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rust_decimal_macros::dec;

	#[test]
	fn test_snapshot_amount_scaling() {
		let snapshot = BalanceSnapshot::new(AssetReference::from("mint"), "owner", 12_345_678, 6);
		assert_eq!(snapshot.amount(), dec!(12.345678));
		assert!(!snapshot.is_zero());
	}

	#[test]
	fn test_zero_snapshot() {
		let snapshot = BalanceSnapshot::zero(AssetReference::from("mint"), "owner", 6);
		assert!(snapshot.is_zero());
		assert_eq!(snapshot.amount(), Decimal::ZERO);
	}

	#[test]
	fn test_native_balance_display() {
		assert_eq!(NativeBalance::Available(dec!(1.500000000)).to_string(), "1.5");
		assert_eq!(NativeBalance::Unavailable.to_string(), "unknown");
		assert_eq!(NativeBalance::Unavailable.amount(), None);
	}
}

//! Conversions between human-denominated amounts and smallest units

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Scale a raw smallest-unit amount down by `decimals`.
///
/// The result is exact: `from_smallest_units(1_500_000, 6) == 1.5`.
pub fn from_smallest_units(raw: u64, decimals: u8) -> Decimal {
	Decimal::from_i128_with_scale(i128::from(raw), u32::from(decimals))
}

/// Convert a human-denominated amount into smallest units.
///
/// Fractions below one smallest unit are truncated, never rounded up, so the
/// converted amount never exceeds what the caller asked to spend. Returns
/// `None` for negative amounts or amounts that do not fit in a `u64`.
pub fn to_smallest_units(amount: Decimal, decimals: u8) -> Option<u64> {
	if amount.is_sign_negative() {
		return None;
	}
	let factor = Decimal::from(10u64.checked_pow(u32::from(decimals))?);
	amount.checked_mul(factor)?.trunc().to_u64()
}

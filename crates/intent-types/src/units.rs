//! Integer-only conversion between display amounts and raw smallest units.

use crate::common::U256;
use crate::errors::{IntentError, Result};

/// Parses a raw amount: a non-empty, digits-only string that fits in 256 bits.
pub fn parse_raw_amount(field: &str, raw: &str) -> Result<U256> {
	if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
		return Err(IntentError::invalid_amount(field, raw));
	}

	U256::from_str_radix(raw, 10).map_err(|_| IntentError::invalid_amount(field, raw))
}

/// Converts a display amount such as `"1.5"` into raw units for `decimals`.
///
/// Rejects signs, exponents, and more fractional digits than the asset supports.
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256> {
	let trimmed = amount.trim();
	let (whole, fraction) = match trimmed.split_once('.') {
		Some((whole, fraction)) => (whole, fraction),
		None => (trimmed, ""),
	};

	let well_formed = !(whole.is_empty() && fraction.is_empty())
		&& whole.bytes().all(|b| b.is_ascii_digit())
		&& fraction.bytes().all(|b| b.is_ascii_digit())
		&& fraction.len() <= decimals as usize
		&& !(trimmed.ends_with('.') && fraction.is_empty());
	if !well_formed {
		return Err(IntentError::invalid_amount("amount", amount));
	}

	let mut digits = String::with_capacity(whole.len() + decimals as usize);
	digits.push_str(if whole.is_empty() { "0" } else { whole });
	digits.push_str(fraction);
	digits.extend(std::iter::repeat('0').take(decimals as usize - fraction.len()));

	U256::from_str_radix(&digits, 10).map_err(|_| IntentError::invalid_amount("amount", amount))
}

/// Renders raw units as a display amount, trimming trailing zeros.
pub fn format_units(raw: U256, decimals: u8) -> String {
	let digits = raw.to_string();
	if decimals == 0 {
		return digits;
	}

	let decimals = decimals as usize;
	let padded = format!("{:0>width$}", digits, width = decimals + 1);
	let (whole, fraction) = padded.split_at(padded.len() - decimals);
	let fraction = fraction.trim_end_matches('0');

	if fraction.is_empty() {
		whole.to_string()
	} else {
		format!("{}.{}", whole, fraction)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_raw_amount() {
		assert_eq!(
			parse_raw_amount("input.amount", "100000000000").unwrap(),
			U256::from(100_000_000_000u64)
		);
		assert_eq!(parse_raw_amount("input.amount", "0").unwrap(), U256::ZERO);

		for bad in ["", "-5", "1.5", "1e9", " 10", "0x10"] {
			assert!(matches!(
				parse_raw_amount("input.amount", bad),
				Err(IntentError::InvalidAmount { .. })
			));
		}
	}

	#[test]
	fn test_parse_raw_amount_rejects_overflow() {
		let too_big = format!("{}0", U256::MAX);
		assert!(parse_raw_amount("input.amount", &too_big).is_err());
	}

	#[test]
	fn test_parse_units() {
		assert_eq!(parse_units("100", 9).unwrap(), U256::from(100_000_000_000u64));
		assert_eq!(parse_units("1.5", 6).unwrap(), U256::from(1_500_000u64));
		assert_eq!(parse_units("0.000001", 6).unwrap(), U256::from(1u64));
		assert_eq!(parse_units(".25", 2).unwrap(), U256::from(25u64));

		assert!(parse_units("0.0000001", 6).is_err());
		assert!(parse_units("1.", 6).is_err());
		assert!(parse_units("1.2.3", 6).is_err());
		assert!(parse_units("-1", 6).is_err());
		assert!(parse_units(".", 6).is_err());
	}

	#[test]
	fn test_format_units() {
		assert_eq!(format_units(U256::from(100_000_000_000u64), 9), "100");
		assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
		assert_eq!(format_units(U256::from(1u64), 6), "0.000001");
		assert_eq!(format_units(U256::from(42u64), 0), "42");
	}
}

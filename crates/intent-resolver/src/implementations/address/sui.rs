//! Sui address format checks.

use crate::AddressValidator;

/// Number of hex characters in a full-length Sui address.
const SUI_ADDRESS_HEX_LEN: usize = 64;

/// Validates full-length, `0x`-prefixed Sui account addresses.
///
/// Short forms such as `0x2` are valid object IDs on Sui but are rejected
/// here because an intent owner must be a full account address.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuiAddressValidator;

impl AddressValidator for SuiAddressValidator {
	fn is_valid_address(&self, address: &str) -> bool {
		let Some(body) = address
			.strip_prefix("0x")
			.or_else(|| address.strip_prefix("0X"))
		else {
			return false;
		};

		body.len() == SUI_ADDRESS_HEX_LEN && hex::decode(body).is_ok()
	}

	fn normalize_address(&self, address: &str) -> String {
		address.trim().to_ascii_lowercase()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const VALID: &str = "0x1d4c3b2a1d4c3b2a1d4c3b2a1d4c3b2a1d4c3b2a1d4c3b2a1d4c3b2a1d4c3b2a";

	#[test]
	fn test_valid_address() {
		let validator = SuiAddressValidator;
		assert!(validator.is_valid_address(VALID));
		assert!(validator.is_valid_address(&VALID.to_uppercase().replacen("0X", "0x", 1)));
	}

	#[test]
	fn test_invalid_addresses() {
		let validator = SuiAddressValidator;
		assert!(!validator.is_valid_address(&VALID[2..]));
		assert!(!validator.is_valid_address(&VALID[..40]));
		assert!(!validator.is_valid_address("0x2"));
		assert!(!validator.is_valid_address(&format!("{}ff", VALID)));
		assert!(!validator.is_valid_address(&VALID.replace('d', "z")));
		assert!(!validator.is_valid_address(""));
	}

	#[test]
	fn test_normalize_lowercases() {
		let validator = SuiAddressValidator;
		let mixed = VALID.replace('d', "D");
		assert_eq!(validator.normalize_address(&mixed), VALID);
	}
}

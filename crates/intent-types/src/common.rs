//! Common types used throughout the intent resolver.

use std::fmt;

pub use alloy_primitives::U256;

/// Timestamp (Unix seconds)
pub type Timestamp = u64;

/// Source of the current wall-clock time.
///
/// The resolver never reads the system clock directly; every component that
/// needs "now" receives a clock so results stay reproducible under test.
pub trait Clock: Send + Sync {
	/// Returns the current time in Unix seconds.
	fn now(&self) -> Timestamp;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Timestamp {
		chrono::Utc::now().timestamp().max(0) as Timestamp
	}
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
	fn now(&self) -> Timestamp {
		self.0
	}
}

impl<F> Clock for F
where
	F: Fn() -> Timestamp + Send + Sync,
{
	fn now(&self) -> Timestamp {
		self()
	}
}

/// Reference to an on-chain asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AssetRef {
	/// Fully qualified coin type, e.g. `0x2::sui::SUI`
	pub asset_id: String,
	/// Ticker symbol
	pub symbol: String,
	/// Number of decimals of the smallest unit
	pub decimals: u8,
}

impl fmt::Display for AssetRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.symbol, self.asset_id)
	}
}

/// Serde module for U256 values encoded as decimal strings.
pub mod u256_serde {
	use alloy_primitives::U256;
	use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

	pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		value.to_string().serialize(serializer)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		U256::from_str_radix(&s, 10).map_err(D::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixed_clock() {
		let clock = FixedClock(1_700_000_000);
		assert_eq!(clock.now(), 1_700_000_000);
		assert_eq!(clock.now(), clock.now());
	}

	#[test]
	fn test_closure_clock() {
		let clock = || 42u64;
		assert_eq!(Clock::now(&clock), 42);
	}

	#[test]
	fn test_u256_serde_uses_decimal_strings() {
		#[derive(serde::Serialize, serde::Deserialize)]
		struct Wrapper {
			#[serde(with = "u256_serde")]
			value: U256,
		}

		let json = serde_json::to_string(&Wrapper {
			value: U256::from(5_000_000_000_000u64),
		})
		.unwrap();
		assert_eq!(json, r#"{"value":"5000000000000"}"#);

		let parsed: Wrapper = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed.value, U256::from(5_000_000_000_000u64));
	}
}

//! Market context supplied alongside a request.

use crate::selector::deserialize_selector;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::warn;

/// Coarse volatility bucket for an asset pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityClass {
	Low,
	#[default]
	Medium,
	High,
}

impl<'de> Deserialize<'de> for VolatilityClass {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserialize_selector(deserializer, "volatility class")
	}
}

impl From<String> for VolatilityClass {
	fn from(raw: String) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"low" => Self::Low,
			"medium" => Self::Medium,
			"high" => Self::High,
			_ => {
				warn!(value = %raw, "Unknown volatility class, treating as medium");
				Self::Medium
			}
		}
	}
}

impl fmt::Display for VolatilityClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Low => write!(f, "low"),
			Self::Medium => write!(f, "medium"),
			Self::High => write!(f, "high"),
		}
	}
}

/// Coarse liquidity-depth bucket for an asset pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidityClass {
	Poor,
	Fair,
	#[default]
	Good,
	Excellent,
}

impl<'de> Deserialize<'de> for LiquidityClass {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserialize_selector(deserializer, "liquidity class")
	}
}

impl From<String> for LiquidityClass {
	fn from(raw: String) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"poor" => Self::Poor,
			"fair" => Self::Fair,
			"good" => Self::Good,
			"excellent" => Self::Excellent,
			_ => {
				warn!(value = %raw, "Unknown liquidity class, treating as good");
				Self::Good
			}
		}
	}
}

impl fmt::Display for LiquidityClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Poor => write!(f, "poor"),
			Self::Fair => write!(f, "fair"),
			Self::Good => write!(f, "good"),
			Self::Excellent => write!(f, "excellent"),
		}
	}
}

/// Market conditions for the pair being traded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarketSnapshot {
	#[serde(default)]
	pub volatility: VolatilityClass,
	#[serde(default)]
	pub liquidity: LiquidityClass,
}

impl MarketSnapshot {
	pub fn new(volatility: VolatilityClass, liquidity: LiquidityClass) -> Self {
		Self {
			volatility,
			liquidity,
		}
	}
}

/// Ordered pair of asset symbols, written `BASE/QUOTE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetPair {
	pub base: String,
	pub quote: String,
}

impl AssetPair {
	pub fn new(base: &str, quote: &str) -> Self {
		Self {
			base: base.trim().to_ascii_uppercase(),
			quote: quote.trim().to_ascii_uppercase(),
		}
	}
}

impl fmt::Display for AssetPair {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.base, self.quote)
	}
}

impl std::str::FromStr for AssetPair {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.split_once('/') {
			Some((base, quote)) if !base.trim().is_empty() && !quote.trim().is_empty() => {
				Ok(Self::new(base, quote))
			}
			_ => Err(format!("Invalid asset pair '{}', expected BASE/QUOTE", s)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_asset_pair_parsing() {
		let pair: AssetPair = "sui/usdc".parse().unwrap();
		assert_eq!(pair, AssetPair::new("SUI", "USDC"));
		assert_eq!(pair.to_string(), "SUI/USDC");
		assert!("SUI".parse::<AssetPair>().is_err());
		assert!("/USDC".parse::<AssetPair>().is_err());
	}

	#[test]
	fn test_unknown_classes_fall_back() {
		let snapshot: MarketSnapshot =
			serde_json::from_str(r#"{ "volatility": "extreme", "liquidity": "deep" }"#).unwrap();
		assert_eq!(snapshot.volatility, VolatilityClass::Medium);
		assert_eq!(snapshot.liquidity, LiquidityClass::Good);

		let snapshot: MarketSnapshot =
			serde_json::from_str(r#"{ "volatility": null, "liquidity": 2.5 }"#).unwrap();
		assert_eq!(snapshot, MarketSnapshot::default());
	}
}

//! Token metadata shared by the registry and configuration.

use serde::{Deserialize, Serialize};

/// Registry entry for a supported asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
	pub symbol: String,
	pub asset_id: String,
	pub decimals: u8,
	#[serde(default)]
	pub display_name: String,
}

impl TokenInfo {
	pub fn new(symbol: &str, asset_id: &str, decimals: u8, display_name: &str) -> Self {
		Self {
			symbol: symbol.to_string(),
			asset_id: asset_id.to_string(),
			decimals,
			display_name: display_name.to_string(),
		}
	}
}

/// Sui mainnet assets supported out of the box.
pub fn default_tokens() -> Vec<TokenInfo> {
	vec![
		TokenInfo::new("SUI", "0x2::sui::SUI", 9, "Sui"),
		TokenInfo::new(
			"USDC",
			"0xdba34672e30cb065b1f93e3ab55318768fd6fef66c15942c9f7cb846e2f900e7::usdc::USDC",
			6,
			"USD Coin",
		),
		TokenInfo::new(
			"USDT",
			"0x375f70cf2ae4c00bf37117d0c85a2c71545e6ee05c4a5c7d282cd66a4504b068::usdt::USDT",
			6,
			"Tether USD",
		),
		TokenInfo::new(
			"WETH",
			"0xaf8cd5edc19c4512f4259f0bee101a40d41ebed738ade5874359610ef8eeced5::coin::COIN",
			8,
			"Wrapped Ether",
		),
		TokenInfo::new(
			"CETUS",
			"0x06864a6f921804860930db6ddbe2e16acdf8504495ea7481637a1c8b9a8fe54b::cetus::CETUS",
			9,
			"Cetus",
		),
		TokenInfo::new(
			"DEEP",
			"0xdeeb7a4662eec9f2f3def03fb937a663dddaa2e215b8078a284d026b7946c270::deep::DEEP",
			6,
			"DeepBook",
		),
	]
}

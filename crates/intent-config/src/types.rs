//! Configuration types for the intent resolver.

use crate::serde_helpers::{deserialize_asset_pair_map, serialize_asset_pair_map};
use intent_types::{default_tokens, AssetPair, ClientInfo, MarketSnapshot, ResolverPolicy, TokenInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete resolver configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IntentConfig {
	/// Service identity and listener settings
	#[serde(default)]
	pub resolver: ResolverSettings,
	/// Policy tables driving parameter resolution and analysis
	#[serde(default)]
	pub policy: ResolverPolicy,
	/// Supported tokens
	#[serde(default = "default_tokens")]
	pub tokens: Vec<TokenInfo>,
	/// Market data settings
	#[serde(default)]
	pub market: MarketConfig,
}

impl Default for IntentConfig {
	fn default() -> Self {
		Self {
			resolver: ResolverSettings::default(),
			policy: ResolverPolicy::default(),
			tokens: default_tokens(),
			market: MarketConfig::default(),
		}
	}
}

impl IntentConfig {
	/// Client identity stamped into every intent document.
	pub fn client_info(&self) -> ClientInfo {
		ClientInfo {
			name: self.resolver.client_name.clone(),
			version: self.resolver.client_version.clone(),
		}
	}

	/// Socket address the HTTP API binds to.
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.resolver.host, self.resolver.port)
	}
}

/// Service identity and listener settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResolverSettings {
	/// Client name written into intent metadata
	pub client_name: String,
	/// Client version written into intent metadata
	pub client_version: String,
	/// HTTP listen host
	pub host: String,
	/// HTTP listen port
	pub port: u16,
	/// Default log level when none is given on the command line
	pub log_level: String,
}

impl Default for ResolverSettings {
	fn default() -> Self {
		let client = ClientInfo::default();
		Self {
			client_name: client.name,
			client_version: client.version,
			host: "127.0.0.1".to_string(),
			port: 3000,
			log_level: "info".to_string(),
		}
	}
}

/// Market data configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketConfig {
	/// How long a fetched snapshot stays valid
	pub cache_ttl_secs: u64,
	/// Static snapshots keyed by `BASE/QUOTE`
	#[serde(
		deserialize_with = "deserialize_asset_pair_map",
		serialize_with = "serialize_asset_pair_map"
	)]
	pub snapshots: BTreeMap<AssetPair, MarketSnapshot>,
}

impl Default for MarketConfig {
	fn default() -> Self {
		Self {
			cache_ttl_secs: 60,
			snapshots: BTreeMap::new(),
		}
	}
}

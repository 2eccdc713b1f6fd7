//! Market data served from a fixed table of snapshots.

use crate::MarketDataProvider;
use async_trait::async_trait;
use intent_types::{AssetPair, MarketSnapshot};
use std::collections::HashMap;

/// Provider answering from a preloaded pair table.
///
/// Pairs are matched in either direction, so an entry for `SUI/USDC` also
/// answers `USDC/SUI`.
#[derive(Debug, Clone, Default)]
pub struct FixedMarketData {
	snapshots: HashMap<AssetPair, MarketSnapshot>,
}

impl FixedMarketData {
	pub fn new(snapshots: HashMap<AssetPair, MarketSnapshot>) -> Self {
		Self { snapshots }
	}

	pub fn with_snapshot(mut self, pair: AssetPair, snapshot: MarketSnapshot) -> Self {
		self.snapshots.insert(pair, snapshot);
		self
	}

	pub fn len(&self) -> usize {
		self.snapshots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.snapshots.is_empty()
	}
}

#[async_trait]
impl MarketDataProvider for FixedMarketData {
	async fn snapshot(&self, input: &str, output: &str) -> Option<MarketSnapshot> {
		self.snapshots
			.get(&AssetPair::new(input, output))
			.or_else(|| self.snapshots.get(&AssetPair::new(output, input)))
			.copied()
	}
}

//! Caching wrapper around another market data provider.

use crate::cache::TtlCache;
use crate::MarketDataProvider;
use async_trait::async_trait;
use intent_types::{AssetPair, Clock, MarketSnapshot};
use std::sync::Arc;
use tracing::debug;

/// Memoizes snapshots from an inner provider for a fixed TTL.
///
/// Misses are cached too, so an unknown pair does not hit the inner
/// provider again until the entry expires. Every fetch purges expired
/// entries first, which bounds the map to the pairs seen within one TTL.
pub struct CachedMarketData {
	inner: Arc<dyn MarketDataProvider>,
	cache: TtlCache<AssetPair, Option<MarketSnapshot>>,
}

impl CachedMarketData {
	pub fn new(inner: Arc<dyn MarketDataProvider>, ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
		Self {
			inner,
			cache: TtlCache::new(ttl_secs, clock),
		}
	}

	pub fn cache(&self) -> &TtlCache<AssetPair, Option<MarketSnapshot>> {
		&self.cache
	}
}

#[async_trait]
impl MarketDataProvider for CachedMarketData {
	async fn snapshot(&self, input: &str, output: &str) -> Option<MarketSnapshot> {
		let pair = AssetPair::new(input, output);
		if let Some(cached) = self.cache.get(&pair) {
			debug!(%pair, "Market snapshot cache hit");
			return cached;
		}

		let fetched = self.inner.snapshot(input, output).await;
		let purged = self.cache.purge_expired();
		debug!(%pair, found = fetched.is_some(), purged, "Market snapshot fetched");
		self.cache.insert(pair, fetched);
		fetched
	}
}

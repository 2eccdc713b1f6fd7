//! Resolver service wiring: registry, market data and resolver built from config.

use intent_config::IntentConfig;
use intent_resolver::implementations::{
	address::sui::SuiAddressValidator,
	market::{cached::CachedMarketData, fixed::FixedMarketData},
	registry::memory::MemoryTokenRegistry,
};
use intent_resolver::{IntentResolver, MarketDataProvider, Resolution, TokenRegistry};
use intent_types::{Clock, IntentRequest, MarketSnapshot, Result, SystemClock, TokenInfo};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Resolver plus the collaborators it needs at the service boundary.
pub struct IntentService {
	resolver: IntentResolver,
	registry: Arc<MemoryTokenRegistry>,
	market: Arc<dyn MarketDataProvider>,
	config: IntentConfig,
}

impl IntentService {
	/// Builds the service from configuration using the system clock.
	pub fn new(config: IntentConfig) -> Self {
		Self::with_clock(config, Arc::new(SystemClock))
	}

	/// Builds the service with an explicit clock shared by the resolver and
	/// the market data cache.
	pub fn with_clock(config: IntentConfig, clock: Arc<dyn Clock>) -> Self {
		let registry = Arc::new(MemoryTokenRegistry::new(config.tokens.clone()));

		let fixed = FixedMarketData::new(config.market.snapshots.clone().into_iter().collect());
		let market: Arc<dyn MarketDataProvider> = Arc::new(CachedMarketData::new(
			Arc::new(fixed),
			config.market.cache_ttl_secs,
			clock.clone(),
		));

		let resolver = IntentResolver::new(
			config.policy.clone(),
			registry.clone(),
			Arc::new(SuiAddressValidator),
		)
		.with_clock(clock)
		.with_client(config.client_info());

		info!(
			tokens = registry.len(),
			snapshots = config.market.snapshots.len(),
			cache_ttl_secs = config.market.cache_ttl_secs,
			"Intent service initialized"
		);

		Self {
			resolver,
			registry,
			market,
			config,
		}
	}

	pub fn config(&self) -> &IntentConfig {
		&self.config
	}

	pub fn resolver(&self) -> &IntentResolver {
		&self.resolver
	}

	/// Supported tokens in symbol order.
	pub fn tokens(&self) -> Vec<TokenInfo> {
		self.registry.tokens().cloned().collect()
	}

	/// Resolves a request. Market context carried by the request wins over
	/// the configured provider.
	#[instrument(skip_all, fields(input = %request.input.symbol, output = %request.output.symbol))]
	pub async fn resolve(&self, request: &IntentRequest) -> Result<Resolution> {
		let market = match request.market {
			Some(snapshot) => Some(snapshot),
			None => self.market_for(request).await,
		};
		debug!(market = ?market, "Market context selected");

		self.resolver.resolve_with_market(request, market)
	}

	/// Provider snapshot for the request's pair, queried by canonical registry
	/// symbols. Pairs outside the registry never reach the provider; the
	/// resolver rejects them.
	async fn market_for(&self, request: &IntentRequest) -> Option<MarketSnapshot> {
		let input = self.registry.lookup(&request.input.symbol)?;
		let output = self.registry.lookup(&request.output.symbol)?;
		self.market.snapshot(&input.symbol, &output.symbol).await
	}
}

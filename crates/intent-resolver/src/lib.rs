//! Intent parameter resolution.
//!
//! Turns a user's high-level request (priority, risk tolerance, urgency and
//! the assets involved) into a complete intent document with concrete
//! execution parameters, plus a heuristic analysis of that document.
//! Address formats, supported tokens, market data and time are supplied
//! through the capability traits defined here.

use async_trait::async_trait;
use intent_types::{
	Analysis, ClientInfo, Clock, Intent, IntentRequest, MarketSnapshot, ParameterBundle,
	ResolverPolicy, Result, SystemClock, TokenInfo,
};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::sync::Arc;
use tracing::{debug, info};

pub mod adjustment;
pub mod analysis;
pub mod assembler;
pub mod cache;
pub mod defaults;

/// Re-export implementations
pub mod implementations {
	pub mod address {
		pub mod sui;
	}
	pub mod registry {
		pub mod memory;
	}
	pub mod market {
		pub mod cached;
		pub mod fixed;
	}
}

pub use adjustment::{AdjustmentInputs, AdjustmentPipeline, ValidatedOverrides};
pub use analysis::AnalysisEngine;
pub use assembler::{DocumentAssembler, ValidatedRequest};
pub use cache::TtlCache;
pub use defaults::DefaultsTable;

/// Checks and canonicalizes chain account addresses.
pub trait AddressValidator: Send + Sync {
	fn is_valid_address(&self, address: &str) -> bool;

	/// Canonical form of an address that passed [`is_valid_address`].
	///
	/// [`is_valid_address`]: AddressValidator::is_valid_address
	fn normalize_address(&self, address: &str) -> String;
}

/// Source of the assets the resolver is allowed to trade.
pub trait TokenRegistry: Send + Sync {
	/// Case-insensitive lookup by ticker symbol.
	fn lookup(&self, symbol: &str) -> Option<TokenInfo>;

	fn supported_symbols(&self) -> Vec<String>;
}

/// Source of market conditions for an asset pair.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
	/// Returns the current snapshot for trading `input` into `output`, if known.
	async fn snapshot(&self, input: &str, output: &str) -> Option<MarketSnapshot>;
}

/// Everything produced for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
	pub intent: Intent,
	pub analysis: Analysis,
	pub parameters: ParameterBundle,
	/// Hex Keccak-256 of the intent's JSON encoding.
	pub intent_hash: String,
}

/// Hex Keccak-256 digest of an intent's canonical JSON encoding.
pub fn intent_hash(intent: &Intent) -> String {
	// Struct fields serialize in declaration order, so the encoding is stable.
	let encoded = serde_json::to_vec(intent).unwrap_or_default();
	format!("0x{}", hex::encode(Keccak256::digest(&encoded)))
}

/// Resolves requests into intent documents under a fixed policy.
///
/// Synchronous and `Send + Sync`; share it behind an `Arc`. Market data is
/// fetched by the caller and passed in through [`resolve_with_market`].
///
/// [`resolve_with_market`]: IntentResolver::resolve_with_market
pub struct IntentResolver {
	policy: ResolverPolicy,
	client: ClientInfo,
	clock: Arc<dyn Clock>,
	registry: Arc<dyn TokenRegistry>,
	address_validator: Arc<dyn AddressValidator>,
}

impl IntentResolver {
	/// Creates a resolver using the system clock and the default client info.
	pub fn new(
		policy: ResolverPolicy,
		registry: Arc<dyn TokenRegistry>,
		address_validator: Arc<dyn AddressValidator>,
	) -> Self {
		Self {
			policy,
			client: ClientInfo::default(),
			clock: Arc::new(SystemClock),
			registry,
			address_validator,
		}
	}

	pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock = clock;
		self
	}

	pub fn with_client(mut self, client: ClientInfo) -> Self {
		self.client = client;
		self
	}

	/// Resolves a request using the market snapshot embedded in it, if any.
	pub fn resolve(&self, request: &IntentRequest) -> Result<Resolution> {
		self.resolve_with_market(request, None)
	}

	/// Resolves a request. An explicit `market` snapshot takes precedence
	/// over the one carried by the request.
	pub fn resolve_with_market(
		&self,
		request: &IntentRequest,
		market: Option<MarketSnapshot>,
	) -> Result<Resolution> {
		let assembler = DocumentAssembler::new(
			self.address_validator.as_ref(),
			self.registry.as_ref(),
			&self.policy.overrides,
			&self.policy.revoke,
			&self.client,
		);
		let validated = assembler.validate(request)?;
		let overrides = validated.overrides;
		let market = market.or(request.market);

		let baseline = DefaultsTable::new(&self.policy.defaults).baseline(request.priority);
		let pipeline = AdjustmentPipeline::new(&self.policy);
		let parameters = pipeline.apply(
			baseline,
			&AdjustmentInputs {
				priority: request.priority,
				risk: request.risk_tolerance,
				urgency: request.urgency,
				market,
			},
		);
		let parameters = pipeline.apply_overrides(parameters, &overrides);

		let intent = assembler.assemble(request, validated, &parameters, self.clock.now());
		let analysis = self.analyze(&intent, market.as_ref());
		let intent_hash = intent_hash(&intent);

		info!(
			owner = %intent.object.owner,
			priority = %request.priority,
			slippage_bps = parameters.slippage_bps,
			deadline_minutes = parameters.deadline_minutes,
			complexity = %analysis.complexity,
			intent_hash = %intent_hash,
			"Resolved intent"
		);

		Ok(Resolution {
			intent,
			analysis,
			parameters,
			intent_hash,
		})
	}

	/// Analyzes any intent document under this resolver's analysis policy.
	pub fn analyze(&self, intent: &Intent, market: Option<&MarketSnapshot>) -> Analysis {
		let analysis = AnalysisEngine::new(&self.policy.analysis).analyze(intent, market);
		debug!(
			score = analysis.complexity_score,
			solver_pool = analysis.estimated_solver_pool,
			probability = analysis.execution_probability,
			"Analyzed intent"
		);
		analysis
	}
}

//! Heuristic diagnostics over a completed intent.
//!
//! Scores here are advisory. None of them block resolution, and the
//! coefficients come from [`AnalysisPolicy`] so they can be recalibrated
//! without code changes.

use intent_types::{
	Analysis, AnalysisPolicy, ComplexityClass, Intent, LiquidityClass, MarketSnapshot,
	VolatilityClass, U256,
};

const STANDARD_RISK: &str = "Standard execution risk";
const WELL_BALANCED: &str = "Parameters are well balanced for current conditions";

/// Computes an [`Analysis`] from an intent without mutating it.
pub struct AnalysisEngine<'a> {
	policy: &'a AnalysisPolicy,
}

impl<'a> AnalysisEngine<'a> {
	pub fn new(policy: &'a AnalysisPolicy) -> Self {
		Self { policy }
	}

	pub fn analyze(&self, intent: &Intent, market: Option<&MarketSnapshot>) -> Analysis {
		let complexity_score = self.complexity_score(intent);
		let estimated_solver_pool = self.estimate_solver_pool(intent);

		Analysis {
			complexity: ComplexityClass::from_score(complexity_score),
			complexity_score,
			estimated_solver_pool,
			execution_probability: self.execution_probability(intent, market),
			risk_factors: self.risk_factors(intent, estimated_solver_pool),
			optimization_opportunities: self
				.optimization_opportunities(intent, estimated_solver_pool),
		}
	}

	pub fn complexity_score(&self, intent: &Intent) -> u32 {
		let operation = &intent.operation;
		let extra_legs = operation.inputs.len().saturating_sub(1)
			+ operation.outputs.len().saturating_sub(1);

		let mut score = 2 * extra_legs as u32;
		if intent.constraints.routing.max_hops > 2 {
			score += 1;
		}
		if !intent.constraints.routing.protocol_whitelist.is_empty() {
			score += 1;
		}
		if intent.object.policy.access_condition.requires_attestation {
			score += 2;
		}
		if intent.constraints.max_slippage_bps < self.policy.tight_slippage_bps {
			score += 1;
		}
		score
	}

	pub fn estimate_solver_pool(&self, intent: &Intent) -> u32 {
		let condition = &intent.object.policy.access_condition;
		let mut pool = self.policy.base_solver_pool;

		if condition.requires_attestation {
			pool = pool.saturating_mul(self.policy.attestation_pool_percent) / 100;
		}

		let stake: U256 = condition.min_solver_stake;
		if stake > self.policy.stake_tier_2 {
			pool = pool.saturating_mul(self.policy.stake_tier_2_pool_percent) / 100;
		} else if stake > self.policy.stake_tier_1 {
			pool = pool.saturating_mul(self.policy.stake_tier_1_pool_percent) / 100;
		}

		pool.max(self.policy.min_solver_pool)
	}

	pub fn execution_probability(&self, intent: &Intent, market: Option<&MarketSnapshot>) -> u8 {
		let policy = self.policy;
		let mut score = policy.base_probability;

		if let Some(market) = market {
			if market.volatility == VolatilityClass::Low {
				score = score.saturating_add(policy.low_volatility_bonus);
			}
			if market.liquidity == LiquidityClass::Excellent {
				score = score.saturating_add(policy.excellent_liquidity_bonus);
			}
		}
		if intent.object.policy.access_condition.requires_attestation {
			score = score.saturating_sub(policy.attestation_penalty);
		}
		if intent.constraints.max_slippage_bps < policy.tight_slippage_bps {
			score = score.saturating_sub(policy.tight_slippage_penalty);
		}
		if window_minutes(intent) > policy.long_window_minutes as u64 {
			score = score.saturating_add(policy.long_window_bonus);
		}

		// min > max in a bad policy resolves to max
		score
			.max(policy.min_probability)
			.min(policy.max_probability)
			.clamp(0, 100) as u8
	}

	pub fn risk_factors(&self, intent: &Intent, solver_pool: u32) -> Vec<String> {
		let policy = self.policy;
		let deadline_minutes = window_minutes(intent);
		let slippage = intent.constraints.max_slippage_bps;
		let mut factors = Vec::new();

		if deadline_minutes < policy.short_deadline_minutes as u64 {
			factors.push(format!(
				"Short deadline ({} min) may limit solver participation",
				deadline_minutes
			));
		}
		if slippage < policy.very_tight_slippage_bps {
			factors.push(format!(
				"Tight slippage tolerance ({} bps) may cause execution failures",
				slippage
			));
		}
		if intent.object.policy.access_condition.requires_attestation {
			factors.push("Attestation requirement reduces the eligible solver set".to_string());
		}
		if solver_pool < policy.small_pool_threshold {
			factors.push(format!(
				"Limited solver pool (~{} solvers) may reduce competition",
				solver_pool
			));
		}

		if factors.is_empty() {
			factors.push(STANDARD_RISK.to_string());
		}
		factors
	}

	pub fn optimization_opportunities(&self, intent: &Intent, solver_pool: u32) -> Vec<String> {
		let policy = self.policy;
		let mut opportunities = Vec::new();

		if intent.constraints.max_slippage_bps > policy.loose_slippage_bps {
			opportunities.push(format!(
				"Slippage tolerance ({} bps) is looser than necessary; tightening it may improve pricing",
				intent.constraints.max_slippage_bps
			));
		}
		if intent.constraints.routing.max_hops > policy.excess_hops {
			opportunities.push(format!(
				"Hop count ({}) could be reduced to lower gas costs",
				intent.constraints.routing.max_hops
			));
		}
		if window_minutes(intent) > policy.long_deadline_minutes as u64 {
			opportunities.push(
				"Deadline could be shortened to reduce exposure to price movement".to_string(),
			);
		}
		if intent.object.policy.access_condition.requires_attestation
			&& solver_pool < policy.small_pool_threshold
		{
			opportunities.push(
				"Relaxing the attestation requirement would widen the solver pool".to_string(),
			);
		}

		if opportunities.is_empty() {
			opportunities.push(WELL_BALANCED.to_string());
		}
		opportunities
	}
}

/// Length of the solver access window in whole minutes.
fn window_minutes(intent: &Intent) -> u64 {
	intent.object.policy.solver_access_window.duration_secs() / 60
}

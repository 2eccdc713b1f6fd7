//! Tunable policy tables consumed by the resolver.
//!
//! Every constant that shapes a resolved intent lives here so deployments can
//! retune the tables from configuration. `Default` is the shipped policy.

use crate::common::{u256_serde, U256};
use crate::market::VolatilityClass;
use crate::params::RankingWeights;
use crate::request::{OptimizationPriority, RiskTolerance, Urgency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One MIST-denominated SUI (10^9 smallest units).
const SUI: u64 = 1_000_000_000;

/// Baseline parameters for one optimization priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityDefaults {
	pub slippage_bps: u32,
	pub deadline_minutes: u32,
	pub max_hops: u8,
	#[serde(with = "u256_serde")]
	pub min_solver_stake: U256,
	pub requires_attestation: bool,
	pub weights: RankingWeights,
}

impl PriorityDefaults {
	fn new(
		slippage_bps: u32,
		deadline_minutes: u32,
		max_hops: u8,
		stake_sui: u64,
		requires_attestation: bool,
		weights: RankingWeights,
	) -> Self {
		Self {
			slippage_bps,
			deadline_minutes,
			max_hops,
			min_solver_stake: U256::from(stake_sui) * U256::from(SUI),
			requires_attestation,
			weights,
		}
	}
}

/// Baseline entry per optimization priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsPolicy {
	pub maximize_output: PriorityDefaults,
	pub minimize_gas: PriorityDefaults,
	pub fastest_execution: PriorityDefaults,
	pub balanced: PriorityDefaults,
	pub maximum_safety: PriorityDefaults,
}

impl DefaultsPolicy {
	pub fn get(&self, priority: OptimizationPriority) -> &PriorityDefaults {
		match priority {
			OptimizationPriority::MaximizeOutput => &self.maximize_output,
			OptimizationPriority::MinimizeGas => &self.minimize_gas,
			OptimizationPriority::FastestExecution => &self.fastest_execution,
			OptimizationPriority::Balanced => &self.balanced,
			OptimizationPriority::MaximumSafety => &self.maximum_safety,
		}
	}
}

impl Default for DefaultsPolicy {
	fn default() -> Self {
		Self {
			maximize_output: PriorityDefaults::new(
				100,
				30,
				4,
				1_000,
				false,
				RankingWeights::from_percent(60, 15, 10, 15),
			),
			minimize_gas: PriorityDefaults::new(
				150,
				45,
				2,
				100,
				false,
				RankingWeights::from_percent(20, 50, 10, 20),
			),
			fastest_execution: PriorityDefaults::new(
				200,
				5,
				3,
				100,
				false,
				RankingWeights::from_percent(20, 10, 50, 20),
			),
			balanced: PriorityDefaults::new(
				100,
				30,
				3,
				500,
				false,
				RankingWeights::from_percent(35, 25, 20, 20),
			),
			maximum_safety: PriorityDefaults::new(
				50,
				60,
				2,
				5_000,
				true,
				RankingWeights::from_percent(20, 10, 10, 60),
			),
		}
	}
}

/// Adjustment applied for one risk tolerance level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAdjustment {
	pub slippage_multiplier: Decimal,
	/// Stake scaling in whole percent (200 = double)
	pub stake_percent: u32,
	/// Forced attestation requirement; `None` inherits the priority default
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attestation: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPolicy {
	pub low: RiskAdjustment,
	pub medium: RiskAdjustment,
	pub high: RiskAdjustment,
}

impl RiskPolicy {
	pub fn get(&self, risk: RiskTolerance) -> &RiskAdjustment {
		match risk {
			RiskTolerance::Low => &self.low,
			RiskTolerance::Medium => &self.medium,
			RiskTolerance::High => &self.high,
		}
	}
}

impl Default for RiskPolicy {
	fn default() -> Self {
		Self {
			low: RiskAdjustment {
				slippage_multiplier: Decimal::new(7, 1),
				stake_percent: 200,
				attestation: Some(true),
			},
			medium: RiskAdjustment {
				slippage_multiplier: Decimal::ONE,
				stake_percent: 100,
				attestation: None,
			},
			high: RiskAdjustment {
				slippage_multiplier: Decimal::new(15, 1),
				stake_percent: 50,
				attestation: Some(false),
			},
		}
	}
}

/// Adjustment applied for one urgency level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyAdjustment {
	pub deadline_multiplier: Decimal,
	pub slippage_multiplier: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyPolicy {
	pub low: UrgencyAdjustment,
	pub normal: UrgencyAdjustment,
	pub urgent: UrgencyAdjustment,
}

impl UrgencyPolicy {
	pub fn get(&self, urgency: Urgency) -> &UrgencyAdjustment {
		match urgency {
			Urgency::Low => &self.low,
			Urgency::Normal => &self.normal,
			Urgency::Urgent => &self.urgent,
		}
	}
}

impl Default for UrgencyPolicy {
	fn default() -> Self {
		Self {
			low: UrgencyAdjustment {
				deadline_multiplier: Decimal::TWO,
				slippage_multiplier: Decimal::new(9, 1),
			},
			normal: UrgencyAdjustment {
				deadline_multiplier: Decimal::ONE,
				slippage_multiplier: Decimal::ONE,
			},
			urgent: UrgencyAdjustment {
				deadline_multiplier: Decimal::new(25, 2),
				slippage_multiplier: Decimal::new(15, 1),
			},
		}
	}
}

/// Slippage multiplier per volatility class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityPolicy {
	pub low: Decimal,
	pub medium: Decimal,
	pub high: Decimal,
}

impl VolatilityPolicy {
	pub fn get(&self, volatility: VolatilityClass) -> Decimal {
		match volatility {
			VolatilityClass::Low => self.low,
			VolatilityClass::Medium => self.medium,
			VolatilityClass::High => self.high,
		}
	}
}

impl Default for VolatilityPolicy {
	fn default() -> Self {
		Self {
			low: Decimal::new(8, 1),
			medium: Decimal::ONE,
			high: Decimal::new(15, 1),
		}
	}
}

/// Clamp ranges for computed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsPolicy {
	pub min_slippage_bps: u32,
	pub max_slippage_bps: u32,
	pub min_deadline_minutes: u32,
	pub max_deadline_minutes: u32,
}

impl Default for BoundsPolicy {
	fn default() -> Self {
		Self {
			min_slippage_bps: 10,
			max_slippage_bps: 1_000,
			min_deadline_minutes: 1,
			max_deadline_minutes: 120,
		}
	}
}

/// Structural limits for explicit caller overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideLimits {
	pub max_slippage_bps: i64,
	pub max_deadline_minutes: i64,
}

impl Default for OverrideLimits {
	fn default() -> Self {
		Self {
			max_slippage_bps: 10_000,
			max_deadline_minutes: 7 * 24 * 60,
		}
	}
}

/// Auto-revoke delay: `max(min_hours, deadline_minutes / deadline_divisor_minutes)` hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevokePolicy {
	pub min_hours: u64,
	pub deadline_divisor_minutes: u64,
}

impl RevokePolicy {
	/// Seconds between creation and auto-revocation.
	pub fn revoke_after_secs(&self, deadline_minutes: u32) -> u64 {
		let hours = (deadline_minutes as u64)
			.checked_div(self.deadline_divisor_minutes)
			.unwrap_or(0)
			.max(self.min_hours);
		hours * 3_600
	}
}

impl Default for RevokePolicy {
	fn default() -> Self {
		Self {
			min_hours: 1,
			deadline_divisor_minutes: 30,
		}
	}
}

/// Coefficients for the analysis heuristics.
///
/// These are placeholders pending calibration against real solver data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisPolicy {
	pub base_solver_pool: u32,
	pub min_solver_pool: u32,
	/// Pool share kept when attestation is required, in percent
	pub attestation_pool_percent: u32,
	#[serde(with = "u256_serde")]
	pub stake_tier_1: U256,
	pub stake_tier_1_pool_percent: u32,
	#[serde(with = "u256_serde")]
	pub stake_tier_2: U256,
	pub stake_tier_2_pool_percent: u32,

	pub base_probability: i32,
	pub low_volatility_bonus: i32,
	pub excellent_liquidity_bonus: i32,
	pub attestation_penalty: i32,
	pub tight_slippage_penalty: i32,
	pub long_window_bonus: i32,
	pub long_window_minutes: u32,
	pub min_probability: i32,
	pub max_probability: i32,

	/// Slippage below this counts as tight for scoring
	pub tight_slippage_bps: u32,
	/// Slippage below this is reported as a risk
	pub very_tight_slippage_bps: u32,
	pub short_deadline_minutes: u32,
	pub small_pool_threshold: u32,
	pub loose_slippage_bps: u32,
	pub excess_hops: u8,
	pub long_deadline_minutes: u32,
}

impl Default for AnalysisPolicy {
	fn default() -> Self {
		Self {
			base_solver_pool: 50,
			min_solver_pool: 3,
			attestation_pool_percent: 30,
			stake_tier_1: U256::from(1_000u64) * U256::from(SUI),
			stake_tier_1_pool_percent: 50,
			stake_tier_2: U256::from(10_000u64) * U256::from(SUI),
			stake_tier_2_pool_percent: 20,

			base_probability: 85,
			low_volatility_bonus: 10,
			excellent_liquidity_bonus: 5,
			attestation_penalty: 10,
			tight_slippage_penalty: 5,
			long_window_bonus: 5,
			long_window_minutes: 30,
			min_probability: 60,
			max_probability: 95,

			tight_slippage_bps: 100,
			very_tight_slippage_bps: 50,
			short_deadline_minutes: 5,
			small_pool_threshold: 10,
			loose_slippage_bps: 300,
			excess_hops: 3,
			long_deadline_minutes: 60,
		}
	}
}

/// Complete policy for the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverPolicy {
	pub defaults: DefaultsPolicy,
	pub risk: RiskPolicy,
	pub urgency: UrgencyPolicy,
	pub volatility: VolatilityPolicy,
	pub bounds: BoundsPolicy,
	pub overrides: OverrideLimits,
	pub revoke: RevokePolicy,
	pub analysis: AnalysisPolicy,
}

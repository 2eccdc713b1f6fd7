//! Risk, urgency and market adjustments applied on top of a baseline.

use intent_types::{
	MarketSnapshot, OptimizationPriority, ParameterBundle, PriorityDefaults, ResolverPolicy,
	RiskTolerance, Urgency, U256,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Override values that already passed structural validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatedOverrides {
	pub slippage_bps: Option<u32>,
	pub deadline_minutes: Option<u32>,
}

/// Selectors driving one adjustment pass.
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentInputs {
	pub priority: OptimizationPriority,
	pub risk: RiskTolerance,
	pub urgency: Urgency,
	pub market: Option<MarketSnapshot>,
}

/// Rounds half-to-even and clamps into `[min, max]`.
fn round_clamped(value: Decimal, min: u32, max: u32) -> u32 {
	let rounded = value
		.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
		.to_i64()
		.unwrap_or(if value.is_sign_negative() {
			i64::MIN
		} else {
			i64::MAX
		});
	rounded.max(min as i64).min(max as i64).clamp(0, u32::MAX as i64) as u32
}

/// Scales a stake by a whole-number percentage without leaving integer space.
fn scale_stake(stake: U256, percent: u32) -> U256 {
	stake.saturating_mul(U256::from(percent)) / U256::from(100u64)
}

/// Turns a baseline entry into a resolved parameter bundle. Never fails.
pub struct AdjustmentPipeline<'a> {
	policy: &'a ResolverPolicy,
}

/// Multiplies, saturating at the decimal range; the result is clamped later.
fn scale(value: Decimal, factor: Decimal) -> Decimal {
	value.checked_mul(factor).unwrap_or(Decimal::MAX)
}

impl<'a> AdjustmentPipeline<'a> {
	pub fn new(policy: &'a ResolverPolicy) -> Self {
		Self { policy }
	}

	/// Applies risk and urgency multipliers, the optional market factor,
	/// then rounds and clamps.
	pub fn apply(&self, baseline: &PriorityDefaults, inputs: &AdjustmentInputs) -> ParameterBundle {
		let risk = self.policy.risk.get(inputs.risk);
		let urgency = self.policy.urgency.get(inputs.urgency);
		let bounds = &self.policy.bounds;

		let mut slippage = scale(
			scale(Decimal::from(baseline.slippage_bps), risk.slippage_multiplier),
			urgency.slippage_multiplier,
		);
		if let Some(market) = inputs.market {
			slippage = scale(slippage, self.policy.volatility.get(market.volatility));
		}
		let deadline = scale(
			Decimal::from(baseline.deadline_minutes),
			urgency.deadline_multiplier,
		);

		let requires_attestation = risk.attestation.unwrap_or(baseline.requires_attestation);

		let bundle = ParameterBundle {
			slippage_bps: round_clamped(slippage, bounds.min_slippage_bps, bounds.max_slippage_bps),
			deadline_minutes: round_clamped(
				deadline,
				bounds.min_deadline_minutes,
				bounds.max_deadline_minutes,
			),
			max_hops: baseline.max_hops,
			min_solver_stake: scale_stake(baseline.min_solver_stake, risk.stake_percent),
			requires_attestation,
			weights: baseline.weights,
			encrypt_intent: inputs.priority == OptimizationPriority::MaximumSafety
				|| requires_attestation,
		};

		debug!(
			risk = %inputs.risk,
			urgency = %inputs.urgency,
			volatility = ?inputs.market.map(|m| m.volatility),
			slippage_bps = bundle.slippage_bps,
			deadline_minutes = bundle.deadline_minutes,
			requires_attestation = bundle.requires_attestation,
			"Adjusted parameters"
		);

		bundle
	}

	/// Replaces computed values with explicit overrides, bypassing clamping.
	pub fn apply_overrides(
		&self,
		mut bundle: ParameterBundle,
		overrides: &ValidatedOverrides,
	) -> ParameterBundle {
		if let Some(slippage) = overrides.slippage_bps {
			debug!(computed = bundle.slippage_bps, slippage, "Applying slippage override");
			bundle.slippage_bps = slippage;
		}
		if let Some(deadline) = overrides.deadline_minutes {
			debug!(computed = bundle.deadline_minutes, deadline, "Applying deadline override");
			bundle.deadline_minutes = deadline;
		}
		bundle
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use intent_types::{LiquidityClass, VolatilityClass};

	fn inputs(
		priority: OptimizationPriority,
		risk: RiskTolerance,
		urgency: Urgency,
	) -> AdjustmentInputs {
		AdjustmentInputs {
			priority,
			risk,
			urgency,
			market: None,
		}
	}

	fn resolve(policy: &ResolverPolicy, inputs: &AdjustmentInputs) -> ParameterBundle {
		let baseline = policy.defaults.get(inputs.priority);
		AdjustmentPipeline::new(policy).apply(baseline, inputs)
	}

	#[test]
	fn test_extreme_multipliers_saturate_to_bounds() {
		let mut policy = ResolverPolicy::default();
		policy.risk.high.slippage_multiplier = Decimal::MAX;
		policy.urgency.urgent.slippage_multiplier = Decimal::MAX;
		policy.urgency.urgent.deadline_multiplier = Decimal::MAX;

		let bundle = resolve(
			&policy,
			&inputs(
				OptimizationPriority::Balanced,
				RiskTolerance::High,
				Urgency::Urgent,
			),
		);

		assert_eq!(bundle.slippage_bps, policy.bounds.max_slippage_bps);
		assert_eq!(bundle.deadline_minutes, policy.bounds.max_deadline_minutes);
	}

	#[test]
	fn test_medium_normal_is_identity() {
		let policy = ResolverPolicy::default();
		let bundle = resolve(
			&policy,
			&inputs(
				OptimizationPriority::MaximizeOutput,
				RiskTolerance::Medium,
				Urgency::Normal,
			),
		);

		assert_eq!(bundle.slippage_bps, 100);
		assert_eq!(bundle.deadline_minutes, 30);
		assert_eq!(bundle.max_hops, 4);
		assert!(!bundle.requires_attestation);
		assert!(!bundle.encrypt_intent);
		assert_eq!(
			bundle.min_solver_stake,
			policy.defaults.maximize_output.min_solver_stake
		);
	}

	#[test]
	fn test_safety_low_risk_low_urgency() {
		let policy = ResolverPolicy::default();
		let bundle = resolve(
			&policy,
			&inputs(
				OptimizationPriority::MaximumSafety,
				RiskTolerance::Low,
				Urgency::Low,
			),
		);

		// 50 * 0.7 * 0.9 = 31.5, rounds to even
		assert_eq!(bundle.slippage_bps, 32);
		assert_eq!(bundle.deadline_minutes, 120);
		assert!(bundle.requires_attestation);
		assert!(bundle.encrypt_intent);
		assert_eq!(
			bundle.min_solver_stake,
			policy.defaults.maximum_safety.min_solver_stake * U256::from(2u64)
		);
	}

	#[test]
	fn test_medium_risk_inherits_attestation() {
		let policy = ResolverPolicy::default();
		let safety = resolve(
			&policy,
			&inputs(
				OptimizationPriority::MaximumSafety,
				RiskTolerance::Medium,
				Urgency::Normal,
			),
		);
		assert!(safety.requires_attestation);

		let high = resolve(
			&policy,
			&inputs(
				OptimizationPriority::MaximumSafety,
				RiskTolerance::High,
				Urgency::Normal,
			),
		);
		assert!(!high.requires_attestation);
		// maximum_safety always encrypts
		assert!(high.encrypt_intent);
	}

	#[test]
	fn test_all_combinations_stay_in_bounds() {
		let policy = ResolverPolicy::default();
		let volatilities = [
			None,
			Some(VolatilityClass::Low),
			Some(VolatilityClass::Medium),
			Some(VolatilityClass::High),
		];

		for priority in OptimizationPriority::ALL {
			for risk in RiskTolerance::ALL {
				for urgency in Urgency::ALL {
					for volatility in volatilities {
						let mut selectors = inputs(priority, risk, urgency);
						selectors.market =
							volatility.map(|v| MarketSnapshot::new(v, LiquidityClass::Good));
						let bundle = resolve(&policy, &selectors);

						assert!((10..=1000).contains(&bundle.slippage_bps));
						assert!((1..=120).contains(&bundle.deadline_minutes));
					}
				}
			}
		}
	}

	#[test]
	fn test_urgent_strictly_shortens_deadline() {
		let policy = ResolverPolicy::default();
		for priority in OptimizationPriority::ALL {
			for risk in RiskTolerance::ALL {
				let normal = resolve(&policy, &inputs(priority, risk, Urgency::Normal));
				let urgent = resolve(&policy, &inputs(priority, risk, Urgency::Urgent));
				assert!(
					urgent.deadline_minutes < normal.deadline_minutes,
					"{} / {}",
					priority,
					risk
				);
			}
		}
	}

	#[test]
	fn test_low_risk_strictly_tightens_slippage() {
		let policy = ResolverPolicy::default();
		for priority in OptimizationPriority::ALL {
			for urgency in Urgency::ALL {
				let high = resolve(&policy, &inputs(priority, RiskTolerance::High, urgency));
				let low = resolve(&policy, &inputs(priority, RiskTolerance::Low, urgency));
				assert!(
					low.slippage_bps < high.slippage_bps,
					"{} / {}",
					priority,
					urgency
				);
			}
		}
	}

	#[test]
	fn test_volatility_scales_slippage() {
		let policy = ResolverPolicy::default();
		let mut selectors = inputs(
			OptimizationPriority::Balanced,
			RiskTolerance::Medium,
			Urgency::Normal,
		);

		selectors.market = Some(MarketSnapshot::new(
			VolatilityClass::High,
			LiquidityClass::Good,
		));
		assert_eq!(resolve(&policy, &selectors).slippage_bps, 150);

		selectors.market = Some(MarketSnapshot::new(
			VolatilityClass::Low,
			LiquidityClass::Good,
		));
		assert_eq!(resolve(&policy, &selectors).slippage_bps, 80);

		selectors.market = None;
		assert_eq!(resolve(&policy, &selectors).slippage_bps, 100);
	}

	#[test]
	fn test_clamping_on_extreme_policy() {
		let mut policy = ResolverPolicy::default();
		policy.defaults.balanced.slippage_bps = 5_000;
		policy.defaults.balanced.deadline_minutes = 0;

		let bundle = resolve(
			&policy,
			&inputs(
				OptimizationPriority::Balanced,
				RiskTolerance::Medium,
				Urgency::Normal,
			),
		);
		assert_eq!(bundle.slippage_bps, 1_000);
		assert_eq!(bundle.deadline_minutes, 1);
	}

	#[test]
	fn test_overrides_bypass_clamping() {
		let policy = ResolverPolicy::default();
		let pipeline = AdjustmentPipeline::new(&policy);
		let bundle = resolve(
			&policy,
			&inputs(
				OptimizationPriority::Balanced,
				RiskTolerance::Medium,
				Urgency::Normal,
			),
		);

		let overridden = pipeline.apply_overrides(
			bundle.clone(),
			&ValidatedOverrides {
				slippage_bps: Some(2_500),
				deadline_minutes: Some(600),
			},
		);
		assert_eq!(overridden.slippage_bps, 2_500);
		assert_eq!(overridden.deadline_minutes, 600);
		assert_eq!(overridden.max_hops, bundle.max_hops);
	}

	#[test]
	fn test_round_clamped() {
		assert_eq!(round_clamped(Decimal::new(525, 1), 10, 1000), 52);
		assert_eq!(round_clamped(Decimal::new(535, 1), 10, 1000), 54);
		assert_eq!(round_clamped(Decimal::new(-5, 0), 10, 1000), 10);
	}
}

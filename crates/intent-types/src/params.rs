//! Resolved execution parameters.

use crate::common::{u256_serde, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Relative importance of each solution dimension when solvers are ranked.
///
/// Weights are independent; they are not normalised to a fixed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingWeights {
	pub surplus: Decimal,
	pub gas_cost: Decimal,
	pub execution_speed: Decimal,
	pub reputation: Decimal,
}

impl RankingWeights {
	/// Builds weights from hundredths, e.g. `from_percent(60, 15, 10, 15)`.
	pub fn from_percent(surplus: i64, gas_cost: i64, execution_speed: i64, reputation: i64) -> Self {
		Self {
			surplus: Decimal::new(surplus, 2),
			gas_cost: Decimal::new(gas_cost, 2),
			execution_speed: Decimal::new(execution_speed, 2),
			reputation: Decimal::new(reputation, 2),
		}
	}

	pub fn is_non_negative(&self) -> bool {
		[
			self.surplus,
			self.gas_cost,
			self.execution_speed,
			self.reputation,
		]
		.iter()
		.all(|w| !w.is_sign_negative())
	}
}

/// Fully resolved parameter set for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBundle {
	pub slippage_bps: u32,
	pub deadline_minutes: u32,
	pub max_hops: u8,
	#[serde(with = "u256_serde")]
	pub min_solver_stake: U256,
	pub requires_attestation: bool,
	pub weights: RankingWeights,
	pub encrypt_intent: bool,
}

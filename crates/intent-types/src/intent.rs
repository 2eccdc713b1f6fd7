//! The intent document handed to the signing layer and solver network.

use crate::common::{u256_serde, AssetRef, Timestamp, U256};
use crate::params::RankingWeights;
use crate::request::{IntentType, OptimizationPriority};
use serde::{Deserialize, Serialize};

/// Document standard identifier.
pub const INTENT_STANDARD: &str = "defi-intent";
/// Document schema version.
pub const INTENT_VERSION: &str = "1.0.0";

/// Complete intent document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
	pub standard: String,
	pub version: String,
	pub object: ObjectMetadata,
	pub intent_type: IntentType,
	pub description: String,
	pub operation: Operation,
	pub constraints: Constraints,
	pub preferences: Preferences,
	pub metadata: IntentMetadata,
}

/// Ownership and solver-access policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMetadata {
	pub owner: String,
	pub created_at: Timestamp,
	pub policy: AccessPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
	pub solver_access_window: TimeWindow,
	pub auto_revoke_at: Timestamp,
	pub access_condition: SolverAccessCondition,
}

/// Inclusive time range in Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
	pub start: Timestamp,
	pub end: Timestamp,
}

impl TimeWindow {
	pub fn duration_secs(&self) -> u64 {
		self.end.saturating_sub(self.start)
	}
}

/// Conditions a solver must meet to claim the intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverAccessCondition {
	#[serde(with = "u256_serde")]
	pub min_solver_stake: U256,
	pub requires_attestation: bool,
}

/// Input and output legs of the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
	pub inputs: Vec<AssetLeg>,
	pub outputs: Vec<AssetLeg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLeg {
	pub asset: AssetRef,
	pub amount: AmountSpec,
}

/// Amount specification for one leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AmountSpec {
	Exact {
		#[serde(with = "u256_serde")]
		value: U256,
	},
	Range {
		#[serde(with = "u256_serde")]
		min: U256,
		#[serde(with = "u256_serde")]
		max: U256,
	},
	/// Whatever the best solution delivers
	All,
}

impl AmountSpec {
	/// Range with an effectively unbounded upper cap.
	pub fn at_least(min: U256) -> Self {
		Self::Range { min, max: U256::MAX }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
	pub max_slippage_bps: u32,
	pub deadline: Timestamp,
	pub routing: RoutingConstraints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConstraints {
	pub max_hops: u8,
	pub protocol_whitelist: Vec<String>,
	pub protocol_blacklist: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
	pub optimization_goal: OptimizationPriority,
	pub ranking_weights: RankingWeights,
	pub execution: ExecutionPreferences,
	pub privacy: PrivacyPreferences,
}

/// How solver solutions are presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
	/// Execute the top-ranked solution automatically
	BestSolution,
	/// Let the user pick among the top-ranked solutions
	UserSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPreferences {
	pub mode: ExecutionMode,
	pub show_top_n: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyPreferences {
	pub encrypt_intent: bool,
	pub anonymous_execution: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentMetadata {
	pub tags: Vec<String>,
	pub client: ClientInfo,
}

/// Identifies the software that produced the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
	pub name: String,
	pub version: String,
}

impl Default for ClientInfo {
	fn default() -> Self {
		Self {
			name: "intent-resolver".to_string(),
			version: env!("CARGO_PKG_VERSION").to_string(),
		}
	}
}

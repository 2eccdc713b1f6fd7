//! Structural validation for intent documents received from elsewhere.
//!
//! The resolver only ever emits documents that pass these checks; they exist
//! for documents that come back from the signing layer or other producers.

use crate::intent::{AmountSpec, Intent};
use thiserror::Error;

/// Errors that can occur during document validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
	/// Error that occurs when a required field is missing or empty.
	#[error("Missing required field: {0}")]
	MissingField(String),
	/// Error that occurs when a field has an invalid value.
	#[error("Invalid value for field '{field}': {message}")]
	InvalidValue { field: String, message: String },
}

fn invalid(field: &str, message: impl Into<String>) -> ValidationError {
	ValidationError::InvalidValue {
		field: field.to_string(),
		message: message.into(),
	}
}

/// Highest slippage a document may carry (100%).
const MAX_DOCUMENT_SLIPPAGE_BPS: u32 = 10_000;

/// Checks the internal consistency of an intent document.
pub fn validate_intent(intent: &Intent) -> Result<(), ValidationError> {
	if intent.standard.is_empty() {
		return Err(ValidationError::MissingField("standard".to_string()));
	}
	if intent.version.is_empty() {
		return Err(ValidationError::MissingField("version".to_string()));
	}
	if intent.object.owner.is_empty() {
		return Err(ValidationError::MissingField("object.owner".to_string()));
	}

	let policy = &intent.object.policy;
	let window = policy.solver_access_window;
	if window.start > window.end {
		return Err(invalid(
			"object.policy.solver_access_window",
			format!("start {} is after end {}", window.start, window.end),
		));
	}
	if window.start < intent.object.created_at {
		return Err(invalid(
			"object.policy.solver_access_window.start",
			"window opens before the intent was created",
		));
	}
	if policy.auto_revoke_at < intent.object.created_at {
		return Err(invalid(
			"object.policy.auto_revoke_at",
			"revocation precedes creation",
		));
	}
	if intent.constraints.deadline < window.start {
		return Err(invalid(
			"constraints.deadline",
			"deadline precedes the solver access window",
		));
	}

	if intent.operation.inputs.is_empty() {
		return Err(ValidationError::MissingField("operation.inputs".to_string()));
	}
	if intent.operation.outputs.is_empty() {
		return Err(ValidationError::MissingField(
			"operation.outputs".to_string(),
		));
	}
	for (i, leg) in intent.operation.inputs.iter().enumerate() {
		if matches!(leg.amount, AmountSpec::All) {
			return Err(invalid(
				&format!("operation.inputs[{}].amount", i),
				"input legs need a concrete amount",
			));
		}
	}
	for (i, leg) in intent
		.operation
		.inputs
		.iter()
		.chain(intent.operation.outputs.iter())
		.enumerate()
	{
		if let AmountSpec::Range { min, max } = leg.amount {
			if min > max {
				return Err(invalid(
					&format!("operation.legs[{}].amount", i),
					"range minimum exceeds maximum",
				));
			}
		}
	}

	let constraints = &intent.constraints;
	if constraints.max_slippage_bps > MAX_DOCUMENT_SLIPPAGE_BPS {
		return Err(invalid(
			"constraints.max_slippage_bps",
			format!(
				"{} exceeds {}",
				constraints.max_slippage_bps, MAX_DOCUMENT_SLIPPAGE_BPS
			),
		));
	}
	if constraints.routing.max_hops == 0 {
		return Err(invalid("constraints.routing.max_hops", "must be at least 1"));
	}
	if let Some(protocol) = constraints
		.routing
		.protocol_whitelist
		.iter()
		.find(|p| constraints.routing.protocol_blacklist.contains(p))
	{
		return Err(invalid(
			"constraints.routing",
			format!("protocol '{}' is both allowed and denied", protocol),
		));
	}

	if !intent.preferences.ranking_weights.is_non_negative() {
		return Err(invalid(
			"preferences.ranking_weights",
			"weights must be non-negative",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::common::{AssetRef, U256};
	use crate::intent::*;
	use crate::params::RankingWeights;
	use crate::request::{IntentType, OptimizationPriority};
	use rust_decimal::Decimal;

	const NOW: u64 = 1_700_000_000;

	fn leg(symbol: &str, amount: AmountSpec) -> AssetLeg {
		AssetLeg {
			asset: AssetRef {
				asset_id: format!("0x2::{}::{}", symbol.to_lowercase(), symbol),
				symbol: symbol.to_string(),
				decimals: 9,
			},
			amount,
		}
	}

	fn document() -> Intent {
		Intent {
			standard: INTENT_STANDARD.to_string(),
			version: INTENT_VERSION.to_string(),
			object: ObjectMetadata {
				owner: "0xabc".to_string(),
				created_at: NOW,
				policy: AccessPolicy {
					solver_access_window: TimeWindow {
						start: NOW,
						end: NOW + 1_800,
					},
					auto_revoke_at: NOW + 3_600,
					access_condition: SolverAccessCondition {
						min_solver_stake: U256::from(1_000u64),
						requires_attestation: false,
					},
				},
			},
			intent_type: IntentType::SwapExactInput,
			description: String::new(),
			operation: Operation {
				inputs: vec![leg(
					"SUI",
					AmountSpec::Exact {
						value: U256::from(1_000u64),
					},
				)],
				outputs: vec![leg("USDC", AmountSpec::All)],
			},
			constraints: Constraints {
				max_slippage_bps: 100,
				deadline: NOW + 1_800,
				routing: RoutingConstraints {
					max_hops: 3,
					protocol_whitelist: vec!["aftermath".to_string()],
					protocol_blacklist: vec!["kriya".to_string()],
				},
			},
			preferences: Preferences {
				optimization_goal: OptimizationPriority::Balanced,
				ranking_weights: RankingWeights::from_percent(35, 25, 20, 20),
				execution: ExecutionPreferences {
					mode: ExecutionMode::BestSolution,
					show_top_n: 1,
				},
				privacy: PrivacyPreferences {
					encrypt_intent: false,
					anonymous_execution: false,
				},
			},
			metadata: IntentMetadata {
				tags: vec![],
				client: ClientInfo::default(),
			},
		}
	}

	fn rejected_field(intent: &Intent) -> String {
		match validate_intent(intent).unwrap_err() {
			ValidationError::MissingField(field) => field,
			ValidationError::InvalidValue { field, .. } => field,
		}
	}

	#[test]
	fn test_well_formed_document_passes() {
		assert_eq!(validate_intent(&document()), Ok(()));
	}

	#[test]
	fn test_missing_header_fields() {
		let mut intent = document();
		intent.standard.clear();
		assert_eq!(rejected_field(&intent), "standard");

		let mut intent = document();
		intent.version.clear();
		assert_eq!(rejected_field(&intent), "version");

		let mut intent = document();
		intent.object.owner.clear();
		assert_eq!(rejected_field(&intent), "object.owner");
	}

	#[test]
	fn test_timestamp_ordering() {
		let mut intent = document();
		intent.object.policy.solver_access_window.end = NOW - 1;
		assert_eq!(rejected_field(&intent), "object.policy.solver_access_window");

		let mut intent = document();
		intent.object.policy.solver_access_window.start = NOW - 60;
		assert_eq!(
			rejected_field(&intent),
			"object.policy.solver_access_window.start"
		);

		let mut intent = document();
		intent.object.policy.auto_revoke_at = NOW - 1;
		assert_eq!(rejected_field(&intent), "object.policy.auto_revoke_at");

		let mut intent = document();
		intent.object.policy.solver_access_window.start = NOW + 60;
		intent.constraints.deadline = NOW + 30;
		assert_eq!(rejected_field(&intent), "constraints.deadline");
	}

	#[test]
	fn test_operation_legs() {
		let mut intent = document();
		intent.operation.inputs.clear();
		assert_eq!(rejected_field(&intent), "operation.inputs");

		let mut intent = document();
		intent.operation.outputs.clear();
		assert_eq!(rejected_field(&intent), "operation.outputs");

		let mut intent = document();
		intent.operation.inputs[0].amount = AmountSpec::All;
		assert_eq!(rejected_field(&intent), "operation.inputs[0].amount");
	}

	#[test]
	fn test_inverted_range_rejected() {
		let mut intent = document();
		intent.operation.outputs[0].amount = AmountSpec::Range {
			min: U256::from(500u64),
			max: U256::from(100u64),
		};
		// legs are numbered inputs first, then outputs
		assert_eq!(rejected_field(&intent), "operation.legs[1].amount");

		intent.operation.outputs[0].amount = AmountSpec::at_least(U256::from(500u64));
		assert!(validate_intent(&intent).is_ok());
	}

	#[test]
	fn test_slippage_limit() {
		let mut intent = document();
		intent.constraints.max_slippage_bps = 10_000;
		assert!(validate_intent(&intent).is_ok());

		intent.constraints.max_slippage_bps = 10_001;
		assert_eq!(rejected_field(&intent), "constraints.max_slippage_bps");
	}

	#[test]
	fn test_routing_constraints() {
		let mut intent = document();
		intent.constraints.routing.max_hops = 0;
		assert_eq!(rejected_field(&intent), "constraints.routing.max_hops");

		let mut intent = document();
		intent
			.constraints
			.routing
			.protocol_blacklist
			.push("aftermath".to_string());
		assert_eq!(
			validate_intent(&intent),
			Err(ValidationError::InvalidValue {
				field: "constraints.routing".to_string(),
				message: "protocol 'aftermath' is both allowed and denied".to_string(),
			})
		);
	}

	#[test]
	fn test_negative_weights_rejected() {
		let mut intent = document();
		intent.preferences.ranking_weights.reputation = Decimal::new(-5, 2);
		assert_eq!(rejected_field(&intent), "preferences.ranking_weights");
	}
}

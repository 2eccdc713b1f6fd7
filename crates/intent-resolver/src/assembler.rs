//! Request validation and intent document construction.

use crate::adjustment::ValidatedOverrides;
use crate::{AddressValidator, TokenRegistry};
use intent_types::{
	parse_raw_amount, AccessPolicy, AmountSpec, AssetLeg, AssetRef, ClientInfo, Constraints,
	ExecutionMode, ExecutionPreferences, Intent, IntentError, IntentMetadata, IntentRequest,
	IntentType, ObjectMetadata, Operation, OptimizationPriority, ParameterBundle, Preferences,
	PrivacyPreferences, Result, RoutingConstraints, SolverAccessCondition, TimeWindow, Timestamp,
	U256, INTENT_STANDARD, INTENT_VERSION,
};
use intent_types::{OverrideLimits, RevokePolicy};
use tracing::{debug, warn};

const MAX_SYMBOL_LEN: usize = 20;

/// Request fields that passed validation, in resolved form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
	pub owner: String,
	pub input: AssetRef,
	pub input_amount: U256,
	pub output: AssetRef,
	pub output_amount: AmountSpec,
	pub overrides: ValidatedOverrides,
	pub protocol_whitelist: Vec<String>,
	pub protocol_blacklist: Vec<String>,
}

fn validate_symbol(symbol: &str) -> Result<()> {
	let well_formed = !symbol.is_empty()
		&& symbol.len() <= MAX_SYMBOL_LEN
		&& symbol.bytes().all(|b| b.is_ascii_alphanumeric());
	if well_formed {
		Ok(())
	} else {
		Err(IntentError::InvalidSymbol(symbol.to_string()))
	}
}

fn validate_override(field: &str, value: Option<i64>, min: i64, max: i64) -> Result<Option<u32>> {
	match value {
		None => Ok(None),
		Some(v) if v < min || v > max => Err(IntentError::OverrideOutOfRange {
			field: field.to_string(),
			value: v,
		}),
		Some(v) => u32::try_from(v)
			.map(Some)
			.map_err(|_| IntentError::OverrideOutOfRange {
				field: field.to_string(),
				value: v,
			}),
	}
}

/// Trims both protocol lists and removes denied protocols from the allow-list.
/// The deny-list wins, compared case-insensitively.
fn reconcile_protocols(allowed: &[String], denied: &[String]) -> (Vec<String>, Vec<String>) {
	let clean = |list: &[String]| -> Vec<String> {
		list.iter()
			.map(|p| p.trim().to_string())
			.filter(|p| !p.is_empty())
			.collect()
	};
	let denied = clean(denied);
	let (allowed, dropped): (Vec<String>, Vec<String>) = clean(allowed)
		.into_iter()
		.partition(|p| !denied.iter().any(|d| d.eq_ignore_ascii_case(p)));

	if !dropped.is_empty() {
		warn!(
			protocols = ?dropped,
			"Protocols both allowed and denied, dropping them from the allow-list"
		);
	}
	(allowed, denied)
}

/// Builds intent documents from validated requests and resolved parameters.
pub struct DocumentAssembler<'a> {
	address_validator: &'a dyn AddressValidator,
	registry: &'a dyn TokenRegistry,
	override_limits: &'a OverrideLimits,
	revoke: &'a RevokePolicy,
	client: &'a ClientInfo,
}

impl<'a> DocumentAssembler<'a> {
	pub fn new(
		address_validator: &'a dyn AddressValidator,
		registry: &'a dyn TokenRegistry,
		override_limits: &'a OverrideLimits,
		revoke: &'a RevokePolicy,
		client: &'a ClientInfo,
	) -> Self {
		Self {
			address_validator,
			registry,
			override_limits,
			revoke,
			client,
		}
	}

	/// Validates a request in a fixed order: address, amounts, symbols,
	/// registry lookup, overrides. The first failure wins.
	pub fn validate(&self, request: &IntentRequest) -> Result<ValidatedRequest> {
		if !self.address_validator.is_valid_address(&request.user_address) {
			return Err(IntentError::InvalidAddress(request.user_address.clone()));
		}
		let owner = self
			.address_validator
			.normalize_address(&request.user_address);

		let input_amount = parse_raw_amount("input.amount", &request.input.amount)?;
		let target = request
			.output
			.amount
			.as_deref()
			.map(|raw| parse_raw_amount("output.amount", raw))
			.transpose()?;
		let min_output = request
			.min_output
			.as_deref()
			.map(|raw| parse_raw_amount("min_output", raw))
			.transpose()?;
		let output_amount = match (request.intent_type, target, min_output) {
			(IntentType::SwapExactOutput, Some(value), _) => AmountSpec::Exact { value },
			(IntentType::SwapExactOutput, None, _) => {
				return Err(IntentError::invalid_amount("output.amount", ""));
			}
			(_, _, Some(min)) => AmountSpec::at_least(min),
			_ => AmountSpec::All,
		};

		validate_symbol(&request.input.symbol)?;
		validate_symbol(&request.output.symbol)?;

		let input = self.resolve_asset(
			&request.input.symbol,
			&request.input.id,
			request.input.decimals,
		)?;
		let output = self.resolve_asset(
			&request.output.symbol,
			&request.output.id,
			request.output.decimals,
		)?;

		let overrides = ValidatedOverrides {
			slippage_bps: validate_override(
				"slippage_bps",
				request.overrides.slippage_bps,
				0,
				self.override_limits.max_slippage_bps,
			)?,
			deadline_minutes: validate_override(
				"deadline_minutes",
				request.overrides.deadline_minutes,
				1,
				self.override_limits.max_deadline_minutes,
			)?,
		};

		let (protocol_whitelist, protocol_blacklist) = reconcile_protocols(
			&request.overrides.protocol_whitelist,
			&request.overrides.protocol_blacklist,
		);

		Ok(ValidatedRequest {
			owner,
			input,
			input_amount,
			output,
			output_amount,
			overrides,
			protocol_whitelist,
			protocol_blacklist,
		})
	}

	fn resolve_asset(&self, symbol: &str, id: &str, decimals: u8) -> Result<AssetRef> {
		let token = self
			.registry
			.lookup(symbol)
			.ok_or_else(|| IntentError::UnsupportedAsset {
				symbol: symbol.to_string(),
				supported: self.registry.supported_symbols(),
			})?;

		if token.decimals != decimals {
			warn!(
				symbol,
				requested = decimals,
				registry = token.decimals,
				"Request decimals differ from registry"
			);
		}

		Ok(AssetRef {
			asset_id: if id.is_empty() {
				token.asset_id
			} else {
				id.to_string()
			},
			symbol: token.symbol,
			decimals,
		})
	}

	/// Combines a validated request with resolved parameters at time `now`.
	pub fn assemble(
		&self,
		request: &IntentRequest,
		validated: ValidatedRequest,
		params: &ParameterBundle,
		now: Timestamp,
	) -> Intent {
		let deadline = now + params.deadline_minutes as u64 * 60;
		let auto_revoke_at = now + self.revoke.revoke_after_secs(params.deadline_minutes);
		let safety_first = request.priority == OptimizationPriority::MaximumSafety;

		let mut tags: Vec<String> = Vec::with_capacity(request.tags.len() + 2);
		for tag in request
			.tags
			.iter()
			.map(|t| t.trim().to_string())
			.chain([
				request.intent_type.as_str().to_string(),
				request.priority.as_str().to_string(),
			]) {
			if !tag.is_empty() && !tags.contains(&tag) {
				tags.push(tag);
			}
		}

		let execution = if safety_first {
			ExecutionPreferences {
				mode: ExecutionMode::UserSelection,
				show_top_n: 3,
			}
		} else {
			ExecutionPreferences {
				mode: ExecutionMode::BestSolution,
				show_top_n: 1,
			}
		};

		debug!(
			owner = %validated.owner,
			intent_type = %request.intent_type,
			deadline,
			auto_revoke_at,
			"Assembling intent document"
		);

		Intent {
			standard: INTENT_STANDARD.to_string(),
			version: INTENT_VERSION.to_string(),
			object: ObjectMetadata {
				owner: validated.owner,
				created_at: now,
				policy: AccessPolicy {
					solver_access_window: TimeWindow {
						start: now,
						end: deadline,
					},
					auto_revoke_at,
					access_condition: SolverAccessCondition {
						min_solver_stake: params.min_solver_stake,
						requires_attestation: params.requires_attestation,
					},
				},
			},
			intent_type: request.intent_type,
			description: request.description.clone(),
			operation: Operation {
				inputs: vec![AssetLeg {
					asset: validated.input,
					amount: AmountSpec::Exact {
						value: validated.input_amount,
					},
				}],
				outputs: vec![AssetLeg {
					asset: validated.output,
					amount: validated.output_amount,
				}],
			},
			constraints: Constraints {
				max_slippage_bps: params.slippage_bps,
				deadline,
				routing: RoutingConstraints {
					max_hops: params.max_hops,
					protocol_whitelist: validated.protocol_whitelist,
					protocol_blacklist: validated.protocol_blacklist,
				},
			},
			preferences: Preferences {
				optimization_goal: request.priority,
				ranking_weights: params.weights,
				execution,
				privacy: PrivacyPreferences {
					encrypt_intent: params.encrypt_intent,
					anonymous_execution: safety_first,
				},
			},
			metadata: IntentMetadata {
				tags,
				client: self.client.clone(),
			},
		}
	}
}

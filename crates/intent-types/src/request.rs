//! Caller-facing request types.
//!
//! Enumerated selectors deserialize leniently: an unrecognised value falls
//! back to the documented default (`balanced`, `medium`, `normal`) and logs a
//! warning instead of rejecting the request.

use crate::market::MarketSnapshot;
use crate::selector::deserialize_selector;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::warn;

/// Normalises a selector string so `Maximize-Output` and `maximize_output`
/// compare equal.
fn normalize_selector(raw: &str) -> String {
	raw.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Optimization goal chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationPriority {
	MaximizeOutput,
	MinimizeGas,
	FastestExecution,
	#[default]
	Balanced,
	MaximumSafety,
}

impl OptimizationPriority {
	pub const ALL: [Self; 5] = [
		Self::MaximizeOutput,
		Self::MinimizeGas,
		Self::FastestExecution,
		Self::Balanced,
		Self::MaximumSafety,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::MaximizeOutput => "maximize_output",
			Self::MinimizeGas => "minimize_gas",
			Self::FastestExecution => "fastest_execution",
			Self::Balanced => "balanced",
			Self::MaximumSafety => "maximum_safety",
		}
	}
}

impl<'de> Deserialize<'de> for OptimizationPriority {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserialize_selector(deserializer, "optimization priority")
	}
}

impl From<String> for OptimizationPriority {
	fn from(raw: String) -> Self {
		match normalize_selector(&raw).as_str() {
			"maximize_output" => Self::MaximizeOutput,
			"minimize_gas" => Self::MinimizeGas,
			"fastest_execution" => Self::FastestExecution,
			"balanced" => Self::Balanced,
			"maximum_safety" => Self::MaximumSafety,
			_ => {
				warn!(value = %raw, "Unknown optimization priority, falling back to balanced");
				Self::Balanced
			}
		}
	}
}

impl fmt::Display for OptimizationPriority {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// How much execution risk the user accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
	Low,
	#[default]
	Medium,
	High,
}

impl RiskTolerance {
	pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Low => "low",
			Self::Medium => "medium",
			Self::High => "high",
		}
	}
}

impl<'de> Deserialize<'de> for RiskTolerance {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserialize_selector(deserializer, "risk tolerance")
	}
}

impl From<String> for RiskTolerance {
	fn from(raw: String) -> Self {
		match normalize_selector(&raw).as_str() {
			"low" => Self::Low,
			"medium" => Self::Medium,
			"high" => Self::High,
			_ => {
				warn!(value = %raw, "Unknown risk tolerance, falling back to medium");
				Self::Medium
			}
		}
	}
}

impl fmt::Display for RiskTolerance {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// How soon the user wants the intent executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
	Low,
	#[default]
	Normal,
	Urgent,
}

impl Urgency {
	pub const ALL: [Self; 3] = [Self::Low, Self::Normal, Self::Urgent];

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Low => "low",
			Self::Normal => "normal",
			Self::Urgent => "urgent",
		}
	}
}

impl<'de> Deserialize<'de> for Urgency {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserialize_selector(deserializer, "urgency")
	}
}

impl From<String> for Urgency {
	fn from(raw: String) -> Self {
		match normalize_selector(&raw).as_str() {
			"low" => Self::Low,
			"normal" => Self::Normal,
			"urgent" => Self::Urgent,
			_ => {
				warn!(value = %raw, "Unknown urgency, falling back to normal");
				Self::Normal
			}
		}
	}
}

impl fmt::Display for Urgency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Classification of the intent document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum IntentType {
	#[default]
	#[serde(rename = "swap.exact_input")]
	SwapExactInput,
	#[serde(rename = "swap.exact_output")]
	SwapExactOutput,
	#[serde(rename = "limit.sell")]
	LimitSell,
	#[serde(rename = "limit.buy")]
	LimitBuy,
}

impl IntentType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::SwapExactInput => "swap.exact_input",
			Self::SwapExactOutput => "swap.exact_output",
			Self::LimitSell => "limit.sell",
			Self::LimitBuy => "limit.buy",
		}
	}
}

impl<'de> Deserialize<'de> for IntentType {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserialize_selector(deserializer, "intent type")
	}
}

impl From<String> for IntentType {
	fn from(raw: String) -> Self {
		match raw.trim().to_ascii_lowercase().as_str() {
			"swap.exact_input" => Self::SwapExactInput,
			"swap.exact_output" => Self::SwapExactOutput,
			"limit.sell" => Self::LimitSell,
			"limit.buy" => Self::LimitBuy,
			_ => {
				warn!(value = %raw, "Unknown intent type, falling back to swap.exact_input");
				Self::SwapExactInput
			}
		}
	}
}

impl fmt::Display for IntentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Input asset with the raw amount to spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputAsset {
	/// Fully qualified coin type (may be empty to use the registry entry)
	#[serde(default)]
	pub id: String,
	pub symbol: String,
	pub decimals: u8,
	/// Raw amount in the asset's smallest unit
	pub amount: String,
}

/// Output asset; `amount` is the target for exact-output swaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputAsset {
	#[serde(default)]
	pub id: String,
	pub symbol: String,
	pub decimals: u8,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub amount: Option<String>,
}

/// Explicit caller overrides. Present values replace computed ones verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOverrides {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub slippage_bps: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deadline_minutes: Option<i64>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub protocol_whitelist: Vec<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub protocol_blacklist: Vec<String>,
}

/// Structured request handed to the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRequest {
	pub user_address: String,
	/// Natural-language description, copied into the document untouched
	#[serde(default)]
	pub description: String,
	pub input: InputAsset,
	pub output: OutputAsset,
	#[serde(default)]
	pub intent_type: IntentType,
	/// Minimum acceptable output in raw units
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_output: Option<String>,
	#[serde(default)]
	pub priority: OptimizationPriority,
	#[serde(default)]
	pub risk_tolerance: RiskTolerance,
	#[serde(default)]
	pub urgency: Urgency,
	#[serde(default)]
	pub overrides: RequestOverrides,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub market: Option<MarketSnapshot>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
}

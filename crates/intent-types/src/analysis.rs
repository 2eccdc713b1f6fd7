//! Read-only diagnostics derived from an intent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse complexity bucket for an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityClass {
	Simple,
	Moderate,
	Complex,
	Advanced,
}

impl ComplexityClass {
	pub fn from_score(score: u32) -> Self {
		match score {
			0 => Self::Simple,
			1..=3 => Self::Moderate,
			4..=6 => Self::Complex,
			_ => Self::Advanced,
		}
	}
}

impl fmt::Display for ComplexityClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Simple => write!(f, "simple"),
			Self::Moderate => write!(f, "moderate"),
			Self::Complex => write!(f, "complex"),
			Self::Advanced => write!(f, "advanced"),
		}
	}
}

/// Heuristic view over an intent. Recomputable at any time, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
	pub complexity: ComplexityClass,
	pub complexity_score: u32,
	pub estimated_solver_pool: u32,
	/// Heuristic score in percent, not a calibrated probability
	pub execution_probability: u8,
	pub risk_factors: Vec<String>,
	pub optimization_opportunities: Vec<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_complexity_thresholds() {
		assert_eq!(ComplexityClass::from_score(0), ComplexityClass::Simple);
		assert_eq!(ComplexityClass::from_score(1), ComplexityClass::Moderate);
		assert_eq!(ComplexityClass::from_score(3), ComplexityClass::Moderate);
		assert_eq!(ComplexityClass::from_score(4), ComplexityClass::Complex);
		assert_eq!(ComplexityClass::from_score(6), ComplexityClass::Complex);
		assert_eq!(ComplexityClass::from_score(7), ComplexityClass::Advanced);
	}
}

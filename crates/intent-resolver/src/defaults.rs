//! Baseline parameters per optimization priority.

use intent_types::{DefaultsPolicy, OptimizationPriority, PriorityDefaults};
use tracing::debug;

/// Lookup over the per-priority baseline entries.
///
/// Total over the closed priority enum; unknown priorities were already
/// mapped to `balanced` when the request was deserialized.
pub struct DefaultsTable<'a> {
	policy: &'a DefaultsPolicy,
}

impl<'a> DefaultsTable<'a> {
	pub fn new(policy: &'a DefaultsPolicy) -> Self {
		Self { policy }
	}

	/// Returns the baseline entry for `priority`.
	pub fn baseline(&self, priority: OptimizationPriority) -> &'a PriorityDefaults {
		let entry = self.policy.get(priority);
		debug!(
			%priority,
			slippage_bps = entry.slippage_bps,
			deadline_minutes = entry.deadline_minutes,
			max_hops = entry.max_hops,
			"Selected baseline parameters"
		);
		entry
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use intent_types::U256;

	#[test]
	fn test_maximize_output_baseline() {
		let policy = DefaultsPolicy::default();
		let entry = DefaultsTable::new(&policy).baseline(OptimizationPriority::MaximizeOutput);

		assert_eq!(entry.slippage_bps, 100);
		assert_eq!(entry.deadline_minutes, 30);
		assert_eq!(entry.max_hops, 4);
		assert!(!entry.requires_attestation);
		assert!(entry.weights.surplus > entry.weights.gas_cost);
		assert!(entry.weights.surplus > entry.weights.execution_speed);
		assert!(entry.weights.surplus > entry.weights.reputation);
	}

	#[test]
	fn test_every_priority_has_an_entry() {
		let policy = DefaultsPolicy::default();
		let table = DefaultsTable::new(&policy);

		for priority in OptimizationPriority::ALL {
			let entry = table.baseline(priority);
			assert!(entry.max_hops >= 1);
			assert!(entry.min_solver_stake > U256::ZERO);
			assert!(entry.weights.is_non_negative());
		}
	}

	#[test]
	fn test_maximum_safety_requires_attestation() {
		let policy = DefaultsPolicy::default();
		let entry = DefaultsTable::new(&policy).baseline(OptimizationPriority::MaximumSafety);
		assert!(entry.requires_attestation);
		assert_eq!(entry.slippage_bps, 50);
		assert_eq!(entry.deadline_minutes, 60);
	}
}

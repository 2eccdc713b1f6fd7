//! Configuration loading from files and environment.

use crate::types::*;
use crate::ConfigError;
use anyhow::{Context, Result};
use intent_types::{OptimizationPriority, RiskTolerance, Urgency, VolatilityClass};
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

const MAX_SYMBOL_LEN: usize = 20;
/// Largest adjustment multiplier a policy may carry
const MAX_MULTIPLIER: Decimal = Decimal::ONE_HUNDRED;

fn multiplier_in_range(value: Decimal) -> bool {
	value >= Decimal::ZERO && value <= MAX_MULTIPLIER
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
	/// Load configuration from file
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<IntentConfig> {
		let path = path.as_ref();
		info!("Loading configuration from {:?}", path);

		let raw = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {:?}", path))?;
		let contents = Self::substitute_env_vars(&raw)?;

		let mut config = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml(&contents)?,
			Some("json") => Self::from_json(&contents)?,
			Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
			_ => anyhow::bail!("Unsupported config format: {:?}", path),
		};

		Self::apply_env_overrides(&mut config)?;
		Self::validate_config(&config)?;
		Ok(config)
	}

	/// Load from TOML string
	pub fn from_toml(contents: &str) -> Result<IntentConfig> {
		toml::from_str(contents).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))
	}

	/// Load from JSON string
	pub fn from_json(contents: &str) -> Result<IntentConfig> {
		serde_json::from_str(contents).context("Failed to parse JSON")
	}

	/// Load from YAML string
	pub fn from_yaml(contents: &str) -> Result<IntentConfig> {
		serde_yaml::from_str(contents).context("Failed to parse YAML")
	}

	/// Render a configuration as TOML
	pub fn to_toml(config: &IntentConfig) -> Result<String> {
		toml::to_string_pretty(config).context("Failed to serialize configuration")
	}

	/// Load from environment variables with optional file override
	pub fn from_env_and_file(file_path: Option<&Path>) -> Result<IntentConfig> {
		match file_path {
			Some(path) => Self::from_file(path),
			None => {
				let mut config = IntentConfig::default();
				Self::apply_env_overrides(&mut config)?;
				Self::validate_config(&config)?;
				Ok(config)
			}
		}
	}

	/// Replace `${VAR}` references with values from the environment
	pub fn substitute_env_vars(content: &str) -> Result<String, ConfigError> {
		Self::substitute_with(content, |name| std::env::var(name).ok())
	}

	fn substitute_with(
		content: &str,
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<String, ConfigError> {
		let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
			.map_err(|e| ConfigError::ParseError(e.to_string()))?;

		let mut result = String::with_capacity(content.len());
		let mut last = 0;
		for cap in re.captures_iter(content) {
			let (Some(full), Some(name)) = (cap.get(0), cap.get(1)) else {
				continue;
			};
			let value = lookup(name.as_str())
				.ok_or_else(|| ConfigError::EnvVarNotFound(name.as_str().to_string()))?;
			result.push_str(&content[last..full.start()]);
			result.push_str(&value);
			last = full.end();
		}
		result.push_str(&content[last..]);

		Ok(result)
	}

	/// Apply environment variable overrides
	fn apply_env_overrides(config: &mut IntentConfig) -> Result<(), ConfigError> {
		Self::apply_overrides_with(config, |name| std::env::var(name).ok())
	}

	fn apply_overrides_with(
		config: &mut IntentConfig,
		lookup: impl Fn(&str) -> Option<String>,
	) -> Result<(), ConfigError> {
		if let Some(log_level) = lookup("INTENT_LOG_LEVEL") {
			debug!("Overriding log level from environment");
			config.resolver.log_level = log_level;
		}

		if let Some(http_port) = lookup("INTENT_HTTP_PORT") {
			debug!("Overriding HTTP port from environment");
			config.resolver.port = http_port
				.trim()
				.parse()
				.map_err(|e| ConfigError::ValidationError(format!("Invalid HTTP port: {}", e)))?;
		}

		Ok(())
	}

	/// Validate configuration
	pub fn validate_config(config: &IntentConfig) -> Result<(), ConfigError> {
		let invalid =
			|msg: String| -> Result<(), ConfigError> { Err(ConfigError::ValidationError(msg)) };
		let policy = &config.policy;

		if config.resolver.port == 0 {
			return invalid("resolver.port must be non-zero".to_string());
		}

		let bounds = &policy.bounds;
		if bounds.min_slippage_bps > bounds.max_slippage_bps {
			return invalid(format!(
				"policy.bounds: min_slippage_bps ({}) exceeds max_slippage_bps ({})",
				bounds.min_slippage_bps, bounds.max_slippage_bps
			));
		}
		if bounds.min_deadline_minutes == 0 {
			return invalid("policy.bounds.min_deadline_minutes must be at least 1".to_string());
		}
		if bounds.min_deadline_minutes > bounds.max_deadline_minutes {
			return invalid(format!(
				"policy.bounds: min_deadline_minutes ({}) exceeds max_deadline_minutes ({})",
				bounds.min_deadline_minutes, bounds.max_deadline_minutes
			));
		}

		for priority in OptimizationPriority::ALL {
			let entry = policy.defaults.get(priority);
			if !entry.weights.is_non_negative() {
				return invalid(format!("policy.defaults.{}: weights must be non-negative", priority));
			}
			if entry.max_hops == 0 {
				return invalid(format!("policy.defaults.{}: max_hops must be at least 1", priority));
			}
		}

		for risk in RiskTolerance::ALL {
			if !multiplier_in_range(policy.risk.get(risk).slippage_multiplier) {
				return invalid(format!(
					"policy.risk.{}: slippage multiplier must be within 0..={}",
					risk, MAX_MULTIPLIER
				));
			}
		}
		for urgency in Urgency::ALL {
			let adjustment = policy.urgency.get(urgency);
			if !multiplier_in_range(adjustment.deadline_multiplier)
				|| !multiplier_in_range(adjustment.slippage_multiplier)
			{
				return invalid(format!(
					"policy.urgency.{}: multipliers must be within 0..={}",
					urgency, MAX_MULTIPLIER
				));
			}
		}
		for volatility in [
			VolatilityClass::Low,
			VolatilityClass::Medium,
			VolatilityClass::High,
		] {
			if !multiplier_in_range(policy.volatility.get(volatility)) {
				return invalid(format!(
					"policy.volatility.{}: multiplier must be within 0..={}",
					volatility, MAX_MULTIPLIER
				));
			}
		}

		if policy.overrides.max_slippage_bps < 0 || policy.overrides.max_deadline_minutes < 1 {
			return invalid("policy.overrides: limits must allow at least one value".to_string());
		}

		let analysis = &policy.analysis;
		if analysis.min_solver_pool > analysis.base_solver_pool {
			return invalid(format!(
				"policy.analysis: min_solver_pool ({}) exceeds base_solver_pool ({})",
				analysis.min_solver_pool, analysis.base_solver_pool
			));
		}
		if analysis.stake_tier_1 > analysis.stake_tier_2 {
			return invalid("policy.analysis: stake_tier_1 exceeds stake_tier_2".to_string());
		}
		for (name, percent) in [
			("attestation_pool_percent", analysis.attestation_pool_percent),
			("stake_tier_1_pool_percent", analysis.stake_tier_1_pool_percent),
			("stake_tier_2_pool_percent", analysis.stake_tier_2_pool_percent),
		] {
			if percent > 100 {
				return invalid(format!("policy.analysis.{} ({}) exceeds 100", name, percent));
			}
		}
		if !(0..=100).contains(&analysis.min_probability)
			|| !(0..=100).contains(&analysis.max_probability)
			|| analysis.min_probability > analysis.max_probability
		{
			return invalid(format!(
				"policy.analysis: probability range {}..={} must lie within 0..=100",
				analysis.min_probability, analysis.max_probability
			));
		}

		if config.tokens.is_empty() {
			return invalid("At least one token must be configured".to_string());
		}
		let mut seen = HashSet::new();
		for token in &config.tokens {
			let well_formed = !token.symbol.is_empty()
				&& token.symbol.len() <= MAX_SYMBOL_LEN
				&& token.symbol.bytes().all(|b| b.is_ascii_alphanumeric());
			if !well_formed {
				return invalid(format!("Invalid token symbol '{}'", token.symbol));
			}
			if token.asset_id.trim().is_empty() {
				return invalid(format!("Token {} has no asset_id", token.symbol));
			}
			if !seen.insert(token.symbol.to_ascii_uppercase()) {
				return invalid(format!("Token {} configured more than once", token.symbol));
			}
		}

		for pair in config.market.snapshots.keys() {
			if !seen.contains(&pair.base) || !seen.contains(&pair.quote) {
				warn!(%pair, "Market snapshot references an unconfigured token");
			}
		}

		Ok(())
	}
}

/// Load configuration from an explicit path or the standard locations
pub fn load_config(path: Option<&Path>) -> Result<IntentConfig> {
	// Check for config file in order:
	// 1. Explicit path (--config / CONFIG_FILE)
	// 2. ./config.toml
	// 3. ./config/intent-resolver.toml
	// 4. Default config with env overrides

	if let Some(path) = path {
		return ConfigLoader::from_env_and_file(Some(path));
	}

	let paths = ["./config.toml", "./config/intent-resolver.toml"];

	for path in &paths {
		if Path::new(path).exists() {
			return ConfigLoader::from_env_and_file(Some(Path::new(path)));
		}
	}

	ConfigLoader::from_env_and_file(None)
}

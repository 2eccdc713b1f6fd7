//! Error types for intent resolution.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntentError>;

/// Tagged failures surfaced by the resolver.
///
/// Validation runs before any document is built, so every variant means no
/// intent was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
	#[error("Invalid address: {0}")]
	InvalidAddress(String),

	#[error("Invalid amount for {field}: {value:?}")]
	InvalidAmount { field: String, value: String },

	#[error("Invalid asset symbol: {0:?}")]
	InvalidSymbol(String),

	#[error("Unsupported asset {symbol}; supported assets: {}", supported.join(", "))]
	UnsupportedAsset {
		symbol: String,
		supported: Vec<String>,
	},

	#[error("Override {field} out of range: {value}")]
	OverrideOutOfRange { field: String, value: i64 },
}

impl IntentError {
	/// Stable machine-readable tag for the error variant.
	pub fn code(&self) -> &'static str {
		match self {
			Self::InvalidAddress(_) => "INVALID_ADDRESS",
			Self::InvalidAmount { .. } => "INVALID_AMOUNT",
			Self::InvalidSymbol(_) => "INVALID_SYMBOL",
			Self::UnsupportedAsset { .. } => "UNSUPPORTED_ASSET",
			Self::OverrideOutOfRange { .. } => "OVERRIDE_OUT_OF_RANGE",
		}
	}

	/// Shorthand for an [`IntentError::InvalidAmount`] on the named field.
	pub fn invalid_amount(field: impl Into<String>, value: impl Into<String>) -> Self {
		Self::InvalidAmount {
			field: field.into(),
			value: value.into(),
		}
	}
}

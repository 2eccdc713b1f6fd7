//! In-memory token registry.

use crate::TokenRegistry;
use intent_types::{default_tokens, TokenInfo};
use std::collections::BTreeMap;

/// Registry backed by a fixed token list, keyed by upper-cased symbol.
#[derive(Debug, Clone)]
pub struct MemoryTokenRegistry {
	tokens: BTreeMap<String, TokenInfo>,
}

impl MemoryTokenRegistry {
	pub fn new(tokens: impl IntoIterator<Item = TokenInfo>) -> Self {
		Self {
			tokens: tokens
				.into_iter()
				.map(|token| (token.symbol.to_ascii_uppercase(), token))
				.collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn tokens(&self) -> impl Iterator<Item = &TokenInfo> {
		self.tokens.values()
	}
}

impl Default for MemoryTokenRegistry {
	fn default() -> Self {
		Self::new(default_tokens())
	}
}

impl TokenRegistry for MemoryTokenRegistry {
	fn lookup(&self, symbol: &str) -> Option<TokenInfo> {
		self.tokens.get(&symbol.trim().to_ascii_uppercase()).cloned()
	}

	fn supported_symbols(&self) -> Vec<String> {
		self.tokens.values().map(|t| t.symbol.clone()).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lookup_is_case_insensitive() {
		let registry = MemoryTokenRegistry::default();
		let token = registry.lookup("usdc").unwrap();
		assert_eq!(token.symbol, "USDC");
		assert_eq!(token.decimals, 6);
		assert!(registry.lookup("DOGE").is_none());
	}

	#[test]
	fn test_supported_symbols_are_sorted() {
		let registry = MemoryTokenRegistry::new(vec![
			TokenInfo::new("USDC", "0x1::usdc::USDC", 6, "USD Coin"),
			TokenInfo::new("SUI", "0x2::sui::SUI", 9, "Sui"),
		]);
		assert_eq!(registry.supported_symbols(), vec!["SUI", "USDC"]);
		assert_eq!(registry.len(), 2);
	}
}

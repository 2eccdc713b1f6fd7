//! Time-bounded key/value cache.

use dashmap::DashMap;
use intent_types::{Clock, Timestamp};
use std::hash::Hash;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Entry<V> {
	value: V,
	expires_at: Timestamp,
}

/// Concurrent map whose entries expire `ttl_secs` after insertion.
///
/// Expiry is judged against the injected clock, so a cache built with a
/// `FixedClock` never ages. Expired entries are dropped lazily on read or
/// in bulk by [`TtlCache::purge_expired`].
#[derive(Clone)]
pub struct TtlCache<K, V>
where
	K: Eq + Hash,
{
	data: Arc<DashMap<K, Entry<V>>>,
	clock: Arc<dyn Clock>,
	ttl_secs: u64,
}

impl<K, V> TtlCache<K, V>
where
	K: Eq + Hash + Clone,
	V: Clone,
{
	pub fn new(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
		Self {
			data: Arc::new(DashMap::new()),
			clock,
			ttl_secs,
		}
	}

	/// Returns the live value for `key`, evicting it if it has expired.
	pub fn get(&self, key: &K) -> Option<V> {
		let now = self.clock.now();
		let hit = self.data.get(key).map(|entry| {
			if entry.expires_at > now {
				Some(entry.value.clone())
			} else {
				None
			}
		})?;

		if hit.is_none() {
			self.data.remove_if(key, |_, entry| entry.expires_at <= now);
		}
		hit
	}

	pub fn insert(&self, key: K, value: V) {
		let expires_at = self.clock.now().saturating_add(self.ttl_secs);
		self.data.insert(key, Entry { value, expires_at });
	}

	/// Returns the cached value or computes, stores and returns a new one.
	pub fn get_or_insert_with(&self, key: K, f: impl FnOnce() -> V) -> V {
		if let Some(value) = self.get(&key) {
			return value;
		}
		let value = f();
		self.insert(key, value.clone());
		value
	}

	/// Drops every expired entry and returns how many were removed.
	pub fn purge_expired(&self) -> usize {
		let now = self.clock.now();
		let before = self.data.len();
		self.data.retain(|_, entry| entry.expires_at > now);
		before.saturating_sub(self.data.len())
	}

	/// Number of stored entries, including ones not yet purged.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}

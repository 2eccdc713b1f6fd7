//! Serde helpers for configuration deserialization

use intent_types::AssetPair;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Custom deserializer for BTreeMap<AssetPair, T> that handles `BASE/QUOTE` string keys
pub fn deserialize_asset_pair_map<'de, D, T>(
	deserializer: D,
) -> Result<BTreeMap<AssetPair, T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	let map = BTreeMap::<String, T>::deserialize(deserializer)?;

	map.into_iter()
		.map(|(k, v)| {
			k.parse::<AssetPair>()
				.map(|pair| (pair, v))
				.map_err(serde::de::Error::custom)
		})
		.collect()
}

/// Custom serializer for BTreeMap<AssetPair, T> that writes `BASE/QUOTE` string keys
pub fn serialize_asset_pair_map<S, T>(
	map: &BTreeMap<AssetPair, T>,
	serializer: S,
) -> Result<S::Ok, S::Error>
where
	S: Serializer,
	T: Serialize,
{
	let string_map: BTreeMap<String, &T> = map.iter().map(|(k, v)| (k.to_string(), v)).collect();

	string_map.serialize(serializer)
}

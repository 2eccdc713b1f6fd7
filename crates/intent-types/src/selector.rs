//! Deserialization for enumerated selectors that never reject a request.
//!
//! Callers (often tool-calling models) send `null` for "not set" and
//! occasionally a number or object where a word belongs. `null` maps to the
//! selector's default; any other non-string maps to the default with a
//! warning; strings go through the selector's own `From<String>` fallback.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;
use tracing::warn;

enum RawSelector {
	Null,
	Text(String),
	/// Any other shape, rendered for the log line
	Other(String),
}

struct RawSelectorVisitor;

impl<'de> Visitor<'de> for RawSelectorVisitor {
	type Value = RawSelector;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a selector string")
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
		Ok(RawSelector::Text(v.to_string()))
	}

	fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
		Ok(RawSelector::Text(v))
	}

	fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
		Ok(RawSelector::Other(v.to_string()))
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
		Ok(RawSelector::Other(v.to_string()))
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
		Ok(RawSelector::Other(v.to_string()))
	}

	fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
		Ok(RawSelector::Other(v.to_string()))
	}

	fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(RawSelector::Null)
	}

	fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
		Ok(RawSelector::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
		deserializer.deserialize_any(RawSelectorVisitor)
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
		while seq.next_element::<IgnoredAny>()?.is_some() {}
		Ok(RawSelector::Other("array".to_string()))
	}

	fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
		while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
		Ok(RawSelector::Other("object".to_string()))
	}
}

/// Deserializes a selector from any value. `kind` names it in the warning.
pub(crate) fn deserialize_selector<'de, D, T>(deserializer: D, kind: &str) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + From<String> + fmt::Display,
{
	Ok(match deserializer.deserialize_any(RawSelectorVisitor)? {
		RawSelector::Null => T::default(),
		RawSelector::Text(raw) => T::from(raw),
		RawSelector::Other(shape) => {
			let fallback = T::default();
			warn!(value = %shape, %fallback, "Non-string {}, using default", kind);
			fallback
		}
	})
}

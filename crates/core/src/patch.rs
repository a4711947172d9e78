//! Helpers for partial-update payloads.
//!
//! Updates follow shallow-merge semantics: a field that is absent leaves the
//! stored value alone, a supplied field overwrites it, and supplied nested
//! objects replace the stored object wholesale. Optional fields use
//! `Option<Option<T>>` so an explicit `null` clears them.

use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};

/// Deserialize a present field (including `null`) as `Some(..)`.
///
/// Pair with `#[serde(default)]` so a missing field stays `None`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize an optional string-backed value, treating `""` as unset.
///
/// Query strings send an empty value for "any", e.g. `?category=`.
pub fn empty_as_none<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => T::deserialize(raw.into_deserializer()).map(Some),
        _ => Ok(None),
    }
}

/// Overwrite `target` when `value` was supplied.
pub fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "double_option")]
        note: Option<Option<String>>,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum Tone {
        Warm,
    }

    #[derive(Debug, Deserialize)]
    struct Query {
        #[serde(default, deserialize_with = "empty_as_none")]
        tone: Option<Tone>,
    }

    #[test]
    fn empty_string_is_unset() {
        let q: Query = serde_json::from_str(r#"{"tone":""}"#).unwrap();
        assert_eq!(q.tone, None);
        let q: Query = serde_json::from_str("{}").unwrap();
        assert_eq!(q.tone, None);
        let q: Query = serde_json::from_str(r#"{"tone":"warm"}"#).unwrap();
        assert_eq!(q.tone, Some(Tone::Warm));
        assert!(serde_json::from_str::<Query>(r#"{"tone":"cold"}"#).is_err());
    }

    #[test]
    fn missing_field_is_none() {
        let p: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(p.note, None);
    }

    #[test]
    fn null_field_clears() {
        let p: Payload = serde_json::from_str(r#"{"note":null}"#).unwrap();
        assert_eq!(p.note, Some(None));
    }

    #[test]
    fn present_field_sets() {
        let p: Payload = serde_json::from_str(r#"{"note":"hi"}"#).unwrap();
        assert_eq!(p.note, Some(Some("hi".to_string())));
    }

    #[test]
    fn merge_only_overwrites_supplied_values() {
        let mut n = 1;
        merge(&mut n, None);
        assert_eq!(n, 1);
        merge(&mut n, Some(5));
        assert_eq!(n, 5);
    }
}

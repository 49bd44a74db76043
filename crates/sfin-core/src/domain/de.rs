//! Lenient field decoders for the wire format's loose spots.
//!
//! Providers disagree on whether numeric fields arrive as JSON numbers or
//! strings, so the string-or-int rule is written once here and routed through
//! [`Value`] to avoid committing to a shape up front. Required fields stay
//! strict about everything except that rule; optional fields swallow any
//! mismatched shape as absence.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::value::Value;

/// Required Unix timestamp: a native integer, or a string parsed as one with
/// unparsable text falling back to 0. Any other shape is a decode failure.
pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Int(seconds) => Ok(seconds),
        Value::String(raw) => Ok(raw.trim().parse().unwrap_or(0)),
        _ => Err(serde::de::Error::custom(
            "expected a Unix timestamp as integer or string",
        )),
    }
}

/// Optional Unix timestamp: same string-or-int rule, but absence, mismatch,
/// and unparsable text all yield `None`.
pub(crate) fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Int(seconds)) => Some(seconds),
        Some(Value::String(raw)) => raw.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

pub(crate) fn optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(flag)) => Some(flag),
        _ => None,
    })
}

pub(crate) fn optional_extra<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(entries)) => Some(entries),
        _ => None,
    })
}

//! Type-erased JSON values for provider-specific transaction metadata.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A JSON value as found in the open-ended `extra` bag on transactions.
///
/// The variant set is closed; anything a provider can legally send maps onto
/// exactly one arm. Decoding keeps integers out of the floating-point arm:
/// `7` becomes [`Value::Int`], never `7.0`. Integers beyond the `i64` range
/// are the one lossy case and widen to [`Value::Double`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Floating-point values only; integers do not coerce.
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Double(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self::Object(entries)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Int(number) => serializer.serialize_i64(*number),
            Self::Double(number) => serializer.serialize_f64(*number),
            Self::String(text) => serializer.serialize_str(text),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_unit<E>(self) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E>(self, flag: bool) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(flag))
    }

    fn visit_i64<E>(self, number: i64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Int(number))
    }

    fn visit_u64<E>(self, number: u64) -> Result<Value, E>
    where
        E: de::Error,
    {
        if let Ok(signed) = i64::try_from(number) {
            Ok(Value::Int(signed))
        } else {
            Ok(Value::Double(number as f64))
        }
    }

    fn visit_f64<E>(self, number: f64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Double(number))
    }

    fn visit_str<E>(self, text: &str) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(text.to_owned()))
    }

    fn visit_string<E>(self, text: String) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(text))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry()? {
            entries.insert(key, value);
        }
        Ok(Value::Object(entries))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_json_numbers_stay_integers() {
        let value: Value = serde_json::from_str("7").expect("valid JSON");
        assert_eq!(value, Value::Int(7));

        let value: Value = serde_json::from_str("-3").expect("valid JSON");
        assert_eq!(value, Value::Int(-3));
    }

    #[test]
    fn fractional_json_numbers_become_doubles() {
        let value: Value = serde_json::from_str("7.5").expect("valid JSON");
        assert_eq!(value, Value::Double(7.5));
    }

    #[test]
    fn integers_beyond_i64_widen_to_double() {
        let value: Value = serde_json::from_str("9223372036854775808").expect("valid JSON");
        assert_eq!(value, Value::Double(9_223_372_036_854_775_808.0));
    }

    #[test]
    fn accessors_are_checked_casts() {
        let value = Value::Int(7);
        assert_eq!(value.as_i64(), Some(7));
        assert_eq!(value.as_f64(), None);
        assert_eq!(value.as_str(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn integers_serialize_without_a_fraction() {
        let text = serde_json::to_string(&Value::Int(7)).expect("serializable");
        assert_eq!(text, "7");
    }

    #[test]
    fn nested_mixed_structure_round_trips() {
        let original = Value::Object(BTreeMap::from([
            (String::from("id"), Value::from("tx-1")),
            (String::from("score"), Value::from(42i64)),
            (String::from("ratio"), Value::from(0.25)),
            (String::from("archived"), Value::from(false)),
            (String::from("note"), Value::Null),
            (
                String::from("tags"),
                Value::from(vec![Value::from("a"), Value::from(1i64), Value::Null]),
            ),
            (
                String::from("nested"),
                Value::Object(BTreeMap::from([(String::from("deep"), Value::from(true))])),
            ),
        ]));

        let text = serde_json::to_string(&original).expect("serializable");
        let decoded: Value = serde_json::from_str(&text).expect("round-trips");
        assert_eq!(decoded, original);
    }
}

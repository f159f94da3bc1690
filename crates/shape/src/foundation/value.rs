//! Untyped input model
//!
//! [`Value`] is what every validator receives. It mirrors the dynamic values a
//! host application typically holds before they are given a precise type:
//! a "missing" sentinel distinct from `null`, floating-point numbers,
//! arbitrary-size integers, dates, ordered sequences, sets and keyed records.
//!
//! [`ToValue`] goes the other way: it turns a validator's typed output back
//! into a [`Value`] so it can be re-validated, compared canonically, or stored
//! inside a heterogeneous container.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::foundation::stringify::{format_number, stringify};

// ============================================================================
// VALUE
// ============================================================================

/// An untyped, in-memory value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The "missing" sentinel: an absent property or argument.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Double-precision number.
    Number(f64),
    /// Arbitrary-size integer (bounded to `i128`).
    BigInt(i128),
    /// UTF-8 string.
    String(String),
    /// Instant in time.
    Date(DateTime<Utc>),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Collection of unique members in insertion order.
    ///
    /// Build it with [`Value::set`] to get canonical de-duplication.
    Set(Vec<Value>),
    /// Keyed mapping in insertion order.
    Record(IndexMap<String, Value>),
}

impl Value {
    /// Creates a string value.
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates an array value.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Creates a set value, dropping members canonically equal to an earlier one.
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut seen = std::collections::HashSet::new();
        let members = items
            .into_iter()
            .map(Into::into)
            .filter(|member| seen.insert(stringify(member)))
            .collect();
        Self::Set(members)
    }

    /// Creates a record value from key/value pairs.
    pub fn record<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Record(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Number(_) => ValueKind::Number,
            Self::BigInt(_) => ValueKind::BigInt,
            Self::String(_) => ValueKind::String,
            Self::Date(_) => ValueKind::Date,
            Self::Array(_) => ValueKind::Array,
            Self::Set(_) => ValueKind::Set,
            Self::Record(_) => ValueKind::Record,
        }
    }

    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true` for both `Null` and `Undefined`.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Record(map) => Some(map),
            _ => None,
        }
    }

    /// Equality where `NaN` equals `NaN` and everything else uses `==`.
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => self == other,
        }
    }
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Lightweight classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Date,
    Array,
    Set,
    Record,
}

impl ValueKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::String => "string",
            Self::Date => "date",
            Self::Array => "array",
            Self::Set => "set",
            Self::Record => "record",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// DISPLAY & SERIALIZE
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::BigInt(n) => write!(f, "{n}n"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Date(d) => f.write_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Set(members) => {
                f.write_str("Set {")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {member}")?;
                }
                f.write_str(" }")
            }
            Self::Record(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {key}: {value}")?;
                }
                f.write_str(" }")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Self::Number(n) => serializer.serialize_str(&format_number(*n)),
            Self::BigInt(n) => serializer.serialize_str(&format!("{n}n")),
            Self::String(s) => serializer.serialize_str(s),
            Self::Date(d) => {
                serializer.serialize_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Self::Array(items) | Self::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Record(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

// ============================================================================
// CONVERSIONS INTO VALUE
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Self::BigInt(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::Record(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Record(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

// ============================================================================
// TO VALUE
// ============================================================================

/// Converts a typed validator output back into a [`Value`].
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Number(*self)
    }
}

impl ToValue for i128 {
    fn to_value(&self) -> Value {
        Value::BigInt(*self)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

/// `None` maps back to the missing sentinel.
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Undefined, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for IndexMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Record(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_drops_canonical_duplicates() {
        let set = Value::set([Value::from("a"), Value::from("a"), Value::from(1)]);
        assert_eq!(set, Value::Set(vec![Value::from("a"), Value::from(1)]));
    }

    #[test]
    fn set_keeps_string_and_number_apart() {
        let set = Value::set([Value::from("1"), Value::from(1)]);
        assert_eq!(set, Value::Set(vec![Value::from("1"), Value::from(1)]));
    }

    #[test]
    fn converts_from_json() {
        let value = Value::from(json!({ "name": "ada", "tags": ["x", 1], "gone": null }));
        let record = value.as_record().unwrap();
        assert_eq!(record["name"], Value::from("ada"));
        assert_eq!(record["tags"], Value::array([Value::from("x"), Value::from(1)]));
        assert_eq!(record["gone"], Value::Null);
    }

    #[test]
    fn same_value_treats_nan_as_equal() {
        assert!(Value::Number(f64::NAN).same_value(&Value::Number(f64::NAN)));
        assert!(!Value::Number(f64::NAN).same_value(&Value::Number(1.0)));
        assert!(Value::from("x").same_value(&Value::from("x")));
    }

    #[test]
    fn display_renders_nested_values() {
        let value = Value::array([Value::from(1), Value::from("b"), Value::BigInt(7)]);
        assert_eq!(value.to_string(), r#"[1, "b", 7n]"#);
    }

    #[test]
    fn serializes_to_json() {
        let value = Value::record([("big", Value::BigInt(12)), ("n", Value::from(1.5))]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({ "big": "12n", "n": 1.5 })
        );
    }

    #[test]
    fn option_none_maps_to_undefined() {
        let missing: Option<String> = None;
        assert_eq!(missing.to_value(), Value::Undefined);
        assert_eq!(Some(2.0).to_value(), Value::Number(2.0));
    }
}

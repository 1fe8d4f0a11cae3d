use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, de};
use serde_json::{Number, Value as JsonValue};

use crate::Nullable;

/// The dynamic kind of a generic JSON value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Bool(_) => JsonKind::Bool,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl Display for JsonKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Deserialize any self-describing input into a generic JSON value, then hand it to the wrapper.
///
/// Syntax errors come straight from the underlying deserializer; kind mismatches are reported through
/// [`de::Error::custom`].
pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Nullable,
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    T::from_json_value(&value).map_err(de::Error::custom)
}

/// JSON numbers narrow toward zero through a floating-point intermediate.
pub(crate) fn narrow_i32(n: &Number) -> i32 {
    n.as_f64().unwrap_or_default() as i32
}

/// Integral numbers that fit are taken exactly so every `i64` survives a round trip.
pub(crate) fn narrow_i64(n: &Number) -> i64 {
    match n.as_i64() {
        Some(v) => v,
        None => n.as_f64().unwrap_or_default() as i64,
    }
}

use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::{
    Nullable, Value,
    decode::Decode,
    encode::Encode,
    error::DecodeError,
    nullable::{data_type_mismatch, json_mismatch},
};

/// A [`String`] where `""` is null.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Str(pub String);

wrapper!(Str, String);

impl From<&str> for Str {
    fn from(value: &str) -> Self {
        Str(value.to_owned())
    }
}

impl Nullable for Str {
    const TYPE_NAME: &'static str = "nnz::Str";
    const NULL: Self = Str(String::new());

    fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    fn from_json_value(value: &JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Null => Ok(Self::NULL),
            JsonValue::String(v) => Ok(Str(v.clone())),
            other => Err(json_mismatch::<Self>(other)),
        }
    }
}

impl Encode for Str {
    fn encode(self) -> Value {
        if self.is_null() {
            Value::Null
        } else {
            Value::Text(self.0)
        }
    }
}

impl Encode for &Str {
    fn encode(self) -> Value {
        self.clone().encode()
    }
}

impl<'r> Decode<'r> for Str {
    fn decode(value: &'r Value) -> std::result::Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::NULL),
            Value::Text(_) | Value::Blob(_) => value.text().map(|v| Str(v.to_owned())),
            other => Err(data_type_mismatch::<Self>(other)),
        }
    }
}

impl Serialize for Str {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_null() {
            serializer.serialize_none()
        } else {
            serializer.serialize_str(&self.0)
        }
    }
}

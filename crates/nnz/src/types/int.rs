use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::{
    Nullable, Value,
    decode::Decode,
    encode::{Encode, PrimitiveEncode},
    error::DecodeError,
    json::{narrow_i32, narrow_i64},
    nullable::{data_type_mismatch, json_mismatch},
};

/// An `i32` where `0` is null.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Int(pub i32);

wrapper!(Int, i32);

impl Nullable for Int {
    const TYPE_NAME: &'static str = "nnz::Int";
    const NULL: Self = Int(0);

    fn from_json_value(value: &JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Null => Ok(Self::NULL),
            JsonValue::Number(n) => Ok(Int(narrow_i32(n))),
            other => Err(json_mismatch::<Self>(other)),
        }
    }
}

impl Encode for Int {
    fn encode(self) -> Value {
        if self.is_null() {
            Value::Null
        } else {
            Value::Integer(self.0.into())
        }
    }
}

impl PrimitiveEncode for Int {}

impl<'r> Decode<'r> for Int {
    fn decode(value: &'r Value) -> std::result::Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::NULL),
            Value::Integer(_) => Ok(Int(value.int()?)),
            other => Err(data_type_mismatch::<Self>(other)),
        }
    }
}

impl Serialize for Int {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_null() {
            serializer.serialize_none()
        } else {
            serializer.serialize_i32(self.0)
        }
    }
}

/// An `i64` where `0` is null.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Int64(pub i64);

wrapper!(Int64, i64);

impl Nullable for Int64 {
    const TYPE_NAME: &'static str = "nnz::Int64";
    const NULL: Self = Int64(0);

    fn from_json_value(value: &JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Null => Ok(Self::NULL),
            JsonValue::Number(n) => Ok(Int64(narrow_i64(n))),
            other => Err(json_mismatch::<Self>(other)),
        }
    }
}

impl Encode for Int64 {
    fn encode(self) -> Value {
        if self.is_null() {
            Value::Null
        } else {
            Value::Integer(self.0)
        }
    }
}

impl PrimitiveEncode for Int64 {}

impl<'r> Decode<'r> for Int64 {
    fn decode(value: &'r Value) -> std::result::Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::NULL),
            Value::Integer(v) => Ok(Int64(*v)),
            other => Err(data_type_mismatch::<Self>(other)),
        }
    }
}

impl Serialize for Int64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_null() {
            serializer.serialize_none()
        } else {
            serializer.serialize_i64(self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_null() {
        assert_eq!(Int(0).encode(), Value::Null);
        assert_eq!(Int64(0).encode(), Value::Null);
        assert_eq!(serde_json::to_string(&Int(0)).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Int64(0)).unwrap(), "null");
    }

    #[test]
    fn test_reference_encode() {
        let value = Int(42);
        assert_eq!((&value).encode(), Value::Integer(42));

        let value = Int64(-9358295312);
        assert_eq!((&value).encode(), Value::Integer(-9358295312));
    }

    #[test]
    fn test_scan_narrowing() {
        assert_eq!(Int::decode(&Value::Integer(94101)).unwrap(), Int(94101));
        assert!(matches!(
            Int::decode(&Value::Integer(9358295312)),
            Err(DecodeError::Conversion(_))
        ));
        assert_eq!(
            Int64::decode(&Value::Integer(9358295312)).unwrap(),
            Int64(9358295312)
        );
        assert!(matches!(
            Int64::decode(&Value::Double(1.0)),
            Err(DecodeError::DataType { target: "nnz::Int64", .. })
        ));
    }

    #[test]
    fn test_json_narrowing() {
        assert_eq!(serde_json::from_str::<Int>("42").unwrap(), Int(42));
        assert_eq!(serde_json::from_str::<Int>("42.9").unwrap(), Int(42));
        assert_eq!(serde_json::from_str::<Int>("-3.5").unwrap(), Int(-3));
        assert_eq!(serde_json::from_str::<Int>("1e10").unwrap(), Int(i32::MAX));
        assert_eq!(
            serde_json::from_str::<Int64>("9007199254740993").unwrap(),
            Int64(9007199254740993)
        );
        assert_eq!(serde_json::from_str::<Int64>("1.5e3").unwrap(), Int64(1500));
    }

    #[test]
    fn test_json_mismatch() {
        let err = serde_json::from_str::<Int>("\"42\"").unwrap_err();
        assert!(err.is_data());
        assert!(
            err.to_string()
                .starts_with("cannot unmarshal JSON string into nnz::Int")
        );

        let err = Int64::from_json_value(&serde_json::json!([1])).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::JsonKind {
                target: "nnz::Int64",
                found: crate::JsonKind::Array
            }
        ));
    }
}

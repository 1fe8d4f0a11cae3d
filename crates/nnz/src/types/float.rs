use serde::{Serialize, Serializer, ser};
use serde_json::Value as JsonValue;

use crate::{
    Nullable, Value,
    decode::Decode,
    encode::{Encode, PrimitiveEncode},
    error::DecodeError,
    nullable::{data_type_mismatch, json_mismatch},
};

/// An `f64` where `0.0` (and `-0.0`) is null.
///
/// `NaN` is not equal to zero, so it is a present value. It has no JSON representation and fails to serialize.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Float64(pub f64);

wrapper!(Float64, f64);

impl Nullable for Float64 {
    const TYPE_NAME: &'static str = "nnz::Float64";
    const NULL: Self = Float64(0.0);

    fn from_json_value(value: &JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Null => Ok(Self::NULL),
            JsonValue::Number(n) => Ok(Float64(n.as_f64().unwrap_or_default())),
            other => Err(json_mismatch::<Self>(other)),
        }
    }
}

impl Encode for Float64 {
    fn encode(self) -> Value {
        if self.is_null() {
            Value::Null
        } else {
            Value::Double(self.0)
        }
    }
}

impl PrimitiveEncode for Float64 {}

impl<'r> Decode<'r> for Float64 {
    fn decode(value: &'r Value) -> std::result::Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::NULL),
            Value::Double(v) => Ok(Float64(*v)),
            other => Err(data_type_mismatch::<Self>(other)),
        }
    }
}

impl Serialize for Float64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_null() {
            serializer.serialize_none()
        } else if !self.0.is_finite() {
            Err(ser::Error::custom(format!(
                "unsupported value for {}: {}",
                Self::TYPE_NAME,
                self.0
            )))
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::E;

    use super::*;

    #[test]
    fn test_negative_zero_is_null() {
        assert!(Float64(-0.0).is_null());
        assert_eq!(Float64(-0.0).encode(), Value::Null);
        assert!(!Float64(f64::NAN).is_null());
    }

    #[test]
    fn test_reference_encode() {
        let value = Float64(E);
        if let Value::Double(encoded) = (&value).encode() {
            assert!((encoded - E).abs() < f64::EPSILON);
        } else {
            panic!("Expected Double value");
        }
    }

    #[test]
    fn test_scan_is_strict() {
        assert_eq!(Float64::decode(&Value::Double(5.5)).unwrap(), Float64(5.5));
        assert!(matches!(
            Float64::decode(&Value::Integer(5)),
            Err(DecodeError::DataType { .. })
        ));
    }

    #[test]
    fn test_json() {
        assert_eq!(serde_json::to_string(&Float64(0.0)).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Float64(939399419.1225182)).unwrap(),
            "939399419.1225182"
        );
        assert_eq!(serde_json::from_str::<Float64>("7").unwrap(), Float64(7.0));
        assert!(serde_json::to_string(&Float64(f64::NAN)).is_err());
        assert!(serde_json::to_string(&Float64(f64::INFINITY)).is_err());
    }
}

use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::{
    Nullable, Value,
    decode::Decode,
    encode::{Encode, PrimitiveEncode},
    error::DecodeError,
    nullable::{data_type_mismatch, json_mismatch},
};

/// A `bool` where `false` is null.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Bool(pub bool);

wrapper!(Bool, bool);

impl Nullable for Bool {
    const TYPE_NAME: &'static str = "nnz::Bool";
    const NULL: Self = Bool(false);

    fn from_json_value(value: &JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Null => Ok(Self::NULL),
            JsonValue::Bool(v) => Ok(Bool(*v)),
            other => Err(json_mismatch::<Self>(other)),
        }
    }
}

impl Encode for Bool {
    fn encode(self) -> Value {
        if self.is_null() {
            Value::Null
        } else {
            Value::Bool(self.0)
        }
    }
}

impl PrimitiveEncode for Bool {}

impl<'r> Decode<'r> for Bool {
    fn decode(value: &'r Value) -> std::result::Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::NULL),
            Value::Bool(v) => Ok(Bool(*v)),
            other => Err(data_type_mismatch::<Self>(other)),
        }
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_null() {
            serializer.serialize_none()
        } else {
            serializer.serialize_bool(self.0)
        }
    }
}

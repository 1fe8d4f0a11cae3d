use serde::de::{self, DeserializeOwned};
use serde_json::Value as JsonValue;
use tracing::trace;

use crate::{Decode, DecodeError, Encode, Value};

/// Behaviour shared by every zero-as-null wrapper.
///
/// A wrapper's zero value is its only null representation: [`NULL`](Nullable::NULL) is what inbound nulls
/// decode to, and any value equal to it encodes as a null.
///
/// The in-place entry points ([`scan`](Nullable::scan) and [`unmarshal_json`](Nullable::unmarshal_json)) leave
/// the target untouched when decoding fails.
pub trait Nullable: Sized + PartialEq + Encode + DeserializeOwned + for<'r> Decode<'r> {
    /// Name used in mismatch errors.
    const TYPE_NAME: &'static str;

    /// The zero value, standing in for null.
    const NULL: Self;

    /// Indicates whether the value is null, i.e. equal to the zero value.
    fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Convert a generic JSON value. JSON `null` yields [`NULL`](Nullable::NULL).
    fn from_json_value(value: &JsonValue) -> Result<Self, DecodeError>;

    /// Decode a driver value into `self`.
    fn scan(&mut self, value: &Value) -> Result<(), DecodeError> {
        let decoded = Self::decode(value)?;
        if value.is_null() {
            trace!(target: "nnz", ty = Self::TYPE_NAME, "scanned NULL as zero value");
        }
        *self = decoded;
        Ok(())
    }

    /// Parse JSON text into `self`. Syntax errors are returned exactly as `serde_json` reports them.
    fn unmarshal_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let value: JsonValue = serde_json::from_str(json)?;
        let decoded = Self::from_json_value(&value).map_err(<serde_json::Error as de::Error>::custom)?;
        if value.is_null() {
            trace!(target: "nnz", ty = Self::TYPE_NAME, "unmarshaled JSON as zero value");
        }
        *self = decoded;
        Ok(())
    }
}

/// Error for a JSON value of the wrong kind.
pub(crate) fn json_mismatch<T: Nullable>(value: &JsonValue) -> DecodeError {
    DecodeError::JsonKind {
        target: T::TYPE_NAME,
        found: crate::JsonKind::of(value),
    }
}

/// Error for a driver value of the wrong shape.
pub(crate) fn data_type_mismatch<T: Nullable>(value: &Value) -> DecodeError {
    DecodeError::DataType {
        target: T::TYPE_NAME,
        found: value.data_type(),
    }
}

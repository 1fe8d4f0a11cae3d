use std::fmt::{self, Display, Formatter};
use std::str::from_utf8;

use time::OffsetDateTime;

use crate::error::DecodeError;

/// The dynamic kind of a [`Value`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DataType {
    Null,
    Bool,
    Integer,
    Double,
    Text,
    Blob,
    Timestamp,
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl DataType {
    pub fn is_null(&self) -> bool {
        matches!(self, DataType::Null)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Null => "NULL",
            DataType::Bool => "BOOLEAN",
            DataType::Integer => "INTEGER",
            DataType::Double => "REAL",
            DataType::Text => "TEXT",
            DataType::Blob => "BLOB",
            DataType::Timestamp => "TIMESTAMP",
        }
    }
}

/// A value exchanged with a database driver.
///
/// This is the closed set of shapes a driver hands to [`Decode`](crate::Decode) and accepts back from
/// [`Encode`](crate::Encode). `Null` is the driver's out-of-band "no value" marker.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
    Timestamp(OffsetDateTime),
}

impl Value {
    pub fn boolean(&self) -> std::result::Result<bool, DecodeError> {
        match self {
            Value::Bool(v) => Ok(*v),
            _ => Err(DecodeError::Conversion("not a boolean".into())),
        }
    }

    pub fn int(&self) -> std::result::Result<i32, DecodeError> {
        Ok(i32::try_from(self.int64()?)?)
    }

    pub fn int64(&self) -> std::result::Result<i64, DecodeError> {
        match self {
            Value::Integer(v) => Ok(*v),
            _ => Err(DecodeError::Conversion("not an integer".into())),
        }
    }

    pub fn double(&self) -> std::result::Result<f64, DecodeError> {
        match self {
            Value::Double(v) => Ok(*v),
            _ => Err(DecodeError::Conversion("not a float".into())),
        }
    }

    /// Text content of a `Text` value, or of a `Blob` holding valid UTF-8.
    pub fn text(&self) -> std::result::Result<&str, DecodeError> {
        match self {
            Value::Text(v) => Ok(v),
            Value::Blob(v) => from_utf8(v).map_err(|e| DecodeError::Conversion(e.to_string())),
            _ => Err(DecodeError::Conversion("not text".into())),
        }
    }

    pub fn timestamp(&self) -> std::result::Result<OffsetDateTime, DecodeError> {
        match self {
            Value::Timestamp(v) => Ok(*v),
            _ => Err(DecodeError::Conversion("not a timestamp".into())),
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Value::Null => DataType::Null,
            Value::Bool(_) => DataType::Bool,
            Value::Integer(_) => DataType::Integer,
            Value::Double(_) => DataType::Double,
            Value::Text(_) => DataType::Text,
            Value::Blob(_) => DataType::Blob,
            Value::Timestamp(_) => DataType::Timestamp,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

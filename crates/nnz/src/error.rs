//! Types for working with errors produced by nnz.

use std::num::TryFromIntError;

use crate::{DataType, JsonKind};

/// A specialized `Result` type for record-level operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A failure to turn an inbound value into a wrapper.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The driver value's shape is not accepted by the target type.
    #[error("cannot scan {found} into {target}")]
    DataType {
        target: &'static str,
        found: DataType,
    },

    /// The JSON value's kind is not accepted by the target type.
    #[error("cannot unmarshal JSON {found} into {target}")]
    JsonKind {
        target: &'static str,
        found: JsonKind,
    },

    #[error("decoding conversion error: {0}")]
    Conversion(String),

    /// Malformed binary timestamp.
    #[error("invalid binary timestamp: {0}")]
    Binary(String),
}

impl From<TryFromIntError> for DecodeError {
    fn from(err: TryFromIntError) -> Self {
        DecodeError::Conversion(err.to_string())
    }
}

impl From<String> for DecodeError {
    fn from(err: String) -> Self {
        DecodeError::Conversion(err)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("encoding conversion error: {0}")]
    Conversion(String),
}

/// Errors raised while reading typed values out of a [`Values`](crate::Values) record.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Column index was out of bounds.
    #[error("column index out of bounds: the len is {len}, but the index is {index}")]
    ColumnIndexOutOfBounds { index: usize, len: usize },

    /// No column found for the given name.
    #[error("no column found for name: {0}")]
    ColumnNotFound(String),

    /// Error occurred while decoding a value from a specific column.
    #[error("error occurred while decoding column {index}: {source}")]
    ColumnDecode {
        index: String,

        #[source]
        source: DecodeError,
    },

    /// A value failed to decode outside of any column.
    #[error("error occurred while decoding: {0}")]
    Decode(#[from] DecodeError),
}

//! Primitive wrappers whose zero value is `NULL`.
//!
//! Each wrapper in [`types`] holds a single primitive. Its zero value (`false`, `0`, `0.0`, `""`, or
//! [`types::time::ZERO`]) is encoded as the database null sentinel and as JSON `null`, and both of those decode
//! back to the zero value. Every other value round-trips unchanged.
//!
//! ```
//! use nnz::{Decode, Encode, Value, types::Int};
//!
//! assert_eq!(Int(0).encode(), Value::Null);
//! assert_eq!(Int(42).encode(), Value::Integer(42));
//! assert_eq!(Int::decode(&Value::Null).unwrap(), Int(0));
//! assert_eq!(serde_json::to_string(&Int(0)).unwrap(), "null");
//! ```

mod json;
mod nullable;
mod value;
mod values;

pub mod decode;
pub mod encode;
mod error;
pub mod types;

pub use crate::{
    decode::Decode,
    encode::Encode,
    error::{DecodeError, EncodeError, Error, Result},
    json::JsonKind,
    nullable::Nullable,
    value::{DataType, Value},
    values::Values,
};

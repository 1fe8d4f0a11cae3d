//! Provides [`Encode`] for encoding values for the database.
use crate::Value;

/// Encode a single value to be sent to the database.
pub trait Encode {
    /// Converts `self` into the driver representation, consuming the value. A wrapper holding its zero value
    /// encodes as [`Value::Null`].
    fn encode(self) -> Value
    where
        Self: Sized;
}

/// Marker trait for wrappers that are cheap to copy and can be encoded by reference.
pub trait PrimitiveEncode: Encode + Copy + 'static {}

impl<T> Encode for &T
where
    T: PrimitiveEncode,
{
    fn encode(self) -> Value {
        (*self).encode()
    }
}

//! Zero-as-null wrappers around primitive types.
//!
//! # Types
//!
//! | Wrapper     | Primitive               | Driver value(s) in       | Driver value out | JSON                |
//! |-------------|-------------------------|--------------------------|------------------|---------------------|
//! | [`Bool`]    | `bool`                  | `Bool`                   | `Bool`           | boolean             |
//! | [`Int`]     | `i32`                   | `Integer`                | `Integer`        | number              |
//! | [`Int64`]   | `i64`                   | `Integer`                | `Integer`        | number              |
//! | [`Float64`] | `f64`                   | `Double`                 | `Double`         | number              |
//! | [`Str`]     | [`String`]              | `Text`, `Blob` (UTF-8)   | `Text`           | string              |
//! | [`Time`]    | `time::OffsetDateTime`  | `Timestamp`              | `Timestamp`      | RFC 3339 string     |
//!
//! Every wrapper also accepts [`Value::Null`](crate::Value::Null) and JSON `null`, both of which decode to the
//! zero value. The zero value is in turn always encoded as a null.
//!
//! #### Note: Zero is Null
//!
//! There is no separate "is null" flag. An [`Int`] holding `0` is indistinguishable from one that was read from a
//! `NULL` column, and a [`Str`] holding `""` is indistinguishable from a missing string. Use `Option<T>` where that
//! difference matters.
//!
//! #### Note: Integer narrowing
//!
//! [`Int`] scans a 64-bit driver integer with a checked conversion, so values outside the `i32` range are a
//! decode error. JSON numbers are narrowed toward zero instead, saturating at the bounds of the target type.

/// Implements the conversions every wrapper shares with its primitive.
macro_rules! wrapper {
    ($wrapper:ident, $inner:ty) => {
        impl From<$inner> for $wrapper {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$wrapper> for $inner {
            fn from(value: $wrapper) -> Self {
                value.0
            }
        }

        impl std::ops::Deref for $wrapper {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $wrapper {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl<'de> serde::Deserialize<'de> for $wrapper {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                crate::json::deserialize(deserializer)
            }
        }
    };
}

pub mod time;

mod bool;
mod float;
mod int;
mod str;

pub use self::{
    bool::Bool,
    float::Float64,
    int::{Int, Int64},
    str::Str,
    time::Time,
};

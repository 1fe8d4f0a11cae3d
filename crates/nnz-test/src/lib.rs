use std::fmt::Debug;

use nnz::{Nullable, Value};
use serde::Serialize;

pub use paste;

/// Encode through both paths and check that a null wrapper produces both null sentinels and decodes back.
pub fn assert_null_contract<T>() -> anyhow::Result<()>
where
    T: Nullable + Clone + Debug + Serialize,
{
    assert_eq!(T::NULL.encode(), Value::Null, "{} db null", T::TYPE_NAME);
    assert_eq!(serde_json::to_string(&T::NULL)?, "null", "{} json null", T::TYPE_NAME);
    assert_eq!(T::decode(&Value::Null)?, T::NULL, "{} scan null", T::TYPE_NAME);
    assert_eq!(
        serde_json::from_str::<T>("null")?,
        T::NULL,
        "{} unmarshal null",
        T::TYPE_NAME
    );
    Ok(())
}

/// Round-trip a present value through the driver value and JSON paths, returning the JSON text.
pub fn round_trip<T>(value: &T) -> anyhow::Result<String>
where
    T: Nullable + Clone + Debug + Serialize,
{
    assert!(!value.is_null(), "{value:?} is a null value");

    let encoded = value.clone().encode();
    assert!(!encoded.is_null(), "{value:?} encoded as NULL");
    let scanned = T::decode(&encoded)?;
    assert_eq!(
        &scanned, value,
        "[1] DB value mismatch; given value: {value:?}\nencoded: {encoded:?}"
    );

    let json = serde_json::to_string(value)?;
    let unmarshaled: T = serde_json::from_str(&json)?;
    assert_eq!(
        &unmarshaled, value,
        "[2] JSON value mismatch; given value: {value:?}\nencoded: {json}"
    );

    Ok(json)
}

// Test the null contract of a wrapper and round trips of present values with their expected JSON text
#[macro_export]
macro_rules! test_wrapper {
    ($name:ident<$ty:ty>($($value:expr => $json:literal),+ $(,)?)) => {
        $crate::paste::item! {
            #[test]
            fn [< test_null_ $name >] () -> anyhow::Result<()> {
                $crate::assert_null_contract::<$ty>()
            }

            #[test]
            fn [< test_round_trip_ $name >] () -> anyhow::Result<()> {
                $(
                    let value: $ty = $value;
                    let json = $crate::round_trip(&value)?;
                    assert_eq!(json, $json, "JSON text for {:?}", value);
                )+
                Ok(())
            }
        }
    };
}

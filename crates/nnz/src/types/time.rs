//! The timestamp wrapper and its text and binary encodings.
use std::str::FromStr;

use bytes::{Buf, BufMut};
use serde::{Serialize, Serializer, ser};
use serde_json::Value as JsonValue;
use time::format_description::well_known::Rfc3339;
use time::macros::datetime;
use tracing::trace;

use crate::{
    Nullable, Value,
    decode::Decode,
    encode::{Encode, PrimitiveEncode},
    error::{DecodeError, EncodeError},
    nullable::{data_type_mismatch, json_mismatch},
};

pub use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// The zero timestamp, `0001-01-01T00:00:00Z`. Any [`Time`] at this instant is null.
pub const ZERO: OffsetDateTime = datetime!(1-01-01 0:00 UTC);

/// An [`OffsetDateTime`] where [`ZERO`] is null.
///
/// Equality is by instant, so `ZERO` expressed in any offset is also null. On top of the shared wrapper contract,
/// `Time` parses RFC 3339 text ([`Time::from_text`]) and has a fixed binary layout ([`Time::to_binary`]). The
/// binary path does not substitute nulls: `ZERO` is written and read back like any other instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Time(pub OffsetDateTime);

wrapper!(Time, OffsetDateTime);

impl Default for Time {
    fn default() -> Self {
        Self::NULL
    }
}

impl Nullable for Time {
    const TYPE_NAME: &'static str = "nnz::Time";
    const NULL: Self = Time(ZERO);

    fn from_json_value(value: &JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Null => Ok(Self::NULL),
            JsonValue::String(v) => Time::from_text(v).map_err(|e| {
                DecodeError::from(format!("cannot parse {v:?} as {}: {e}", Self::TYPE_NAME))
            }),
            other => Err(json_mismatch::<Self>(other)),
        }
    }
}

impl Encode for Time {
    fn encode(self) -> Value {
        if self.is_null() {
            Value::Null
        } else {
            Value::Timestamp(self.0)
        }
    }
}

impl PrimitiveEncode for Time {}

impl<'r> Decode<'r> for Time {
    fn decode(value: &'r Value) -> std::result::Result<Self, DecodeError> {
        match value {
            Value::Null => Ok(Self::NULL),
            Value::Timestamp(v) => Ok(Time(*v)),
            other => Err(data_type_mismatch::<Self>(other)),
        }
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_null() {
            return serializer.serialize_none();
        }
        match self.0.format(&Rfc3339) {
            Ok(formatted) => serializer.serialize_str(&formatted),
            Err(e) => Err(ser::Error::custom(format!(
                "failed to format {}: {e}",
                Self::TYPE_NAME
            ))),
        }
    }
}

impl FromStr for Time {
    type Err = time::error::Parse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Time::from_text(s)
    }
}

impl Time {
    /// Parse RFC 3339 text. Empty text is [`ZERO`].
    pub fn from_text(text: &str) -> Result<Self, time::error::Parse> {
        if text.is_empty() {
            return Ok(Self::NULL);
        }
        OffsetDateTime::parse(text, &Rfc3339).map(Time)
    }

    /// Parse RFC 3339 text into `self`, leaving it untouched on failure.
    pub fn unmarshal_text(&mut self, text: &str) -> Result<(), time::error::Parse> {
        let parsed = Time::from_text(text)?;
        if text.is_empty() {
            trace!(target: "nnz", ty = Self::TYPE_NAME, "empty text as zero value");
        }
        *self = parsed;
        Ok(())
    }

    /// Encode to the fixed binary layout.
    ///
    /// A UTC offset is written as `-1` minutes. An offset that truncates to exactly -1 minute collides with that
    /// marker and cannot be encoded.
    pub fn to_binary(&self) -> Result<Vec<u8>, EncodeError> {
        let offset = self.0.offset();
        let mut version = binary::V1;
        let mut offset_sec = 0i8;
        let offset_min = if offset.is_utc() {
            binary::UTC_MARKER
        } else {
            let whole = offset.whole_seconds();
            if whole % 60 != 0 {
                version = binary::V2;
                offset_sec = (whole % 60) as i8;
            }
            let minutes = whole / 60;
            if minutes == i32::from(binary::UTC_MARKER) {
                return Err(EncodeError::Conversion(format!(
                    "unexpected zone offset {offset} for {}",
                    Self::TYPE_NAME
                )));
            }
            minutes as i16
        };

        let mut buf = Vec::with_capacity(binary::V2_LEN);
        buf.put_u8(version);
        buf.put_i64(self.0.unix_timestamp() + binary::UNIX_TO_INTERNAL);
        buf.put_i32(self.0.nanosecond() as i32);
        buf.put_i16(offset_min);
        if version == binary::V2 {
            buf.put_i8(offset_sec);
        }
        Ok(buf)
    }

    /// Decode from the layout written by [`Time::to_binary`].
    pub fn from_binary(data: &[u8]) -> Result<Self, DecodeError> {
        let mut buf = data;
        if !buf.has_remaining() {
            return Err(DecodeError::Binary("no data".into()));
        }
        let version = buf.get_u8();
        let len = match version {
            binary::V1 => binary::V1_LEN,
            binary::V2 => binary::V2_LEN,
            v => return Err(DecodeError::Binary(format!("unsupported version {v}"))),
        };
        if data.len() != len {
            return Err(DecodeError::Binary(format!(
                "invalid length {} for version {version}",
                data.len()
            )));
        }

        let sec = buf.get_i64();
        let nsec = buf.get_i32();
        let mut offset = i32::from(buf.get_i16()) * 60;
        if version == binary::V2 {
            offset += i32::from(buf.get_i8());
        }

        let nanos = u32::try_from(nsec)
            .ok()
            .filter(|n| *n < 1_000_000_000)
            .ok_or_else(|| DecodeError::Binary(format!("nanoseconds out of range: {nsec}")))?;
        let offset = if offset == i32::from(binary::UTC_MARKER) * 60 {
            UtcOffset::UTC
        } else {
            UtcOffset::from_whole_seconds(offset).map_err(|e| DecodeError::Binary(e.to_string()))?
        };

        let unix = sec
            .checked_sub(binary::UNIX_TO_INTERNAL)
            .ok_or_else(|| DecodeError::Binary("seconds out of range".into()))?;
        let utc = OffsetDateTime::from_unix_timestamp(unix)
            .and_then(|t| t.replace_nanosecond(nanos))
            .map_err(|e| DecodeError::Binary(e.to_string()))?;
        let local = utc
            .checked_add(Duration::seconds(offset.whole_seconds().into()))
            .ok_or_else(|| DecodeError::Binary("timestamp out of range".into()))?;

        Ok(Time(
            PrimitiveDateTime::new(local.date(), local.time()).assume_offset(offset),
        ))
    }

    /// Decode the binary layout into `self`, leaving it untouched on failure.
    pub fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        *self = Time::from_binary(data)?;
        Ok(())
    }
}

mod binary {
    pub(super) const V1: u8 = 1;
    /// Offsets with a seconds component carry one extra byte.
    pub(super) const V2: u8 = 2;

    pub(super) const V1_LEN: usize = 15;
    pub(super) const V2_LEN: usize = 16;

    pub(super) const UTC_MARKER: i16 = -1;

    /// Seconds from `0001-01-01T00:00:00Z` to the Unix epoch.
    pub(super) const UNIX_TO_INTERNAL: i64 = 62_135_596_800;
}

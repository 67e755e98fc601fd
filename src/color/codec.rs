//! Wire codec for color payloads
//!
//! Each publish carries a small JSON record with three integer fields:
//!
//! ```text
//! { "RED": <0..255>, "GREEN": <0..255>, "BLUE": <0..255> }
//! ```
//!
//! Field order is not significant and unknown fields are ignored on decode,
//! so the lamp endpoint can grow the record without breaking old clients.

use bytes::Bytes;
use serde::Serialize;

use super::Color;

/// Error type for inbound payload decoding
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Payload is not valid JSON at all
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload is valid JSON but not an object
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// A required channel field is absent
    #[error("missing field {0}")]
    MissingField(&'static str),

    /// A channel field is present but not an integer
    #[error("field {0} is not an integer")]
    NotAnInteger(&'static str),

    /// A channel field is an integer outside `[0, 255]`
    #[error("field {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
}

#[derive(Serialize)]
struct ColorRecord {
    #[serde(rename = "RED")]
    red: u8,
    #[serde(rename = "GREEN")]
    green: u8,
    #[serde(rename = "BLUE")]
    blue: u8,
}

/// Encode a color as its wire payload
///
/// Total on the domain: every `Color` has a payload. The `u8` components
/// guarantee every emitted field is in `[0, 255]`.
pub fn encode(color: Color) -> Bytes {
    let record = ColorRecord {
        red: color.r,
        green: color.g,
        blue: color.b,
    };
    // Serializing a struct of plain integers cannot fail
    let json = serde_json::to_vec(&record).unwrap_or_default();
    Bytes::from(json)
}

/// Decode a wire payload back into a color
///
/// Rejects non-object payloads and non-integer or out-of-range channel
/// fields. Additional fields are ignored.
pub fn decode(payload: &[u8]) -> Result<Color, DecodeError> {
    let value: serde_json::Value = serde_json::from_slice(payload)?;
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

    let r = channel_field(object, "RED")?;
    let g = channel_field(object, "GREEN")?;
    let b = channel_field(object, "BLUE")?;

    Ok(Color::new(r, g, b))
}

fn channel_field(
    object: &serde_json::Map<String, serde_json::Value>,
    name: &'static str,
) -> Result<u8, DecodeError> {
    let value = object.get(name).ok_or(DecodeError::MissingField(name))?;
    let raw = value.as_i64().ok_or(DecodeError::NotAnInteger(name))?;
    u8::try_from(raw).map_err(|_| DecodeError::OutOfRange { field: name, value: raw })
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # JSON Encoder
//!
//! JSON encoding of bus payloads.
//!
//! Typed payloads go through their serde representation. A
//! [`DecodedMessage`] is walked value by value: stamps and durations become
//! `{"sec", "nanosec"}` objects and byte buffers become base64 strings.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use spot_codec::encoding::JsonEncoder;
//! use spot_codec::msgs::WiFiState;
//!
//! let wifi = WiFiState { current_mode: 1, essid: "spot".to_string() };
//! let json = JsonEncoder::new().encode(&wifi)?;
//! assert_eq!(json, r#"{"current_mode":1,"essid":"spot"}"#);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::{CodecError, CodecValue, DecodedMessage, Result as CoreResult};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// JSON encoder for payloads and decoded messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder {
    pretty: bool,
}

impl JsonEncoder {
    /// Create a compact JSON encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder that pretty-prints its output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Whether output is pretty-printed.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Encode any serializable payload.
    pub fn encode<T: Serialize + ?Sized>(&self, payload: &T) -> CoreResult<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(payload)?
        } else {
            serde_json::to_string(payload)?
        };
        Ok(encoded)
    }

    /// Encode a DecodedMessage.
    ///
    /// Keys are emitted in sorted order, so equal messages encode to equal
    /// strings.
    pub fn encode_message(&self, message: &DecodedMessage) -> CoreResult<String> {
        let json_value = self.message_to_json_value(message)?;
        self.encode(&json_value)
    }

    fn message_to_json_value(&self, message: &DecodedMessage) -> CoreResult<serde_json::Value> {
        let mut obj = serde_json::Map::new();

        for (key, value) in message {
            obj.insert(key.clone(), self.codec_value_to_json(key, value)?);
        }

        Ok(serde_json::Value::Object(obj))
    }

    #[allow(clippy::only_used_in_recursion)]
    fn codec_value_to_json(&self, field: &str, value: &CodecValue) -> CoreResult<serde_json::Value> {
        match value {
            CodecValue::Bool(b) => Ok(serde_json::Value::Bool(*b)),
            CodecValue::Int32(i) => Ok(serde_json::Value::from(*i)),
            CodecValue::UInt8(u) => Ok(serde_json::Value::from(*u)),
            CodecValue::UInt32(u) => Ok(serde_json::Value::from(*u)),
            CodecValue::UInt64(u) => Ok(serde_json::Value::from(*u)),
            CodecValue::Float64(f) => float_to_json(field, *f),
            CodecValue::String(s) => Ok(serde_json::Value::String(s.clone())),
            CodecValue::Timestamp(nanos) | CodecValue::Duration(nanos) => {
                Ok(split_nanos(*nanos))
            }
            CodecValue::Bytes(b) => Ok(serde_json::Value::String(base64_encode(b))),
            CodecValue::Array(arr) => {
                let mut values = Vec::with_capacity(arr.len());
                for item in arr {
                    values.push(self.codec_value_to_json(field, item)?);
                }
                Ok(serde_json::Value::Array(values))
            }
            CodecValue::Struct(map) => self.message_to_json_value(map),
        }
    }
}

fn float_to_json(field: &str, f: f64) -> CoreResult<serde_json::Value> {
    serde_json::Number::from_f64(f)
        .map(serde_json::Value::Number)
        .ok_or_else(|| {
            CodecError::encode("JSON", format!("field '{field}': {f} is not a JSON number"))
        })
}

fn split_nanos(nanos: i64) -> serde_json::Value {
    serde_json::json!({
        "sec": nanos.div_euclid(NANOS_PER_SEC),
        "nanosec": nanos.rem_euclid(NANOS_PER_SEC),
    })
}

/// Standard base64 with padding.
fn base64_encode(data: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut result = String::with_capacity(data.len().div_ceil(3) * 4);

    for chunk in data.chunks(3) {
        let mut buffer = [0u8; 3];
        buffer[..chunk.len()].copy_from_slice(chunk);

        result.push(TABLE[(buffer[0] >> 2) as usize] as char);
        result.push(TABLE[((buffer[0] & 0x03) << 4 | buffer[1] >> 4) as usize] as char);

        if chunk.len() > 1 {
            result.push(TABLE[((buffer[1] & 0x0F) << 2 | buffer[2] >> 6) as usize] as char);
        } else {
            result.push('=');
        }

        if chunk.len() > 2 {
            result.push(TABLE[(buffer[2] & 0x3F) as usize] as char);
        } else {
            result.push('=');
        }
    }

    result
}

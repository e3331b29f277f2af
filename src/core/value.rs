// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dynamic value model for payloads.
//!
//! Typed payloads can be lowered into a [`DecodedMessage`] (field name ->
//! [`CodecValue`]) for buses that route schema-less structured values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type alias for a message as field name -> value mapping.
pub type DecodedMessage = HashMap<String, CodecValue>;

/// Unified value type for lowered payloads.
///
/// Temporal fields keep their meaning: stamps lower to [`CodecValue::Timestamp`]
/// and durations to [`CodecValue::Duration`], both in nanoseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CodecValue {
    Bool(bool),

    Int32(i32),

    UInt8(u8),
    UInt32(u32),
    UInt64(u64),

    Float64(f64),

    String(String),

    // Binary data (image frames)
    Bytes(Vec<u8>),

    /// Timestamp as nanoseconds since Unix epoch
    Timestamp(i64),

    /// Duration as nanoseconds (can be negative)
    Duration(i64),

    Array(Vec<CodecValue>),

    // Nested message/struct
    Struct(DecodedMessage),
}

impl CodecValue {
    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CodecValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            CodecValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get the inner struct.
    pub fn as_struct(&self) -> Option<&DecodedMessage> {
        match self {
            CodecValue::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Get the timestamp value as nanoseconds.
    pub fn as_timestamp_nanos(&self) -> Option<i64> {
        match self {
            CodecValue::Timestamp(nanos) => Some(*nanos),
            _ => None,
        }
    }

    /// Get the duration value as nanoseconds.
    pub fn as_duration_nanos(&self) -> Option<i64> {
        match self {
            CodecValue::Duration(nanos) => Some(*nanos),
            _ => None,
        }
    }

    /// Create a Timestamp from ROS2 Time (sec: i32, nanosec: u32).
    pub fn from_ros2_time(sec: i32, nanosec: u32) -> Self {
        CodecValue::Timestamp((sec as i64) * 1_000_000_000 + (nanosec as i64))
    }

    /// Create a Duration from ROS2 Duration (sec: i32, nanosec: u32).
    pub fn from_ros2_duration(sec: i32, nanosec: u32) -> Self {
        CodecValue::Duration((sec as i64) * 1_000_000_000 + (nanosec as i64))
    }
}

/// Lowering of a typed value into the dynamic value model.
pub trait ToCodecValue {
    /// Build the dynamic representation of `self`.
    fn to_codec_value(&self) -> CodecValue;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl ToCodecValue for $ty {
                fn to_codec_value(&self) -> CodecValue {
                    CodecValue::$variant(*self)
                }
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    i32 => Int32,
    u8 => UInt8,
    u32 => UInt32,
    u64 => UInt64,
    f64 => Float64,
}

impl ToCodecValue for String {
    fn to_codec_value(&self) -> CodecValue {
        CodecValue::String(self.clone())
    }
}

impl<T: ToCodecValue> ToCodecValue for Vec<T> {
    fn to_codec_value(&self) -> CodecValue {
        CodecValue::Array(self.iter().map(ToCodecValue::to_codec_value).collect())
    }
}

impl<T: ToCodecValue, const N: usize> ToCodecValue for [T; N] {
    fn to_codec_value(&self) -> CodecValue {
        CodecValue::Array(self.iter().map(ToCodecValue::to_codec_value).collect())
    }
}

/// Implement [`ToCodecValue`] for a struct as a [`CodecValue::Struct`] of its
/// fields. `field => "name"` overrides the emitted field name.
#[macro_export]
macro_rules! impl_codec_struct {
    (@name $field:ident $name:literal) => { $name };
    (@name $field:ident) => { stringify!($field) };
    ($ty:ty { $($field:ident $(=> $name:literal)?),* $(,)? }) => {
        impl $crate::core::value::ToCodecValue for $ty {
            fn to_codec_value(&self) -> $crate::core::value::CodecValue {
                let mut fields = $crate::core::value::DecodedMessage::new();
                $(
                    fields.insert(
                        $crate::impl_codec_struct!(@name $field $($name)?).to_string(),
                        $crate::core::value::ToCodecValue::to_codec_value(&self.$field),
                    );
                )*
                $crate::core::value::CodecValue::Struct(fields)
            }
        }
    };
}

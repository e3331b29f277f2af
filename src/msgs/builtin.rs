// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Stamps, durations and the standard message header.

use serde::{Deserialize, Serialize};

use crate::core::value::{CodecValue, ToCodecValue};

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Split `(seconds, nanos)` into whole seconds and a nanosecond remainder in
/// `0..1e9`, then saturate seconds into `i32`.
fn canonicalize(seconds: i64, nanos: i32) -> (i32, u32) {
    let nanos = i64::from(nanos);
    let seconds = seconds.saturating_add(nanos.div_euclid(NANOS_PER_SEC));
    let nanosec = nanos.rem_euclid(NANOS_PER_SEC) as u32;
    let sec = seconds.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    (sec, nanosec)
}

/// Point in time (`builtin_interfaces/Time`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Time {
    pub sec: i32,
    pub nanosec: u32,
}

impl Time {
    /// Build a stamp from seconds and nanoseconds, normalizing the pair.
    pub fn from_parts(seconds: i64, nanos: i32) -> Self {
        let (sec, nanosec) = canonicalize(seconds, nanos);
        Self { sec, nanosec }
    }

    /// Nanoseconds since the epoch.
    pub fn as_nanos(&self) -> i64 {
        i64::from(self.sec) * NANOS_PER_SEC + i64::from(self.nanosec)
    }
}

impl From<&prost_types::Timestamp> for Time {
    fn from(ts: &prost_types::Timestamp) -> Self {
        Self::from_parts(ts.seconds, ts.nanos)
    }
}

impl ToCodecValue for Time {
    fn to_codec_value(&self) -> CodecValue {
        CodecValue::from_ros2_time(self.sec, self.nanosec)
    }
}

/// Signed time span (`builtin_interfaces/Duration`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Duration {
    pub sec: i32,
    pub nanosec: u32,
}

impl Duration {
    /// Build a duration from seconds and nanoseconds, normalizing the pair.
    pub fn from_parts(seconds: i64, nanos: i32) -> Self {
        let (sec, nanosec) = canonicalize(seconds, nanos);
        Self { sec, nanosec }
    }

    pub fn as_nanos(&self) -> i64 {
        i64::from(self.sec) * NANOS_PER_SEC + i64::from(self.nanosec)
    }
}

impl From<&prost_types::Duration> for Duration {
    fn from(d: &prost_types::Duration) -> Self {
        Self::from_parts(d.seconds, d.nanos)
    }
}

impl ToCodecValue for Duration {
    fn to_codec_value(&self) -> CodecValue {
        CodecValue::from_ros2_duration(self.sec, self.nanosec)
    }
}

/// Standard metadata for stamped messages (`std_msgs/Header`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Header {
    pub stamp: Time,
    pub frame_id: String,
}

impl Header {
    pub fn new(stamp: Time, frame_id: impl Into<String>) -> Self {
        Self {
            stamp,
            frame_id: frame_id.into(),
        }
    }

    /// Header with a stamp and no frame.
    pub fn stamped(stamp: Time) -> Self {
        Self {
            stamp,
            frame_id: String::new(),
        }
    }
}

crate::impl_codec_struct!(Header { stamp, frame_id });

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `geometry_msgs` and `tf2_msgs` payloads.

use serde::{Deserialize, Serialize};

use super::builtin::Header;
use crate::impl_codec_struct;

/// Number of entries in a 6x6 row-major covariance matrix.
pub const COVARIANCE_LEN: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Translation and rotation of a child frame in its parent frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vector3,
    pub rotation: Quaternion,
}

/// A transform between two named frames at a point in time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformStamped {
    /// Stamp and parent frame id
    pub header: Header,
    pub child_frame_id: String,
    pub transform: Transform,
}

/// Batch of transforms (`tf2_msgs/TFMessage`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TfMessage {
    pub transforms: Vec<TransformStamped>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Twist {
    pub linear: Vector3,
    pub angular: Vector3,
}

/// Twist with a 6x6 covariance (row-major).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwistWithCovariance {
    pub twist: Twist,
    pub covariance: Vec<f64>,
}

impl Default for TwistWithCovariance {
    fn default() -> Self {
        Self {
            twist: Twist::default(),
            covariance: vec![0.0; COVARIANCE_LEN],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TwistWithCovarianceStamped {
    pub header: Header,
    pub twist: TwistWithCovariance,
}

impl_codec_struct!(Vector3 { x, y, z });
impl_codec_struct!(Point { x, y, z });
impl_codec_struct!(Quaternion { x, y, z, w });
impl_codec_struct!(Transform {
    translation,
    rotation
});
impl_codec_struct!(TransformStamped {
    header,
    child_frame_id,
    transform
});
impl_codec_struct!(TfMessage { transforms });
impl_codec_struct!(Twist { linear, angular });
impl_codec_struct!(TwistWithCovariance { twist, covariance });
impl_codec_struct!(TwistWithCovarianceStamped { header, twist });

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! `sensor_msgs` payloads.

use serde::{Deserialize, Serialize};

use super::builtin::Header;
use crate::core::value::{CodecValue, DecodedMessage, ToCodecValue};
use crate::impl_codec_struct;

/// Distortion model name for the radial-tangential model.
pub const PLUMB_BOB: &str = "plumb_bob";

/// Uncompressed image.
///
/// An empty `encoding` marks a frame whose source format could not be
/// decoded; `step` and `data` are then empty too.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Image {
    pub header: Header,
    pub height: u32,
    pub width: u32,
    pub encoding: String,
    pub is_bigendian: bool,
    /// Row length in bytes
    pub step: u32,
    pub data: Vec<u8>,
}

impl Image {
    /// Whether the source format was recognized.
    pub fn is_decodable(&self) -> bool {
        !self.encoding.is_empty()
    }
}

impl ToCodecValue for Image {
    fn to_codec_value(&self) -> CodecValue {
        let mut fields = DecodedMessage::new();
        fields.insert("header".to_string(), self.header.to_codec_value());
        fields.insert("height".to_string(), CodecValue::UInt32(self.height));
        fields.insert("width".to_string(), CodecValue::UInt32(self.width));
        fields.insert(
            "encoding".to_string(),
            CodecValue::String(self.encoding.clone()),
        );
        fields.insert(
            "is_bigendian".to_string(),
            CodecValue::UInt8(u8::from(self.is_bigendian)),
        );
        fields.insert("step".to_string(), CodecValue::UInt32(self.step));
        fields.insert("data".to_string(), CodecValue::Bytes(self.data.clone()));
        CodecValue::Struct(fields)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionOfInterest {
    pub x_offset: u32,
    pub y_offset: u32,
    pub height: u32,
    pub width: u32,
    pub do_rectify: bool,
}

/// Calibration of a pinhole camera.
///
/// `k` is the 3x3 intrinsic matrix, `r` the 3x3 rectification matrix and
/// `p` the 3x4 projection matrix, all row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraInfo {
    pub header: Header,
    pub height: u32,
    pub width: u32,
    pub distortion_model: String,
    pub d: Vec<f64>,
    pub k: [f64; 9],
    pub r: [f64; 9],
    pub p: [f64; 12],
    pub binning_x: u32,
    pub binning_y: u32,
    pub roi: RegionOfInterest,
}

impl Default for CameraInfo {
    /// Undistorted `plumb_bob` model with identity rectification and
    /// homogeneous unit entries in `k` and `p`.
    fn default() -> Self {
        Self {
            header: Header::default(),
            height: 0,
            width: 0,
            distortion_model: PLUMB_BOB.to_string(),
            d: vec![0.0; 5],
            k: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
            r: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            p: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            binning_x: 0,
            binning_y: 0,
            roi: RegionOfInterest::default(),
        }
    }
}

/// Joint positions, velocities and efforts, index-aligned with `name`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JointState {
    pub header: Header,
    pub name: Vec<String>,
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub effort: Vec<f64>,
}

impl_codec_struct!(RegionOfInterest {
    x_offset,
    y_offset,
    height,
    width,
    do_rectify
});
impl_codec_struct!(CameraInfo {
    header,
    height,
    width,
    distortion_model,
    d,
    k,
    r,
    p,
    binning_x,
    binning_y,
    roi
});
impl_codec_struct!(JointState {
    header,
    name,
    position,
    velocity,
    effort
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_info() {
        let info = CameraInfo::default();
        assert_eq!(info.distortion_model, "plumb_bob");
        assert_eq!(info.d, vec![0.0; 5]);
        assert_eq!(info.k[8], 1.0);
        assert_eq!(info.r, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(info.p[10], 1.0);
    }

    #[test]
    fn test_image_lowering_keeps_bytes() {
        let image = Image {
            encoding: "mono8".to_string(),
            is_bigendian: true,
            step: 2,
            data: vec![7, 8],
            ..Default::default()
        };
        let value = image.to_codec_value();
        let fields = value.as_struct().unwrap();
        assert_eq!(fields.get("data").and_then(|v| v.as_bytes()), Some(&[7u8, 8][..]));
        assert_eq!(fields.get("is_bigendian"), Some(&CodecValue::UInt8(1)));
    }

    #[test]
    fn test_empty_image_not_decodable() {
        assert!(!Image::default().is_decodable());
    }

    #[test]
    fn test_camera_info_serde() {
        let info = CameraInfo::default();
        let json = serde_json::to_string(&info).unwrap();
        let back: CameraInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Camera image records.

use super::geometry::{FrameTreeSnapshot, Vec2};

/// Container format of an image buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Format {
    Unknown = 0,
    Jpeg = 1,
    Raw = 2,
    Rle = 3,
}

/// Pixel layout of an uncompressed image buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PixelFormat {
    Unknown = 0,
    GreyscaleU8 = 1,
    RgbU8 = 3,
    RgbaU8 = 4,
    /// Little-endian uint16 z-distance from the camera in millimetres
    DepthU16 = 5,
    GreyscaleU16 = 6,
}

/// Raw image buffer.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Image {
    #[prost(int32, tag = "2")]
    pub cols: i32,
    #[prost(int32, tag = "3")]
    pub rows: i32,
    #[prost(bytes = "vec", tag = "4")]
    pub data: Vec<u8>,
    #[prost(enumeration = "Format", tag = "5")]
    pub format: i32,
    #[prost(enumeration = "PixelFormat", tag = "6")]
    pub pixel_format: i32,
}

/// A single captured frame with its acquisition context.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImageCapture {
    #[prost(message, optional, tag = "3")]
    pub image: Option<Image>,
    #[prost(string, tag = "5")]
    pub frame_name_image_sensor: String,
    #[prost(message, optional, tag = "30")]
    pub acquisition_time: Option<prost_types::Timestamp>,
    #[prost(message, optional, tag = "31")]
    pub transforms_snapshot: Option<FrameTreeSnapshot>,
}

/// Pinhole intrinsics in pixels.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct CameraIntrinsics {
    #[prost(message, optional, tag = "1")]
    pub focal_length: Option<Vec2>,
    #[prost(message, optional, tag = "2")]
    pub principal_point: Option<Vec2>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct PinholeModel {
    #[prost(message, optional, tag = "1")]
    pub intrinsics: Option<CameraIntrinsics>,
}

/// Description of the camera that produced a frame.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImageSource {
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int32, tag = "4")]
    pub rows: i32,
    #[prost(int32, tag = "5")]
    pub cols: i32,
    #[prost(message, optional, tag = "8")]
    pub pinhole: Option<PinholeModel>,
}

/// One frame as delivered by the image service: source description plus shot.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ImageResponse {
    #[prost(message, optional, tag = "1")]
    pub source: Option<ImageSource>,
    #[prost(message, optional, tag = "2")]
    pub shot: Option<ImageCapture>,
}

impl ImageResponse {
    /// Intrinsics of the source camera, zero when the source carries none.
    pub fn intrinsics(&self) -> CameraIntrinsics {
        self.source
            .as_ref()
            .and_then(|source| source.pinhole)
            .and_then(|pinhole| pinhole.intrinsics)
            .unwrap_or_default()
    }
}

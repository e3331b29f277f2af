// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Image response to image, camera info and transform payloads.

use super::frames::snapshot_transforms;
use super::{dimension, stamp_of};
use crate::msgs::{CameraInfo, Header, Image, TfMessage};
use crate::records::{self, CameraIntrinsics, Format, ImageResponse, PixelFormat};

/// How an image buffer is laid out once handed to the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLayout {
    /// Bus encoding tag (e.g., "rgb8")
    pub encoding: &'static str,
    pub is_bigendian: bool,
    pub bytes_per_pixel: u32,
}

const RGB8: PixelLayout = PixelLayout {
    encoding: "rgb8",
    is_bigendian: true,
    bytes_per_pixel: 3,
};

const MONO8: PixelLayout = PixelLayout {
    encoding: "mono8",
    is_bigendian: true,
    bytes_per_pixel: 1,
};

const RGBA8: PixelLayout = PixelLayout {
    encoding: "rgba8",
    is_bigendian: true,
    bytes_per_pixel: 4,
};

// Depth in millimetres, little-endian on the wire.
const MONO16: PixelLayout = PixelLayout {
    encoding: "mono16",
    is_bigendian: false,
    bytes_per_pixel: 2,
};

/// Resolve the layout for a `(format, pixel_format)` pair of wire codes.
///
/// JPEG frames are labelled `rgb8` whatever their pixel format. Returns `None`
/// for combinations the bus has no encoding for.
pub fn pixel_layout(format: i32, pixel_format: i32) -> Option<PixelLayout> {
    match (Format::try_from(format), PixelFormat::try_from(pixel_format)) {
        (Ok(Format::Jpeg), _) => Some(RGB8),
        (Ok(Format::Raw), Ok(PixelFormat::GreyscaleU8)) => Some(MONO8),
        (Ok(Format::Raw), Ok(PixelFormat::RgbU8)) => Some(RGB8),
        (Ok(Format::Raw), Ok(PixelFormat::RgbaU8)) => Some(RGBA8),
        (Ok(Format::Raw), Ok(PixelFormat::DepthU16)) => Some(MONO16),
        _ => None,
    }
}

/// Payloads produced from one image response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImagePayloads {
    pub image: Image,
    pub camera_info: CameraInfo,
    /// Transforms from the shot's snapshot, stamped at acquisition
    pub transforms: TfMessage,
}

impl From<ImagePayloads> for (Image, CameraInfo, TfMessage) {
    fn from(payloads: ImagePayloads) -> Self {
        (payloads.image, payloads.camera_info, payloads.transforms)
    }
}

/// Convert an image response into image, camera info and transform payloads.
///
/// Never fails: an unsupported pixel layout yields an [`Image`] with an empty
/// encoding and no data, while camera info and transforms are still complete.
pub fn convert_image(response: &ImageResponse) -> ImagePayloads {
    let shot = response.shot.as_ref();
    let stamp = stamp_of(shot.and_then(|s| s.acquisition_time.as_ref()));
    let frame_id = shot.map_or("", |s| s.frame_name_image_sensor.as_str());
    let header = Header::new(stamp, frame_id);

    let transforms = shot
        .and_then(|s| s.transforms_snapshot.as_ref())
        .map(|snapshot| snapshot_transforms(stamp, snapshot))
        .unwrap_or_default();

    let image = image_payload(header.clone(), shot.and_then(|s| s.image.as_ref()));
    let camera_info = camera_info_payload(
        header,
        image.height,
        image.width,
        &response.intrinsics(),
    );

    ImagePayloads {
        image,
        camera_info,
        transforms,
    }
}

fn image_payload(header: Header, source: Option<&records::Image>) -> Image {
    let Some(source) = source else {
        return Image {
            header,
            ..Default::default()
        };
    };

    let mut image = Image {
        header,
        height: dimension(source.rows),
        width: dimension(source.cols),
        ..Default::default()
    };

    match pixel_layout(source.format, source.pixel_format) {
        Some(layout) => {
            image.encoding = layout.encoding.to_string();
            image.is_bigendian = layout.is_bigendian;
            image.step = layout.bytes_per_pixel.saturating_mul(image.width);
            image.data = source.data.clone();
        }
        None => {
            tracing::debug!(
                format = source.format,
                pixel_format = source.pixel_format,
                "unsupported image layout, emitting empty image"
            );
        }
    }

    image
}

/// Build calibration for an undistorted pinhole camera from its intrinsics.
pub fn camera_info_payload(
    header: Header,
    height: u32,
    width: u32,
    intrinsics: &CameraIntrinsics,
) -> CameraInfo {
    let focal = intrinsics.focal_length.unwrap_or_default();
    let principal = intrinsics.principal_point.unwrap_or_default();

    let mut info = CameraInfo {
        header,
        height,
        width,
        ..Default::default()
    };

    info.k[0] = focal.x;
    info.k[2] = principal.x;
    info.k[4] = focal.y;
    info.k[5] = principal.y;

    info.p[0] = focal.x;
    info.p[2] = principal.x;
    info.p[5] = focal.y;
    info.p[6] = principal.y;

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ImageCapture, ImageSource, PinholeModel, Vec2};

    fn response(format: Format, pixel_format: i32, cols: i32) -> ImageResponse {
        ImageResponse {
            source: None,
            shot: Some(ImageCapture {
                image: Some(records::Image {
                    cols,
                    rows: 2,
                    data: vec![0xAB; 16],
                    format: format as i32,
                    pixel_format,
                }),
                frame_name_image_sensor: "back_fisheye".to_string(),
                acquisition_time: Some(prost_types::Timestamp {
                    seconds: 42,
                    nanos: 9,
                }),
                transforms_snapshot: None,
            }),
        }
    }

    #[test]
    fn test_pixel_layout_table() {
        assert_eq!(pixel_layout(1, 0), Some(RGB8));
        assert_eq!(pixel_layout(1, 5), Some(RGB8));
        assert_eq!(pixel_layout(2, 1), Some(MONO8));
        assert_eq!(pixel_layout(2, 3), Some(RGB8));
        assert_eq!(pixel_layout(2, 4), Some(RGBA8));
        assert_eq!(pixel_layout(2, 5), Some(MONO16));
        assert_eq!(pixel_layout(2, PixelFormat::GreyscaleU16 as i32), None);
        assert_eq!(pixel_layout(2, 6), None);
        assert_eq!(pixel_layout(2, 0), None);
        assert_eq!(pixel_layout(3, 1), None);
        assert_eq!(pixel_layout(0, 1), None);
        assert_eq!(pixel_layout(99, 1), None);
    }

    #[test]
    fn test_jpeg_labelled_rgb8() {
        let payloads = convert_image(&response(Format::Jpeg, 0, 8));
        assert_eq!(payloads.image.encoding, "rgb8");
        assert!(payloads.image.is_bigendian);
        assert_eq!(payloads.image.step, 24);
        assert_eq!(payloads.image.data.len(), 16);
    }

    #[test]
    fn test_depth_is_little_endian_mono16() {
        let payloads = convert_image(&response(Format::Raw, 5, 8));
        assert_eq!(payloads.image.encoding, "mono16");
        assert!(!payloads.image.is_bigendian);
        assert_eq!(payloads.image.step, 16);
    }

    #[test]
    fn test_unsupported_layout_keeps_header_and_size() {
        let payloads = convert_image(&response(Format::Rle, 1, 8));
        let image = &payloads.image;
        assert!(image.encoding.is_empty());
        assert_eq!(image.step, 0);
        assert!(image.data.is_empty());
        assert!(!image.is_bigendian);
        assert_eq!((image.height, image.width), (2, 8));
        assert_eq!(image.header.frame_id, "back_fisheye");
        assert_eq!(payloads.camera_info.distortion_model, "plumb_bob");
    }

    #[test]
    fn test_header_shared_by_image_and_camera_info() {
        let payloads = convert_image(&response(Format::Raw, 1, 4));
        assert_eq!(payloads.image.header, payloads.camera_info.header);
        assert_eq!(payloads.image.header.stamp.sec, 42);
        assert_eq!(payloads.image.header.stamp.nanosec, 9);
        assert_eq!(payloads.camera_info.height, 2);
        assert_eq!(payloads.camera_info.width, 4);
    }

    #[test]
    fn test_camera_matrices() {
        let mut response = response(Format::Raw, 1, 4);
        response.source = Some(ImageSource {
            pinhole: Some(PinholeModel {
                intrinsics: Some(CameraIntrinsics {
                    focal_length: Some(Vec2 { x: 100.0, y: 200.0 }),
                    principal_point: Some(Vec2 { x: 50.0, y: 60.0 }),
                }),
            }),
            ..Default::default()
        });

        let info = convert_image(&response).camera_info;
        assert_eq!(
            info.k,
            [100.0, 0.0, 50.0, 0.0, 200.0, 60.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(
            info.p,
            [100.0, 0.0, 50.0, 0.0, 0.0, 200.0, 60.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(info.r, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(info.d, vec![0.0; 5]);
    }

    #[test]
    fn test_negative_dimensions_clamp_to_zero() {
        let payloads = convert_image(&response(Format::Raw, 3, -4));
        assert_eq!(payloads.image.width, 0);
        assert_eq!(payloads.image.step, 0);
    }

    #[test]
    fn test_missing_shot() {
        let payloads = convert_image(&ImageResponse::default());
        assert!(payloads.image.encoding.is_empty());
        assert_eq!(payloads.image.header, Header::default());
        assert!(payloads.transforms.transforms.is_empty());
        assert_eq!(payloads.camera_info.k[8], 1.0);
    }

    #[test]
    fn test_into_tuple() {
        let (image, info, tf): (Image, CameraInfo, TfMessage) =
            convert_image(&response(Format::Raw, 4, 2)).into();
        assert_eq!(image.encoding, "rgba8");
        assert_eq!(image.step, 8);
        assert_eq!(info.width, 2);
        assert!(tf.transforms.is_empty());
    }
}

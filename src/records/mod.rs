// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Vendor telemetry records.
//!
//! Protobuf messages for the subset of the vendor API the mapper consumes.
//! Field tags follow the vendor's published layout, so raw bytes from the
//! robot can be decoded with [`decode_image_response`] and
//! [`decode_robot_state`]. Unset sub-messages read as their defaults.

pub mod geometry;
pub mod image;
pub mod robot_state;

use prost::Message;

use crate::core::{CodecError, Result};

pub use geometry::{FrameTreeSnapshot, ParentEdge, Quaternion, SE3Pose, SE3Velocity, Vec2, Vec3};
pub use image::{
    CameraIntrinsics, Format, Image, ImageCapture, ImageResponse, ImageSource, PinholeModel,
    PixelFormat,
};
pub use robot_state::{
    BatteryState, BehaviorFault, BehaviorFaultState, CommsState, EStopState, FootState,
    JointState, KinematicState, PowerState, RobotState, SystemFault, SystemFaultState, WiFiState,
};

/// Decode an image response from its protobuf encoding.
pub fn decode_image_response(data: &[u8]) -> Result<ImageResponse> {
    ImageResponse::decode(data).map_err(|e| CodecError::decode("ImageResponse", e.to_string()))
}

/// Decode a robot state sample from its protobuf encoding.
pub fn decode_robot_state(data: &[u8]) -> Result<RobotState> {
    RobotState::decode(data).map_err(|e| CodecError::decode("RobotState", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_robot_state_empty() {
        let state = decode_robot_state(&[]).unwrap();
        assert_eq!(state, RobotState::default());
    }

    #[test]
    fn test_decode_image_response_truncated() {
        let response = ImageResponse {
            shot: Some(ImageCapture {
                frame_name_image_sensor: "hand_color_image_sensor".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let bytes = response.encode_to_vec();
        let err = decode_image_response(&bytes[..bytes.len() - 3]).unwrap_err();
        match err {
            CodecError::Decode { record, .. } => assert_eq!(record, "ImageResponse"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_robot_state_error_names_record() {
        // Field 1, length-delimited, claims 5 bytes but carries one.
        let err = decode_robot_state(&[0x0a, 0x05, 0x01]).unwrap_err();
        let fields = err.log_fields();
        assert_eq!(fields[0], ("record", "RobotState".to_string()));
    }
}

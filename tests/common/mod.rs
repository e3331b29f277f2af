// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common record fixtures for integration tests.

#![allow(dead_code)]

use prost_types::Timestamp;

use spot_codec::records::{
    BatteryState, CameraIntrinsics, CommsState, EStopState, Format, FrameTreeSnapshot, Image,
    ImageCapture, ImageResponse, ImageSource, JointState, KinematicState, PinholeModel,
    RobotState, SE3Pose, SE3Velocity, Vec2, Vec3, WiFiState,
};

// ============================================================================
// Time
// ============================================================================

pub fn ts(seconds: i64, nanos: i32) -> Option<Timestamp> {
    Some(Timestamp { seconds, nanos })
}

// ============================================================================
// Frame trees
// ============================================================================

/// Snapshot shaped like the robot's body tree: two roots and four edges.
pub fn body_snapshot() -> FrameTreeSnapshot {
    FrameTreeSnapshot::default()
        .with_edge("odom", "", SE3Pose::default())
        .with_edge("vision", "", SE3Pose::default())
        .with_edge(
            "body",
            "odom",
            SE3Pose::new([1.5, -0.25, 0.48], [0.0, 0.0, 0.3826834, 0.9238795]),
        )
        .with_edge(
            "gpe",
            "odom",
            SE3Pose::new([1.4, -0.2, 0.0], [0.0, 0.0, 0.0, 1.0]),
        )
        .with_edge(
            "frontleft_fisheye",
            "body",
            SE3Pose::new([0.41, 0.04, 0.02], [0.5, -0.5, 0.5, -0.5]),
        )
        .with_edge(
            "flat_body",
            "body",
            SE3Pose::new([0.0, 0.0, 0.0], [0.0, 0.1, 0.0, 0.995]),
        )
}

// ============================================================================
// Images
// ============================================================================

pub fn intrinsics(fx: f64, fy: f64, cx: f64, cy: f64) -> ImageSource {
    ImageSource {
        name: "frontleft_fisheye_image".to_string(),
        rows: 480,
        cols: 640,
        pinhole: Some(PinholeModel {
            intrinsics: Some(CameraIntrinsics {
                focal_length: Some(Vec2 { x: fx, y: fy }),
                principal_point: Some(Vec2 { x: cx, y: cy }),
            }),
        }),
    }
}

/// Image response with a `rows x cols` frame of `format`/`pixel_format`.
pub fn image_response(format: Format, pixel_format: i32, rows: i32, cols: i32) -> ImageResponse {
    ImageResponse {
        source: Some(intrinsics(552.1, 551.9, 320.5, 239.5)),
        shot: Some(ImageCapture {
            image: Some(Image {
                cols,
                rows,
                data: (0..(rows * cols).max(0)).map(|i| i as u8).collect(),
                format: format as i32,
                pixel_format,
            }),
            frame_name_image_sensor: "frontleft_fisheye".to_string(),
            acquisition_time: ts(1_700_000_000, 250_000_000),
            transforms_snapshot: Some(body_snapshot()),
        }),
    }
}

// ============================================================================
// Robot state
// ============================================================================

pub fn joint(name: &str, position: f64, velocity: f64, load: f64) -> JointState {
    JointState {
        name: name.to_string(),
        position: Some(position),
        velocity: Some(velocity),
        load: Some(load),
    }
}

pub fn wifi_link(mode: i32, essid: &str) -> CommsState {
    CommsState {
        timestamp: None,
        wifi_state: Some(WiFiState {
            current_mode: mode,
            essid: essid.to_string(),
        }),
    }
}

/// A robot state with every section populated.
pub fn robot_state() -> RobotState {
    RobotState {
        kinematic_state: Some(KinematicState {
            joint_states: vec![
                joint("fl.hx", 0.1, 0.01, 1.0),
                joint("fl.hy", 0.8, 0.02, 2.0),
                joint("fl.kn", -1.6, 0.03, 3.0),
                joint("hr.kn", -1.5, 0.04, 4.0),
            ],
            velocity_of_body_in_odom: Some(SE3Velocity {
                linear: Some(Vec3 {
                    x: 0.5,
                    y: 0.0,
                    z: 0.0,
                }),
                angular: Some(Vec3 {
                    x: 0.0,
                    y: 0.0,
                    z: 0.2,
                }),
            }),
            acquisition_timestamp: ts(1_700_000_010, 5),
            transforms_snapshot: Some(body_snapshot()),
        }),
        estop_states: vec![EStopState {
            timestamp: ts(1_700_000_009, 0),
            name: "hardware_estop".to_string(),
            r#type: 1,
            state: 2,
        }],
        comms_states: vec![wifi_link(1, "spot-ap"), wifi_link(2, "site-net")],
        battery_states: vec![BatteryState {
            timestamp: ts(1_700_000_008, 0),
            identifier: "battery_0".to_string(),
            charge_percentage: Some(72.0),
            current: Some(-3.5),
            voltage: Some(57.9),
            temperatures: vec![28.0, 29.5],
            status: 2,
            ..Default::default()
        }],
        ..Default::default()
    }
}

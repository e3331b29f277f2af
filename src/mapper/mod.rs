// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversion of vendor records into bus payloads.
//!
//! Every converter is a pure function of its input record: no state is kept
//! between calls and converting the same record twice yields identical
//! payloads.
//!
//! - [`convert_image`] - image response to image, camera info and transforms
//! - [`convert_state`] - robot state to every status payload at once
//! - [`RecordMapper`] - the same conversions behind [`ConvertOptions`]

pub mod facade;
pub mod frames;
pub mod image;
pub mod joints;
pub mod state;

use crate::msgs::{
    BatteryStateArray, BehaviorFaultState, Duration, EStopStateArray, FootStateArray, JointState,
    PowerState, SystemFaultState, TfMessage, Time, TwistWithCovarianceStamped, WiFiState,
};
use crate::records::RobotState;

pub use facade::{ConvertOptions, RecordMapper};
pub use frames::snapshot_transforms;
pub use image::{camera_info_payload, convert_image, pixel_layout, ImagePayloads, PixelLayout};
pub use joints::{
    friendly_joint_name, lookup_friendly_joint_name, FRIENDLY_JOINT_NAMES, JOINT_NAME_SENTINEL,
};
pub use state::{
    convert_battery, convert_behavior_faults, convert_estop, convert_feet, convert_joint_states,
    convert_odom_twist, convert_power, convert_system_faults, convert_tf, convert_wifi,
};

/// Stamp of an optional record timestamp; zero when absent.
pub(crate) fn stamp_of(ts: Option<&prost_types::Timestamp>) -> Time {
    ts.map(Time::from).unwrap_or_default()
}

pub(crate) fn duration_of(d: Option<&prost_types::Duration>) -> Duration {
    d.map(Duration::from).unwrap_or_default()
}

/// Image dimension from a signed wire field. Negative values read as zero.
pub(crate) fn dimension(v: i32) -> u32 {
    u32::try_from(v).unwrap_or(0)
}

/// Narrow a protobuf enum code to the bus's `u8` constant.
///
/// Codes outside `0..=255` map to 0, the `UNKNOWN` value of every status enum.
pub(crate) fn enum_code(v: i32) -> u8 {
    u8::try_from(v).unwrap_or_default()
}

/// Every status payload derived from one robot state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatePayloads {
    pub joint_states: JointState,
    pub estop: EStopStateArray,
    pub feet: FootStateArray,
    pub odom_twist: TwistWithCovarianceStamped,
    pub wifi: WiFiState,
    pub transforms: TfMessage,
    pub battery: BatteryStateArray,
    pub power: PowerState,
    pub system_faults: SystemFaultState,
    pub behavior_faults: BehaviorFaultState,
}

/// Run every state converter once.
pub fn convert_state(state: &RobotState) -> StatePayloads {
    StatePayloads {
        joint_states: convert_joint_states(state),
        estop: convert_estop(state),
        feet: convert_feet(state),
        odom_twist: convert_odom_twist(state),
        wifi: convert_wifi(state),
        transforms: convert_tf(state),
        battery: convert_battery(state),
        power: convert_power(state),
        system_faults: convert_system_faults(state),
        behavior_faults: convert_behavior_faults(state),
    }
}

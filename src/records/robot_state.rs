// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Robot state records.
//!
//! Vendor enumerations (e-stop type, contact, wifi mode, statuses, severities)
//! are carried as their raw `int32` wire codes.

use prost_types::{Duration, Timestamp};

use super::geometry::{FrameTreeSnapshot, SE3Velocity, Vec3};

/// Complete robot state sample.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RobotState {
    #[prost(message, optional, tag = "1")]
    pub power_state: Option<PowerState>,
    #[prost(message, repeated, tag = "2")]
    pub battery_states: Vec<BatteryState>,
    #[prost(message, repeated, tag = "3")]
    pub comms_states: Vec<CommsState>,
    #[prost(message, optional, tag = "4")]
    pub system_fault_state: Option<SystemFaultState>,
    #[prost(message, repeated, tag = "5")]
    pub estop_states: Vec<EStopState>,
    #[prost(message, optional, tag = "6")]
    pub kinematic_state: Option<KinematicState>,
    #[prost(message, optional, tag = "7")]
    pub behavior_fault_state: Option<BehaviorFaultState>,
    #[prost(message, repeated, tag = "8")]
    pub foot_state: Vec<FootState>,
}

/// Joint and body kinematics at one instant.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KinematicState {
    #[prost(message, repeated, tag = "2")]
    pub joint_states: Vec<JointState>,
    #[prost(message, optional, tag = "12")]
    pub velocity_of_body_in_odom: Option<SE3Velocity>,
    #[prost(message, optional, tag = "17")]
    pub acquisition_timestamp: Option<Timestamp>,
    #[prost(message, optional, tag = "31")]
    pub transforms_snapshot: Option<FrameTreeSnapshot>,
}

/// State of one joint. `load` is the joint effort.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JointState {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub position: Option<f64>,
    #[prost(message, optional, tag = "3")]
    pub velocity: Option<f64>,
    #[prost(message, optional, tag = "5")]
    pub load: Option<f64>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EStopState {
    #[prost(message, optional, tag = "1")]
    pub timestamp: Option<Timestamp>,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(int32, tag = "3")]
    pub r#type: i32,
    #[prost(int32, tag = "4")]
    pub state: i32,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct FootState {
    #[prost(message, optional, tag = "1")]
    pub foot_position_rt_body: Option<Vec3>,
    #[prost(int32, tag = "2")]
    pub contact: i32,
}

/// Communication link state. Only wifi links carry `wifi_state`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommsState {
    #[prost(message, optional, tag = "1")]
    pub timestamp: Option<Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub wifi_state: Option<WiFiState>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WiFiState {
    #[prost(int32, tag = "1")]
    pub current_mode: i32,
    #[prost(string, tag = "2")]
    pub essid: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatteryState {
    #[prost(message, optional, tag = "1")]
    pub timestamp: Option<Timestamp>,
    #[prost(string, tag = "2")]
    pub identifier: String,
    #[prost(message, optional, tag = "3")]
    pub charge_percentage: Option<f64>,
    #[prost(message, optional, tag = "4")]
    pub estimated_runtime: Option<Duration>,
    #[prost(message, optional, tag = "5")]
    pub current: Option<f64>,
    #[prost(message, optional, tag = "6")]
    pub voltage: Option<f64>,
    #[prost(double, repeated, tag = "7")]
    pub temperatures: Vec<f64>,
    #[prost(int32, tag = "8")]
    pub status: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PowerState {
    #[prost(message, optional, tag = "1")]
    pub timestamp: Option<Timestamp>,
    #[prost(int32, tag = "2")]
    pub motor_power_state: i32,
    #[prost(int32, tag = "3")]
    pub shore_power_state: i32,
    #[prost(message, optional, tag = "4")]
    pub locomotion_charge_percentage: Option<f64>,
    #[prost(message, optional, tag = "5")]
    pub locomotion_estimated_runtime: Option<Duration>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SystemFault {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub onset_timestamp: Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub duration: Option<Duration>,
    #[prost(int32, tag = "4")]
    pub code: i32,
    #[prost(string, tag = "5")]
    pub error_message: String,
    #[prost(string, repeated, tag = "6")]
    pub attributes: Vec<String>,
    #[prost(int32, tag = "7")]
    pub severity: i32,
    #[prost(uint64, tag = "8")]
    pub uid: u64,
}

/// Active and historical system faults.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SystemFaultState {
    #[prost(message, repeated, tag = "1")]
    pub faults: Vec<SystemFault>,
    #[prost(message, repeated, tag = "2")]
    pub historical_faults: Vec<SystemFault>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BehaviorFault {
    #[prost(uint32, tag = "1")]
    pub behavior_fault_id: u32,
    #[prost(message, optional, tag = "2")]
    pub onset_timestamp: Option<Timestamp>,
    #[prost(int32, tag = "3")]
    pub cause: i32,
    #[prost(int32, tag = "4")]
    pub status: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BehaviorFaultState {
    #[prost(message, repeated, tag = "1")]
    pub faults: Vec<BehaviorFault>,
}

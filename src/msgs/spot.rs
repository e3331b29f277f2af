// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Robot-specific status payloads (`spot_msgs`).
//!
//! Enumerated vendor fields are carried as `u8` codes with the vendor's
//! numbering.

use serde::{Deserialize, Serialize};

use super::builtin::{Duration, Header};
use super::geometry::Point;
use crate::impl_codec_struct;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EStopState {
    pub header: Header,
    pub name: String,
    #[serde(rename = "type")]
    pub estop_type: u8,
    pub state: u8,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EStopStateArray {
    pub estop_states: Vec<EStopState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FootState {
    pub foot_position_rt_body: Point,
    pub contact: u8,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FootStateArray {
    pub states: Vec<FootState>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WiFiState {
    pub current_mode: u8,
    pub essid: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatteryState {
    pub header: Header,
    pub identifier: String,
    pub charge_percentage: f64,
    pub estimated_runtime: Duration,
    pub current: f64,
    pub voltage: f64,
    pub temperatures: Vec<f64>,
    pub status: u8,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatteryStateArray {
    pub battery_states: Vec<BatteryState>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerState {
    pub header: Header,
    pub motor_power_state: u8,
    pub shore_power_state: u8,
    pub locomotion_charge_percentage: f64,
    pub locomotion_estimated_runtime: Duration,
}

/// A system fault; the header stamp is the fault onset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemFault {
    pub header: Header,
    pub name: String,
    pub duration: Duration,
    pub code: i32,
    pub uid: u64,
    pub error_message: String,
    pub attributes: Vec<String>,
    pub severity: u8,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemFaultState {
    pub faults: Vec<SystemFault>,
    pub historical_faults: Vec<SystemFault>,
}

/// A behavior fault; the header stamp is the fault onset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BehaviorFault {
    pub header: Header,
    pub behavior_fault_id: u32,
    pub cause: u8,
    pub status: u8,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BehaviorFaultState {
    pub faults: Vec<BehaviorFault>,
}

impl_codec_struct!(EStopState {
    header,
    name,
    estop_type => "type",
    state
});
impl_codec_struct!(EStopStateArray { estop_states });
impl_codec_struct!(FootState {
    foot_position_rt_body,
    contact
});
impl_codec_struct!(FootStateArray { states });
impl_codec_struct!(WiFiState {
    current_mode,
    essid
});
impl_codec_struct!(BatteryState {
    header,
    identifier,
    charge_percentage,
    estimated_runtime,
    current,
    voltage,
    temperatures,
    status
});
impl_codec_struct!(BatteryStateArray { battery_states });
impl_codec_struct!(PowerState {
    header,
    motor_power_state,
    shore_power_state,
    locomotion_charge_percentage,
    locomotion_estimated_runtime
});
impl_codec_struct!(SystemFault {
    header,
    name,
    duration,
    code,
    uid,
    error_message,
    attributes,
    severity
});
impl_codec_struct!(SystemFaultState {
    faults,
    historical_faults
});
impl_codec_struct!(BehaviorFault {
    header,
    behavior_fault_id,
    cause,
    status
});
impl_codec_struct!(BehaviorFaultState { faults });

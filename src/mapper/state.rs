// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Robot state to status payloads.
//!
//! Each converter reads one part of a [`RobotState`] and copies it field by
//! field, preserving record order.

use super::frames::snapshot_transforms;
use super::joints::friendly_joint_name;
use super::{duration_of, enum_code, stamp_of};
use crate::msgs::{
    self, BatteryStateArray, BehaviorFaultState, EStopStateArray, FootStateArray, Header,
    JointState, Point, PowerState, SystemFaultState, TfMessage, Time, TwistWithCovariance,
    TwistWithCovarianceStamped, Vector3, WiFiState,
};
use crate::records::{self, KinematicState, RobotState};

fn kinematic_stamp(kinematics: Option<&KinematicState>) -> Time {
    stamp_of(kinematics.and_then(|k| k.acquisition_timestamp.as_ref()))
}

/// Joint states stamped at kinematic acquisition, one entry per joint.
///
/// Joint codes are renamed through the friendly-name table; unknown codes
/// become the sentinel name.
pub fn convert_joint_states(state: &RobotState) -> JointState {
    let kinematics = state.kinematic_state.as_ref();
    let joints = kinematics.map(|k| k.joint_states.as_slice()).unwrap_or_default();

    let mut msg = JointState {
        header: Header::stamped(kinematic_stamp(kinematics)),
        ..Default::default()
    };
    for joint in joints {
        msg.name.push(friendly_joint_name(&joint.name).to_string());
        msg.position.push(joint.position.unwrap_or_default());
        msg.velocity.push(joint.velocity.unwrap_or_default());
        msg.effort.push(joint.load.unwrap_or_default());
    }
    msg
}

pub fn convert_estop(state: &RobotState) -> EStopStateArray {
    let estop_states = state
        .estop_states
        .iter()
        .map(|estop| msgs::EStopState {
            header: Header::stamped(stamp_of(estop.timestamp.as_ref())),
            name: estop.name.clone(),
            estop_type: enum_code(estop.r#type),
            state: enum_code(estop.state),
        })
        .collect();

    EStopStateArray { estop_states }
}

pub fn convert_feet(state: &RobotState) -> FootStateArray {
    let states = state
        .foot_state
        .iter()
        .map(|foot| {
            let position = foot.foot_position_rt_body.unwrap_or_default();
            msgs::FootState {
                foot_position_rt_body: Point {
                    x: position.x,
                    y: position.y,
                    z: position.z,
                },
                contact: enum_code(foot.contact),
            }
        })
        .collect();

    FootStateArray { states }
}

/// Body velocity in the odom frame. Covariance is left zeroed.
pub fn convert_odom_twist(state: &RobotState) -> TwistWithCovarianceStamped {
    let kinematics = state.kinematic_state.as_ref();
    let velocity = kinematics
        .and_then(|k| k.velocity_of_body_in_odom)
        .unwrap_or_default();
    let linear = velocity.linear.unwrap_or_default();
    let angular = velocity.angular.unwrap_or_default();

    let mut twist = TwistWithCovariance::default();
    twist.twist.linear = Vector3 {
        x: linear.x,
        y: linear.y,
        z: linear.z,
    };
    twist.twist.angular = Vector3 {
        x: angular.x,
        y: angular.y,
        z: angular.z,
    };

    TwistWithCovarianceStamped {
        header: Header::stamped(kinematic_stamp(kinematics)),
        twist,
    }
}

/// Wifi mode and ESSID.
///
/// Every comm state carrying wifi info overwrites the previous one, so the
/// last such entry wins. With no wifi info the default payload is returned.
pub fn convert_wifi(state: &RobotState) -> WiFiState {
    let mut msg = WiFiState::default();
    for wifi in state.comms_states.iter().filter_map(|c| c.wifi_state.as_ref()) {
        msg.current_mode = enum_code(wifi.current_mode);
        msg.essid = wifi.essid.clone();
    }
    msg
}

/// Transforms of the kinematic snapshot, stamped at kinematic acquisition.
pub fn convert_tf(state: &RobotState) -> TfMessage {
    let kinematics = state.kinematic_state.as_ref();
    kinematics
        .and_then(|k| k.transforms_snapshot.as_ref())
        .map(|snapshot| snapshot_transforms(kinematic_stamp(kinematics), snapshot))
        .unwrap_or_default()
}

pub fn convert_battery(state: &RobotState) -> BatteryStateArray {
    let battery_states = state
        .battery_states
        .iter()
        .map(|battery| msgs::BatteryState {
            header: Header::stamped(stamp_of(battery.timestamp.as_ref())),
            identifier: battery.identifier.clone(),
            charge_percentage: battery.charge_percentage.unwrap_or_default(),
            estimated_runtime: duration_of(battery.estimated_runtime.as_ref()),
            current: battery.current.unwrap_or_default(),
            voltage: battery.voltage.unwrap_or_default(),
            temperatures: battery.temperatures.clone(),
            status: enum_code(battery.status),
        })
        .collect();

    BatteryStateArray { battery_states }
}

pub fn convert_power(state: &RobotState) -> PowerState {
    let Some(power) = state.power_state.as_ref() else {
        return PowerState::default();
    };

    PowerState {
        header: Header::stamped(stamp_of(power.timestamp.as_ref())),
        motor_power_state: enum_code(power.motor_power_state),
        shore_power_state: enum_code(power.shore_power_state),
        locomotion_charge_percentage: power.locomotion_charge_percentage.unwrap_or_default(),
        locomotion_estimated_runtime: duration_of(power.locomotion_estimated_runtime.as_ref()),
    }
}

fn system_faults(faults: &[records::SystemFault]) -> Vec<msgs::SystemFault> {
    faults
        .iter()
        .map(|fault| msgs::SystemFault {
            header: Header::stamped(stamp_of(fault.onset_timestamp.as_ref())),
            name: fault.name.clone(),
            duration: duration_of(fault.duration.as_ref()),
            code: fault.code,
            uid: fault.uid,
            error_message: fault.error_message.clone(),
            attributes: fault.attributes.clone(),
            severity: enum_code(fault.severity),
        })
        .collect()
}

/// Active and historical system faults, each list in record order.
pub fn convert_system_faults(state: &RobotState) -> SystemFaultState {
    let Some(fault_state) = state.system_fault_state.as_ref() else {
        return SystemFaultState::default();
    };

    SystemFaultState {
        faults: system_faults(&fault_state.faults),
        historical_faults: system_faults(&fault_state.historical_faults),
    }
}

pub fn convert_behavior_faults(state: &RobotState) -> BehaviorFaultState {
    let faults = state
        .behavior_fault_state
        .as_ref()
        .map(|s| s.faults.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|fault| msgs::BehaviorFault {
            header: Header::stamped(stamp_of(fault.onset_timestamp.as_ref())),
            behavior_fault_id: fault.behavior_fault_id,
            cause: enum_code(fault.cause),
            status: enum_code(fault.status),
        })
        .collect();

    BehaviorFaultState { faults }
}

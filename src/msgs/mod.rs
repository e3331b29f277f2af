// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Output payloads handed to the message bus.
//!
//! Layout follows the ROS message definitions the bus publishes:
//! - [`builtin`] - `Time`, `Duration`, `std_msgs/Header`
//! - [`geometry`] - `geometry_msgs` and `tf2_msgs`
//! - [`sensor`] - `sensor_msgs`
//! - [`spot`] - robot status messages

pub mod builtin;
pub mod geometry;
pub mod sensor;
pub mod spot;

use serde::Serialize;

use crate::core::value::{CodecValue, DecodedMessage, ToCodecValue};

pub use builtin::{Duration, Header, Time};
pub use geometry::{
    Point, Quaternion, TfMessage, Transform, TransformStamped, Twist, TwistWithCovariance,
    TwistWithCovarianceStamped, Vector3,
};
pub use sensor::{CameraInfo, Image, JointState, RegionOfInterest};
pub use spot::{
    BatteryState, BatteryStateArray, BehaviorFault, BehaviorFaultState, EStopState,
    EStopStateArray, FootState, FootStateArray, PowerState, SystemFault, SystemFaultState,
    WiFiState,
};

/// A payload the bus can route by type name.
pub trait RosMessage: ToCodecValue + Serialize {
    /// Full message type name (e.g., "sensor_msgs/msg/Image").
    const TYPE_NAME: &'static str;

    /// Lower the payload into a field name -> value mapping.
    fn to_message(&self) -> DecodedMessage {
        match self.to_codec_value() {
            CodecValue::Struct(fields) => fields,
            other => {
                let mut fields = DecodedMessage::new();
                fields.insert("data".to_string(), other);
                fields
            }
        }
    }
}

macro_rules! ros_message {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl RosMessage for $ty {
                const TYPE_NAME: &'static str = $name;
            }
        )*
    };
}

ros_message! {
    Header => "std_msgs/msg/Header",
    TransformStamped => "geometry_msgs/msg/TransformStamped",
    TwistWithCovarianceStamped => "geometry_msgs/msg/TwistWithCovarianceStamped",
    TfMessage => "tf2_msgs/msg/TFMessage",
    Image => "sensor_msgs/msg/Image",
    CameraInfo => "sensor_msgs/msg/CameraInfo",
    JointState => "sensor_msgs/msg/JointState",
    EStopStateArray => "spot_msgs/msg/EStopStateArray",
    FootStateArray => "spot_msgs/msg/FootStateArray",
    WiFiState => "spot_msgs/msg/WiFiState",
    BatteryStateArray => "spot_msgs/msg/BatteryStateArray",
    PowerState => "spot_msgs/msg/PowerState",
    SystemFaultState => "spot_msgs/msg/SystemFaultState",
    BehaviorFaultState => "spot_msgs/msg/BehaviorFaultState",
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # spot-codec
//!
//! Mapping of Spot robot telemetry records onto ROS-style message payloads.
//!
//! The library is organized by stage:
//! - [`records`] - vendor records (protobuf) as they come off the robot API
//! - [`mapper`] - pure conversion of records into payloads
//! - [`msgs`] - output payloads, each with its bus type name
//! - [`encoding`] - JSON encoding of payloads for inspection and export
//! - [`core`] - errors and the dynamic value model
//!
//! Converters hold no state: the same record always produces the same
//! payloads, and one [`RecordMapper`] can be shared across threads.
//!
//! ## Example: Converting a robot state
//!
//! ```
//! use spot_codec::mapper::convert_state;
//! use spot_codec::records::{JointState, KinematicState, RobotState};
//!
//! let state = RobotState {
//!     kinematic_state: Some(KinematicState {
//!         joint_states: vec![JointState {
//!             name: "fl.hx".to_string(),
//!             position: Some(0.1),
//!             ..Default::default()
//!         }],
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let payloads = convert_state(&state);
//! assert_eq!(payloads.joint_states.name, vec!["front_left_hip_x"]);
//! ```
//!
//! ## Example: Decoding raw records with strict options
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use spot_codec::{ConvertOptions, RecordMapper};
//!
//! # let bytes: Vec<u8> = Vec::new();
//! let options = ConvertOptions::from_toml_str("reject_unsupported_images = true")?;
//! let mapper = RecordMapper::with_options(options);
//! let payloads = mapper.decode_image(&bytes)?;
//! println!("{} {}", payloads.image.encoding, payloads.transforms.transforms.len());
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{CodecError, CodecValue, DecodedMessage, Result, ToCodecValue};

// Vendor records
pub mod records;

// Output payloads
pub mod msgs;

pub use msgs::RosMessage;

// Record to payload conversion
pub mod mapper;

pub use mapper::{
    convert_image, convert_state, ConvertOptions, ImagePayloads, RecordMapper, StatePayloads,
};

// Payload encodings
pub mod encoding;

pub use encoding::JsonEncoder;

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Raw record bytes through the mapper, plus payload encoding.
//!
//! Run with: cargo test --test record_decode_tests

mod common;

use prost::Message;

use common::{image_response, robot_state};
use spot_codec::mapper::{convert_image, convert_state};
use spot_codec::msgs::{CameraInfo, Image, JointState, RosMessage, TfMessage};
use spot_codec::records::{self, Format};
use spot_codec::{CodecError, CodecValue, ConvertOptions, JsonEncoder, RecordMapper};

#[test]
fn test_decode_image_bytes() {
    let response = image_response(Format::Raw, 3, 2, 4);
    let bytes = response.encode_to_vec();

    let decoded = records::decode_image_response(&bytes).unwrap();
    assert_eq!(decoded, response);

    let payloads = RecordMapper::new().decode_image(&bytes).unwrap();
    assert_eq!(payloads, convert_image(&response));
    assert_eq!(payloads.image.encoding, "rgb8");
    assert_eq!(payloads.image.data.len(), 8);
}

#[test]
fn test_decode_state_bytes() {
    let state = robot_state();
    let bytes = state.encode_to_vec();

    let payloads = RecordMapper::new().decode_state(&bytes).unwrap();
    assert_eq!(payloads, convert_state(&state));
}

#[test]
fn test_decode_truncated_state() {
    let bytes = robot_state().encode_to_vec();
    let err = RecordMapper::new()
        .decode_state(&bytes[..bytes.len() - 1])
        .unwrap_err();
    match err {
        CodecError::Decode { record, .. } => assert_eq!(record, "RobotState"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_strict_mapper_from_toml() {
    let options = ConvertOptions::from_toml_str(
        r#"
reject_unsupported_images = true
require_timestamps = true
"#,
    )
    .unwrap();
    assert_eq!(options, ConvertOptions::strict());

    let mapper = RecordMapper::with_options(options);
    let rle = image_response(Format::Rle, 1, 2, 2).encode_to_vec();
    assert!(matches!(
        mapper.decode_image(&rle),
        Err(CodecError::Unsupported { .. })
    ));

    let raw = image_response(Format::Raw, 1, 2, 2).encode_to_vec();
    assert!(mapper.decode_image(&raw).is_ok());
    assert!(mapper.decode_state(&robot_state().encode_to_vec()).is_ok());
}

#[test]
fn test_bad_toml_is_config_error() {
    let err = ConvertOptions::from_toml_str("require_timestamps = \"yes\"").unwrap_err();
    assert!(matches!(err, CodecError::Config { .. }));
}

#[test]
fn test_type_names_for_bus() {
    assert_eq!(Image::TYPE_NAME, "sensor_msgs/msg/Image");
    assert_eq!(CameraInfo::TYPE_NAME, "sensor_msgs/msg/CameraInfo");
    assert_eq!(JointState::TYPE_NAME, "sensor_msgs/msg/JointState");
    assert_eq!(TfMessage::TYPE_NAME, "tf2_msgs/msg/TFMessage");
}

#[test]
fn test_image_lowered_to_message() {
    let payloads = convert_image(&image_response(Format::Raw, 5, 2, 2));
    let message = payloads.image.to_message();

    assert_eq!(
        message.get("encoding").and_then(CodecValue::as_str),
        Some("mono16")
    );
    assert_eq!(message.get("step"), Some(&CodecValue::UInt32(4)));
    assert_eq!(
        message.get("data").and_then(CodecValue::as_bytes).map(<[u8]>::len),
        Some(4)
    );

    let header = message
        .get("header")
        .and_then(CodecValue::as_struct)
        .unwrap();
    assert_eq!(
        header.get("stamp").and_then(CodecValue::as_timestamp_nanos),
        Some(1_700_000_000_250_000_000)
    );
    assert_eq!(
        header.get("frame_id").and_then(CodecValue::as_str),
        Some("frontleft_fisheye")
    );
}

#[test]
fn test_json_encoding_of_state_payloads() {
    let payloads = convert_state(&robot_state());
    let encoder = JsonEncoder::new();

    let wifi = encoder.encode(&payloads.wifi).unwrap();
    assert_eq!(wifi, r#"{"current_mode":2,"essid":"site-net"}"#);

    let estop: serde_json::Value =
        serde_json::from_str(&encoder.encode(&payloads.estop).unwrap()).unwrap();
    assert_eq!(estop["estop_states"][0]["type"], 1);
    assert_eq!(estop["estop_states"][0]["name"], "hardware_estop");

    let joints: serde_json::Value = serde_json::from_str(
        &encoder
            .encode_message(&payloads.joint_states.to_message())
            .unwrap(),
    )
    .unwrap();
    assert_eq!(joints["name"][3], "rear_right_knee");
    assert_eq!(joints["header"]["stamp"]["sec"], 1_700_000_010);
    assert_eq!(joints["header"]["stamp"]["nanosec"], 5);
}

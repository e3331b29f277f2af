// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Vendor joint code to friendly joint name table.

/// Name substituted for joints missing from [`FRIENDLY_JOINT_NAMES`].
///
/// Consumers match on this literal, so unknown joints never fail conversion.
pub const JOINT_NAME_SENTINEL: &str = "ERROR";

/// Vendor joint codes (`leg.joint`) and their friendly names.
pub const FRIENDLY_JOINT_NAMES: [(&str, &str); 12] = [
    ("fl.hx", "front_left_hip_x"),
    ("fl.hy", "front_left_hip_y"),
    ("fl.kn", "front_left_knee"),
    ("fr.hx", "front_right_hip_x"),
    ("fr.hy", "front_right_hip_y"),
    ("fr.kn", "front_right_knee"),
    ("hl.hx", "rear_left_hip_x"),
    ("hl.hy", "rear_left_hip_y"),
    ("hl.kn", "rear_left_knee"),
    ("hr.hx", "rear_right_hip_x"),
    ("hr.hy", "rear_right_hip_y"),
    ("hr.kn", "rear_right_knee"),
];

/// Look up the friendly name of a vendor joint code.
pub fn lookup_friendly_joint_name(code: &str) -> Option<&'static str> {
    FRIENDLY_JOINT_NAMES
        .iter()
        .find(|(vendor, _)| *vendor == code)
        .map(|(_, friendly)| *friendly)
}

/// Friendly name of a vendor joint code, or [`JOINT_NAME_SENTINEL`].
pub fn friendly_joint_name(code: &str) -> &'static str {
    lookup_friendly_joint_name(code).unwrap_or_else(|| {
        tracing::debug!(joint = code, "unknown joint code, using sentinel name");
        JOINT_NAME_SENTINEL
    })
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Configurable entry point for record conversion.
//!
//! - [`ConvertOptions`] - hardening switches, loadable from TOML
//! - [`RecordMapper`] - converts records or raw record bytes under those options
//!
//! With default options every method returns exactly what the free
//! converters in [`crate::mapper`] return.

use serde::{Deserialize, Serialize};

use super::image::{convert_image, pixel_layout, ImagePayloads};
use super::{convert_state, StatePayloads};
use crate::core::{CodecError, Result};
use crate::records::{self, ImageResponse, RobotState};

/// Options for record conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Fail on an image layout the bus cannot encode instead of emitting an
    /// empty image
    pub reject_unsupported_images: bool,

    /// Fail when the acquisition or kinematic timestamp is missing instead of
    /// stamping with zero
    pub require_timestamps: bool,
}

impl ConvertOptions {
    /// Options with every hardening switch enabled.
    pub fn strict() -> Self {
        Self {
            reject_unsupported_images: true,
            require_timestamps: true,
        }
    }

    /// Parse options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_reject_unsupported_images(mut self, reject: bool) -> Self {
        self.reject_unsupported_images = reject;
        self
    }

    pub fn with_require_timestamps(mut self, require: bool) -> Self {
        self.require_timestamps = require;
        self
    }
}

/// Converts vendor records into bus payloads.
///
/// Holds no state besides its options, so one mapper can serve any number
/// of records and threads.
#[derive(Debug, Clone, Default)]
pub struct RecordMapper {
    options: ConvertOptions,
}

impl RecordMapper {
    /// Create a mapper with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with the given options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the options used for conversion.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert an image response.
    ///
    /// # Errors
    ///
    /// - [`CodecError::MissingField`] if timestamps are required and the shot
    ///   has no acquisition time
    /// - [`CodecError::Unsupported`] if unsupported images are rejected and
    ///   the pixel layout has no bus encoding
    pub fn image(&self, response: &ImageResponse) -> Result<ImagePayloads> {
        let shot = response.shot.as_ref();

        if self.options.require_timestamps
            && shot.and_then(|s| s.acquisition_time.as_ref()).is_none()
        {
            return Err(rejected(CodecError::missing_field(
                "ImageCapture",
                "acquisition_time",
            )));
        }

        if self.options.reject_unsupported_images {
            let source = shot.and_then(|s| s.image.as_ref());
            let format = source.map_or(0, |i| i.format);
            let pixel_format = source.map_or(0, |i| i.pixel_format);
            if pixel_layout(format, pixel_format).is_none() {
                return Err(rejected(CodecError::unsupported(format!(
                    "image format {format} with pixel format {pixel_format}"
                ))));
            }
        }

        Ok(convert_image(response))
    }

    /// Convert a robot state into every status payload.
    ///
    /// # Errors
    ///
    /// [`CodecError::MissingField`] if timestamps are required and the
    /// kinematic state has no acquisition timestamp.
    pub fn state(&self, state: &RobotState) -> Result<StatePayloads> {
        if self.options.require_timestamps
            && state
                .kinematic_state
                .as_ref()
                .and_then(|k| k.acquisition_timestamp.as_ref())
                .is_none()
        {
            return Err(rejected(CodecError::missing_field(
                "KinematicState",
                "acquisition_timestamp",
            )));
        }

        Ok(convert_state(state))
    }

    /// Decode an encoded image response and convert it.
    pub fn decode_image(&self, data: &[u8]) -> Result<ImagePayloads> {
        let response = records::decode_image_response(data)?;
        self.image(&response)
    }

    /// Decode an encoded robot state and convert it.
    pub fn decode_state(&self, data: &[u8]) -> Result<StatePayloads> {
        let state = records::decode_robot_state(data)?;
        self.state(&state)
    }
}

fn rejected(err: CodecError) -> CodecError {
    let fields = err.log_fields();
    tracing::warn!(?fields, "record rejected: {err}");
    err
}

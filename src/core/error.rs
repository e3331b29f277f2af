// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for spot-codec.
//!
//! Well-formed records never produce an error. Errors come from the edges of
//! the mapping layer:
//! - Decoding raw vendor protobuf bytes
//! - Strict-mode validation of records
//! - Encoding payloads for the bus
//! - Loading converter options

use thiserror::Error;

/// Errors that can occur while decoding, validating or encoding records.
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    /// Raw record bytes could not be decoded
    #[error("Failed to decode {record}: {message}")]
    Decode {
        /// Record type being decoded (e.g., "RobotState")
        record: String,
        /// Error message
        message: String,
    },

    /// A field required by strict mode is absent
    #[error("Missing field '{field}' in {record}")]
    MissingField {
        /// Record type holding the field
        record: String,
        /// Field path (e.g., "shot.acquisition_time")
        field: String,
    },

    /// Unsupported record variant
    #[error("Unsupported feature: '{feature}'")]
    Unsupported {
        /// What is not supported
        feature: String,
    },

    /// Payload encoding error
    #[error("{codec} encode error: {message}")]
    Encode {
        /// Codec context (e.g., "JSON")
        codec: String,
        /// Error message
        message: String,
    },

    /// Invalid converter configuration
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message
        message: String,
    },
}

impl CodecError {
    /// Create a decode error.
    pub fn decode(record: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Decode {
            record: record.into(),
            message: message.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing_field(record: impl Into<String>, field: impl Into<String>) -> Self {
        CodecError::MissingField {
            record: record.into(),
            field: field.into(),
        }
    }

    /// Create an unsupported feature error.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        CodecError::Unsupported {
            feature: feature.into(),
        }
    }

    /// Create an encode error.
    pub fn encode(codec: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Encode {
            codec: codec.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        CodecError::Config {
            message: message.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::Decode { record, message } => {
                vec![("record", record.clone()), ("message", message.clone())]
            }
            CodecError::MissingField { record, field } => {
                vec![("record", record.clone()), ("field", field.clone())]
            }
            CodecError::Unsupported { feature } => vec![("feature", feature.clone())],
            CodecError::Encode { codec, message } => {
                vec![("codec", codec.clone()), ("message", message.clone())]
            }
            CodecError::Config { message } => vec![("message", message.clone())],
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::encode("JSON", err.to_string())
    }
}

impl From<toml::de::Error> for CodecError {
    fn from(err: toml::de::Error) -> Self {
        CodecError::config(err.to_string())
    }
}

/// Result type for spot-codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

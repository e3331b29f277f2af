// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout spot-codec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error handling
//! - [`CodecValue`] - Dynamic value representation of payloads

pub mod error;
pub mod value;

pub use error::{CodecError, Result};
pub use value::{CodecValue, DecodedMessage, ToCodecValue};

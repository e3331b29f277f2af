// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Payload encodings for inspection and export.
//!
//! - [`json`] - JSON encoding of typed payloads and [`DecodedMessage`]s
//!
//! [`DecodedMessage`]: crate::core::DecodedMessage

pub mod json;

pub use json::JsonEncoder;

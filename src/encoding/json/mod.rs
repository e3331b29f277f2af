// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON encoder module.
//!
//! Provides JSON encoding of payloads and decoded messages.

pub mod encoder;

pub use encoder::JsonEncoder;

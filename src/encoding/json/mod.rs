// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON payload module.
//!
//! Provides conversion between raw JSON message strings and parsed values.

pub mod payload;

pub use payload::{dict_to_raw, raw_to_dict};

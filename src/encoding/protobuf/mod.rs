// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Protobuf codec module.
//!
//! Provides the prost wire types and byte-level encode/decode helpers.

pub mod codec;
pub mod types;

pub use codec::{decode_message, encode_message, timestamp_from_proto, timestamp_to_proto};
pub use types::{BasicAllowance, Coin};

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire format encoding/decoding.
//!
//! This module provides the shared capabilities behind every entity codec:
//! - [`codec`] - Per-format conversion traits (Amino, Data, Proto, Any)
//! - [`protobuf`] - Prost wire types and byte-level helpers
//! - [`json`] - Raw JSON payload conversion
//! - [`timestamp`] - ISO-8601 timestamp formatting for the JSON formats
//! - [`registry`] - Type URL registry for polymorphic decoding

pub mod codec;
pub mod json;
pub mod protobuf;
pub mod registry;
pub mod timestamp;

pub use codec::{AminoCodec, AnyCodec, DataCodec, ProtoCodec};
pub use json::{dict_to_raw, raw_to_dict};
pub use registry::{JsonDecodeFn, ProtoDecodeFn, TypeEntry, TypeUrlRegistry};
pub use timestamp::{check_timestamp_range, format_timestamp, parse_timestamp};

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Byte-level protobuf helpers built on prost.

use chrono::{DateTime, Utc};
use prost::Message;

use crate::core::{CodecError, Result};
use crate::encoding::timestamp::check_timestamp_range;

/// Encode a prost message to bytes.
pub fn encode_message<M: Message>(message: &M) -> Vec<u8> {
    message.encode_to_vec()
}

/// Decode a prost message from bytes.
///
/// Malformed input surfaces as [`CodecError::DecodeError`] carrying the
/// prost error message.
pub fn decode_message<M: Message + Default>(data: &[u8]) -> Result<M> {
    Ok(M::decode(data)?)
}

const MAX_NANOS: u32 = 999_999_999;

/// Convert a protobuf timestamp to a UTC datetime.
///
/// `nanos` must lie in `0..=999_999_999` and the instant within years
/// 0001 to 9999.
pub fn timestamp_from_proto(ts: &prost_types::Timestamp) -> Result<DateTime<Utc>> {
    let nanos = u32::try_from(ts.nanos)
        .ok()
        .filter(|n| *n <= MAX_NANOS)
        .ok_or_else(|| CodecError::parse("timestamp", format!("invalid nanos {}", ts.nanos)))?;
    let dt = DateTime::from_timestamp(ts.seconds, nanos).ok_or_else(|| {
        CodecError::parse(
            "timestamp",
            format!("out of range: {}s {}ns", ts.seconds, ts.nanos),
        )
    })?;
    check_timestamp_range(&dt)?;
    Ok(dt)
}


/// Convert a UTC datetime to a protobuf timestamp.
pub fn timestamp_to_proto(dt: &DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ISO-8601 timestamps for the JSON encodings.
//!
//! Timestamps are written in UTC with millisecond precision. A zero
//! millisecond component is written as a bare `Z` suffix, so
//! `2023-01-01T00:00:00.000Z` becomes `2023-01-01T00:00:00Z` while
//! `2023-01-01T00:00:00.500Z` is kept as is. Sub-millisecond precision is
//! truncated, never rounded.
//!
//! Only years 0001 through 9999 are accepted, the range a protobuf
//! `Timestamp` can carry and a four-digit ISO-8601 year can spell.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

use crate::core::{CodecError, Result};

/// Format a timestamp for Amino/Data JSON.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    let iso = dt.to_rfc3339_opts(SecondsFormat::Millis, true);
    match iso.strip_suffix(".000Z") {
        Some(stripped) => format!("{stripped}Z"),
        None => iso,
    }
}

/// Check that a timestamp falls within years 0001 to 9999.
///
/// # Errors
///
/// Returns [`CodecError::ParseError`] with context `"timestamp"` otherwise.
pub fn check_timestamp_range(dt: &DateTime<Utc>) -> Result<()> {
    if (1..=9999).contains(&dt.year()) {
        Ok(())
    } else {
        Err(CodecError::parse(
            "timestamp",
            format!("{dt} is outside 0001-01-01 to 9999-12-31"),
        ))
    }
}

/// Parse an ISO-8601 / RFC 3339 timestamp into UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let dt = DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CodecError::parse("timestamp", format!("'{s}': {e}")))?;
    check_timestamp_range(&dt)?;
    Ok(dt)
}

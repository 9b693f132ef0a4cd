// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Raw JSON payloads
//!
//! Contract messages carry free-form JSON as an embedded string on the wire
//! and as a parsed [`serde_json::Value`] in memory.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use txcodec::encoding::json::{dict_to_raw, raw_to_dict};
//!
//! let value = raw_to_dict(r#"{"key": 1}"#)?;
//! assert_eq!(value["key"], 1);
//! assert_eq!(dict_to_raw(&value)?, r#"{"key":1}"#);
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

use crate::core::{CodecError, Result};

/// Decode a raw JSON message string into a value.
pub fn raw_to_dict(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| CodecError::parse("json payload", format!("{e}")))
}

/// Encode a value as a compact raw JSON message string.
///
/// Key presence is preserved; key order and whitespace are not.
pub fn dict_to_raw(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(|e| CodecError::parse("json payload encode", format!("{e}")))
}

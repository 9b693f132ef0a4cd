// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for txcodec.
//!
//! Provides error types for transcoding operations:
//! - Domain invariant violations (allowances)
//! - Numeric, amount, timestamp and JSON payload parsing
//! - Protobuf decoding
//! - Type URL dispatch

use std::fmt;

/// Errors that can occur while converting between wire formats.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// Allowance construction invariant violated
    InvalidAllowance {
        /// Why the allowance was rejected
        reason: String,
    },

    /// Integer field could not be parsed from its decimal string form
    NumericParse {
        /// Field name
        field: String,
        /// Offending input
        value: String,
        /// Error message
        message: String,
    },

    /// Parse error in an amount, timestamp or JSON payload
    ParseError {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },

    /// Binary payload could not be decoded
    DecodeError {
        /// Codec context (e.g., "Protobuf")
        codec: String,
        /// Error message
        message: String,
    },

    /// Type URL or Amino tag not found in registry
    TypeNotFound {
        /// Type name that was not found
        type_name: String,
    },

    /// Unsupported format or feature
    Unsupported {
        /// What is not supported
        feature: String,
    },

    /// Other error
    Other(String),
}

impl CodecError {
    /// Create an invalid allowance error.
    pub fn invalid_allowance(reason: impl Into<String>) -> Self {
        CodecError::InvalidAllowance {
            reason: reason.into(),
        }
    }

    /// Create a numeric parse error.
    pub fn numeric_parse(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CodecError::NumericParse {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::ParseError {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(codec: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::DecodeError {
            codec: codec.into(),
            message: message.into(),
        }
    }

    /// Create a "type not found" error.
    pub fn type_not_found(type_name: impl Into<String>) -> Self {
        CodecError::TypeNotFound {
            type_name: type_name.into(),
        }
    }

    /// Create an unsupported feature error.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        CodecError::Unsupported {
            feature: feature.into(),
        }
    }

    /// Returns `true` if this error is an allowance invariant violation.
    pub fn is_invalid_allowance(&self) -> bool {
        matches!(self, CodecError::InvalidAllowance { .. })
    }

    /// Returns `true` if this error is a numeric parse failure.
    pub fn is_numeric_parse(&self) -> bool {
        matches!(self, CodecError::NumericParse { .. })
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::InvalidAllowance { reason } => vec![("reason", reason.clone())],
            CodecError::NumericParse {
                field,
                value,
                message,
            } => vec![
                ("field", field.clone()),
                ("value", value.clone()),
                ("message", message.clone()),
            ],
            CodecError::ParseError { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            CodecError::DecodeError { codec, message } => {
                vec![("codec", codec.clone()), ("message", message.clone())]
            }
            CodecError::TypeNotFound { type_name } => vec![("type", type_name.clone())],
            CodecError::Unsupported { feature } => vec![("feature", feature.clone())],
            CodecError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidAllowance { reason } => {
                write!(f, "Invalid allowance: {reason}")
            }
            CodecError::NumericParse {
                field,
                value,
                message,
            } => write!(f, "Invalid number '{value}' for field '{field}': {message}"),
            CodecError::ParseError { context, message } => {
                write!(f, "Parse error in {context}: {message}")
            }
            CodecError::DecodeError { codec, message } => {
                write!(f, "{codec} decode error: {message}")
            }
            CodecError::TypeNotFound { type_name } => {
                write!(f, "Type not found: '{type_name}'")
            }
            CodecError::Unsupported { feature } => {
                write!(f, "Unsupported feature: '{feature}'")
            }
            CodecError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<prost::DecodeError> for CodecError {
    fn from(err: prost::DecodeError) -> Self {
        CodecError::DecodeError {
            codec: "Protobuf".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::ParseError {
            context: "json".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for txcodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

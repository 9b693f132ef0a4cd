// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout txcodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error handling
//! - [`Coins`] - Multi-denomination amount set
//! - [`AccAddress`] - Account address string
//! - [`Format`] - Wire format identifier

pub mod address;
pub mod coins;
pub mod error;

pub use address::AccAddress;
pub use coins::{Coin, CoinData, Coins};
pub use error::{CodecError, Result};

/// Wire format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Legacy JSON with a `type`/`value` wrapper
    Amino,
    /// REST JSON with an `@type` URL field
    Data,
    /// Protobuf binary
    Proto,
    /// Protobuf `Any` envelope
    Any,
}

/// Error returned when parsing a `Format` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFormatError {
    _private: (),
}

impl std::fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid format name, expected 'amino', 'data', 'proto', or 'any'"
        )
    }
}

impl std::error::Error for ParseFormatError {}

impl std::str::FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amino" => Ok(Format::Amino),
            "data" | "json" => Ok(Format::Data),
            "proto" | "protobuf" => Ok(Format::Proto),
            "any" => Ok(Format::Any),
            _ => Err(ParseFormatError { _private: () }),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Format {
    /// Check if this format is a JSON text format.
    pub fn is_json(&self) -> bool {
        matches!(self, Format::Amino | Format::Data)
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Amino => "amino",
            Format::Data => "data",
            Format::Proto => "proto",
            Format::Any => "any",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("amino".parse::<Format>(), Ok(Format::Amino));
        assert_eq!("AMINO".parse::<Format>(), Ok(Format::Amino));
        assert_eq!("json".parse::<Format>(), Ok(Format::Data));
        assert_eq!("protobuf".parse::<Format>(), Ok(Format::Proto));
        assert_eq!("any".parse::<Format>(), Ok(Format::Any));
        assert!("cbor".parse::<Format>().is_err());
    }

    #[test]
    fn test_format_kind() {
        assert!(Format::Amino.is_json());
        assert!(Format::Data.is_json());
        assert!(!Format::Proto.is_json());
        assert!(!Format::Any.is_json());
        assert_eq!(Format::Proto.to_string(), "proto");
    }
}

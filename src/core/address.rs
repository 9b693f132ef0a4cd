// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Account address strings.
//!
//! Addresses are carried as opaque strings. Construction never validates;
//! callers that need a format check use [`AccAddress::validate`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Bech32 human-readable prefix for account addresses.
pub const ACCOUNT_PREFIX: &str = "terra";

const BECH32_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Bech32-encoded account address (e.g., `terra1...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccAddress(String);

fn address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Data part incl. 6-char checksum: 38 chars for 20-byte accounts,
    // 58 chars for 32-byte contract addresses.
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            "^{ACCOUNT_PREFIX}1([{BECH32_CHARSET}]{{38}}|[{BECH32_CHARSET}]{{58}})$"
        ))
        .expect("valid address regex")
    })
}

impl AccAddress {
    /// Wrap an address string without validating it.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Check whether a string is shaped like a bech32 account address.
    ///
    /// This checks prefix, charset and length; the bech32 checksum itself
    /// is not verified.
    pub fn validate(address: &str) -> bool {
        address_pattern().is_match(address)
    }

    /// Check this address with [`AccAddress::validate`].
    pub fn is_valid(&self) -> bool {
        Self::validate(&self.0)
    }

    /// Borrow the address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AccAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for AccAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

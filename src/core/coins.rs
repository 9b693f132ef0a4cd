// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Multi-denomination amount sets.
//!
//! [`Coins`] holds at most one [`Coin`] per denomination, ordered by denom.
//! Duplicate denominations are merged by summing their amounts. Amounts are
//! non-negative integers and travel as decimal strings on every wire format.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{CodecError, Result};
use crate::encoding::protobuf::Coin as ProtoCoin;

/// A single denomination and amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coin {
    /// Denomination (e.g., "uluna")
    pub denom: String,
    /// Amount in the smallest unit
    pub amount: u128,
}

impl Coin {
    /// Create a new coin.
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Build a coin from its JSON form.
    pub fn from_data(data: &CoinData) -> Result<Self> {
        Ok(Self::new(data.denom.clone(), parse_amount(&data.amount)?))
    }

    /// Convert to the JSON form.
    pub fn to_data(&self) -> CoinData {
        CoinData {
            denom: self.denom.clone(),
            amount: self.amount.to_string(),
        }
    }

    /// Build a coin from its protobuf form.
    pub fn from_proto(proto: &ProtoCoin) -> Result<Self> {
        Ok(Self::new(proto.denom.clone(), parse_amount(&proto.amount)?))
    }

    /// Convert to the protobuf form.
    pub fn to_proto(&self) -> ProtoCoin {
        ProtoCoin {
            denom: self.denom.clone(),
            amount: self.amount.to_string(),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

fn coin_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]+)([a-zA-Z][a-zA-Z0-9/:._-]{2,127})$").expect("valid coin regex")
    })
}

impl FromStr for Coin {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = coin_pattern()
            .captures(s.trim())
            .ok_or_else(|| CodecError::parse("coin", format!("invalid coin string '{s}'")))?;
        Ok(Coin::new(&caps[2], parse_amount(&caps[1])?))
    }
}

/// JSON form of a coin, shared by the Amino and Data encodings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinData {
    pub denom: String,
    pub amount: String,
}

fn parse_amount(amount: &str) -> Result<u128> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::parse(
            "coin amount",
            format!("'{amount}' is not a non-negative integer"),
        ));
    }
    amount
        .parse::<u128>()
        .map_err(|e| CodecError::parse("coin amount", format!("'{amount}': {e}")))
}

/// A set of coins keyed by denomination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coins {
    coins: BTreeMap<String, Coin>,
}

impl Coins {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a coin, merging with an existing entry of the same denomination.
    pub fn add(&mut self, coin: Coin) -> Result<()> {
        match self.coins.get_mut(&coin.denom) {
            Some(existing) => {
                tracing::warn!(denom = %coin.denom, "merging duplicate coin denomination");
                existing.amount = existing.amount.checked_add(coin.amount).ok_or_else(|| {
                    CodecError::parse("coin amount", format!("overflow adding {}", coin.denom))
                })?;
            }
            None => {
                self.coins.insert(coin.denom.clone(), coin);
            }
        }
        Ok(())
    }

    /// Get the coin for a denomination.
    pub fn get(&self, denom: &str) -> Option<&Coin> {
        self.coins.get(denom)
    }

    /// Number of denominations.
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Check if the set has no denominations.
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Iterate over coins in denomination order.
    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.coins.values()
    }

    /// Check if every denomination has a zero amount.
    ///
    /// An empty set is all-zero.
    pub fn is_all_zero(&self) -> bool {
        self.coins.values().all(Coin::is_zero)
    }

    fn from_coins<'a, I, F, T>(items: I, convert: F) -> Result<Self>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
        F: Fn(&T) -> Result<Coin>,
    {
        let mut coins = Coins::new();
        for item in items {
            coins.add(convert(item)?)?;
        }
        Ok(coins)
    }

    /// Parse from the Amino JSON form.
    pub fn from_amino(data: &[CoinData]) -> Result<Self> {
        Self::from_coins(data, Coin::from_data)
    }

    /// Convert to the Amino JSON form.
    pub fn to_amino(&self) -> Vec<CoinData> {
        self.iter().map(Coin::to_data).collect()
    }

    /// Parse from the Data JSON form.
    pub fn from_data(data: &[CoinData]) -> Result<Self> {
        Self::from_coins(data, Coin::from_data)
    }

    /// Convert to the Data JSON form.
    pub fn to_data(&self) -> Vec<CoinData> {
        self.iter().map(Coin::to_data).collect()
    }

    /// Parse from the protobuf form. An empty list yields an empty set.
    pub fn from_proto(proto: &[ProtoCoin]) -> Result<Self> {
        Self::from_coins(proto, Coin::from_proto)
    }

    /// Convert to the protobuf form.
    pub fn to_proto(&self) -> Vec<ProtoCoin> {
        self.iter().map(Coin::to_proto).collect()
    }
}

impl FromStr for Coins {
    type Err = CodecError;

    /// Parse a comma-separated list such as `"100uluna,20uusd"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut coins = Coins::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            coins.add(part.parse()?)?;
        }
        Ok(coins)
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(Coin::to_string).collect();
        f.write_str(&parts.join(","))
    }
}

/// Collecting merges duplicate denominations and saturates at `u128::MAX`
/// on overflow. Use [`Coins::add`] to get an error instead.
impl FromIterator<Coin> for Coins {
    fn from_iter<I: IntoIterator<Item = Coin>>(iter: I) -> Self {
        let mut coins = Coins::new();
        for coin in iter {
            let entry = coins
                .coins
                .entry(coin.denom.clone())
                .or_insert_with(|| Coin::new(coin.denom.clone(), 0));
            entry.amount = entry.amount.saturating_add(coin.amount);
        }
        coins
    }
}

/// Saturates on overflow, like the [`FromIterator`] impl.
impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        coins.into_iter().collect()
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        std::iter::once(coin).collect()
    }
}

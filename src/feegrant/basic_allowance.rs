// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Basic fee allowance.
//!
//! A one-time grant of tokens that optionally expires. The grantee can use
//! up to the spend limit to cover fees until the expiration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{CodecError, CoinData, Coins, Result};
use crate::encoding::protobuf::{self, timestamp_from_proto, timestamp_to_proto};
use crate::encoding::timestamp::{check_timestamp_range, format_timestamp, parse_timestamp};
use crate::encoding::{AminoCodec, AnyCodec, DataCodec, ProtoCodec};

/// Allowance with an optional spend limit and an optional expiration.
///
/// At least one of a spend limit with a non-zero denomination or an
/// expiration is always present. An empty spend limit is stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAllowance {
    spend_limit: Option<Coins>,
    expiration: Option<DateTime<Utc>>,
}

impl BasicAllowance {
    /// Create an allowance, rejecting one that grants nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidAllowance`] when the spend limit is absent
    /// or all-zero and there is no expiration, and [`CodecError::ParseError`]
    /// when the expiration lies outside years 0001 to 9999.
    pub fn new(spend_limit: Option<Coins>, expiration: Option<DateTime<Utc>>) -> Result<Self> {
        Self::validate(spend_limit.as_ref(), expiration.as_ref())?;
        if let Some(expiration) = &expiration {
            check_timestamp_range(expiration)?;
        }
        Ok(Self {
            spend_limit: spend_limit.filter(|coins| !coins.is_empty()),
            expiration,
        })
    }

    /// Check the construction invariant without building an allowance.
    pub fn validate(spend_limit: Option<&Coins>, expiration: Option<&DateTime<Utc>>) -> Result<()> {
        let zero_limit = spend_limit.map_or(true, Coins::is_all_zero);
        if zero_limit && expiration.is_none() {
            return Err(CodecError::invalid_allowance(
                "cannot set both of spend_limit and expiration empty",
            ));
        }
        Ok(())
    }

    /// Spend limit, `None` when unbounded.
    pub fn spend_limit(&self) -> Option<&Coins> {
        self.spend_limit.as_ref()
    }

    /// Expiration, `None` when the allowance never expires.
    pub fn expiration(&self) -> Option<&DateTime<Utc>> {
        self.expiration.as_ref()
    }

    fn from_json_fields(
        spend_limit: Option<&[CoinData]>,
        expiration: Option<&str>,
        from_coins: fn(&[CoinData]) -> Result<Coins>,
    ) -> Result<Self> {
        let spend_limit = spend_limit.map(from_coins).transpose()?;
        let expiration = expiration
            .filter(|s| !s.is_empty())
            .map(parse_timestamp)
            .transpose()?;
        Self::new(spend_limit, expiration)
    }
}

/// Amino JSON form: `{"type": "feegrant/BasicAllowance", "value": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicAllowanceAmino {
    #[serde(rename = "type")]
    pub amino_type: String,
    pub value: BasicAllowanceAminoValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicAllowanceAminoValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spend_limit: Option<Vec<CoinData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
}

/// Data JSON form: `{"@type": "/cosmos.feegrant.v1beta1.BasicAllowance", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicAllowanceData {
    #[serde(rename = "@type")]
    pub type_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spend_limit: Option<Vec<CoinData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
}

impl AminoCodec for BasicAllowance {
    type Amino = BasicAllowanceAmino;

    const AMINO_TYPE: &'static str = "feegrant/BasicAllowance";

    fn from_amino(amino: BasicAllowanceAmino) -> Result<Self> {
        if amino.amino_type != Self::AMINO_TYPE {
            return Err(CodecError::type_not_found(amino.amino_type));
        }
        let BasicAllowanceAminoValue {
            spend_limit,
            expiration,
        } = amino.value;
        Self::from_json_fields(
            spend_limit.as_deref(),
            expiration.as_deref(),
            Coins::from_amino,
        )
    }

    fn to_amino(&self) -> Result<BasicAllowanceAmino> {
        Ok(BasicAllowanceAmino {
            amino_type: Self::AMINO_TYPE.to_string(),
            value: BasicAllowanceAminoValue {
                spend_limit: self.spend_limit.as_ref().map(Coins::to_amino),
                expiration: self.expiration.as_ref().map(format_timestamp),
            },
        })
    }
}

impl DataCodec for BasicAllowance {
    type Data = BasicAllowanceData;

    fn from_data(data: BasicAllowanceData) -> Result<Self> {
        if data.type_url != Self::TYPE_URL {
            return Err(CodecError::type_not_found(data.type_url));
        }
        Self::from_json_fields(
            data.spend_limit.as_deref(),
            data.expiration.as_deref(),
            Coins::from_data,
        )
    }

    fn to_data(&self) -> Result<BasicAllowanceData> {
        Ok(BasicAllowanceData {
            type_url: Self::TYPE_URL.to_string(),
            spend_limit: self.spend_limit.as_ref().map(Coins::to_data),
            expiration: self.expiration.as_ref().map(format_timestamp),
        })
    }
}

impl ProtoCodec for BasicAllowance {
    type Proto = protobuf::BasicAllowance;

    /// An empty `spend_limit` list decodes to an empty set; the invariant is
    /// then checked as on every other path.
    fn from_proto(proto: protobuf::BasicAllowance) -> Result<Self> {
        let spend_limit = Coins::from_proto(&proto.spend_limit)?;
        let expiration = proto
            .expiration
            .as_ref()
            .map(timestamp_from_proto)
            .transpose()?;
        Self::new(Some(spend_limit), expiration)
    }

    fn to_proto(&self) -> protobuf::BasicAllowance {
        protobuf::BasicAllowance {
            spend_limit: self
                .spend_limit
                .as_ref()
                .map(Coins::to_proto)
                .unwrap_or_default(),
            expiration: self.expiration.as_ref().map(timestamp_to_proto),
        }
    }
}

impl AnyCodec for BasicAllowance {
    const TYPE_URL: &'static str = "/cosmos.feegrant.v1beta1.BasicAllowance";
}

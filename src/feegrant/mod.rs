// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fee-grant allowances.
//!
//! [`BasicAllowance`] is the concrete allowance type. [`Allowance`] is the
//! polymorphic wrapper that decodes any registered allowance by the tag its
//! input carries: the Amino `type`, the Data `@type` or the `Any` type URL.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use txcodec::feegrant::Allowance;
//!
//! let allowance = Allowance::from_data_json(serde_json::json!({
//!     "@type": "/cosmos.feegrant.v1beta1.BasicAllowance",
//!     "expiration": "2030-01-01T00:00:00Z"
//! }))?;
//! let any = allowance.pack_any();
//! assert_eq!(Allowance::unpack_any(&any)?, allowance);
//! # Ok(())
//! # }
//! ```

pub mod basic_allowance;

use std::sync::OnceLock;

use prost_types::Any;
use serde_json::Value;

use crate::core::Result;
use crate::encoding::{AminoCodec, AnyCodec, DataCodec, ProtoCodec, TypeEntry, TypeUrlRegistry};

pub use basic_allowance::{
    BasicAllowance, BasicAllowanceAmino, BasicAllowanceAminoValue, BasicAllowanceData,
};

/// Any registered fee allowance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allowance {
    /// One-time grant with an optional spend limit and expiration
    Basic(BasicAllowance),
}

impl Allowance {
    /// Protobuf type URL of the wrapped allowance.
    pub fn type_url(&self) -> &'static str {
        match self {
            Allowance::Basic(_) => BasicAllowance::TYPE_URL,
        }
    }

    /// Amino type tag of the wrapped allowance.
    pub fn amino_type(&self) -> &'static str {
        match self {
            Allowance::Basic(_) => BasicAllowance::AMINO_TYPE,
        }
    }

    /// Decode an Amino JSON value by its `type` tag.
    pub fn from_amino_json(value: Value) -> Result<Self> {
        allowance_registry().decode_amino(value)
    }

    /// Decode a Data JSON value by its `@type` URL.
    pub fn from_data_json(value: Value) -> Result<Self> {
        allowance_registry().decode_data(value)
    }

    /// Decode an `Any` by its type URL.
    pub fn unpack_any(any: &Any) -> Result<Self> {
        allowance_registry().decode_any(any)
    }

    /// Convert to the Amino JSON form.
    pub fn to_amino_json(&self) -> Result<Value> {
        match self {
            Allowance::Basic(a) => a.to_amino_json(),
        }
    }

    /// Convert to the Data JSON form.
    pub fn to_data_json(&self) -> Result<Value> {
        match self {
            Allowance::Basic(a) => a.to_data_json(),
        }
    }

    /// Encode the wrapped allowance's protobuf message.
    pub fn to_proto_bytes(&self) -> Vec<u8> {
        match self {
            Allowance::Basic(a) => a.to_proto_bytes(),
        }
    }

    /// Wrap in an `Any` tagged with the allowance's type URL.
    pub fn pack_any(&self) -> Any {
        match self {
            Allowance::Basic(a) => a.pack_any(),
        }
    }
}

impl From<BasicAllowance> for Allowance {
    fn from(allowance: BasicAllowance) -> Self {
        Allowance::Basic(allowance)
    }
}

impl TypeEntry<Allowance> {
    /// Registry entry for [`BasicAllowance`].
    pub fn basic_allowance() -> Self {
        TypeEntry {
            type_url: BasicAllowance::TYPE_URL,
            amino_type: BasicAllowance::AMINO_TYPE,
            from_proto_bytes: |data| BasicAllowance::from_proto_bytes(data).map(Allowance::Basic),
            from_amino_json: |value| BasicAllowance::from_amino_json(value).map(Allowance::Basic),
            from_data_json: |value| BasicAllowance::from_data_json(value).map(Allowance::Basic),
        }
    }
}

static ALLOWANCE_REGISTRY: OnceLock<TypeUrlRegistry<Allowance>> = OnceLock::new();

fn init_allowance_registry() -> TypeUrlRegistry<Allowance> {
    TypeUrlRegistry::with_entries([TypeEntry::basic_allowance()])
}

/// Get the global allowance registry.
///
/// Pre-populated with the built-in allowance types; further types can be
/// added at runtime with [`TypeUrlRegistry::register`].
pub fn allowance_registry() -> &'static TypeUrlRegistry<Allowance> {
    ALLOWANCE_REGISTRY.get_or_init(init_allowance_registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodecError;
    use serde_json::json;

    #[test]
    fn test_registry_has_basic_allowance() {
        let registry = allowance_registry();
        assert!(registry.contains(BasicAllowance::TYPE_URL).unwrap());
        assert_eq!(
            registry
                .get_by_amino_type("feegrant/BasicAllowance")
                .unwrap()
                .type_url,
            BasicAllowance::TYPE_URL
        );
    }

    #[test]
    fn test_dispatch_amino() {
        let allowance = Allowance::from_amino_json(json!({
            "type": "feegrant/BasicAllowance",
            "value": {"spend_limit": [{"denom": "uluna", "amount": "10"}]}
        }))
        .unwrap();
        assert_eq!(allowance.type_url(), BasicAllowance::TYPE_URL);
        assert_eq!(allowance.amino_type(), "feegrant/BasicAllowance");
    }

    #[test]
    fn test_dispatch_unknown_tag() {
        let err = Allowance::from_amino_json(json!({
            "type": "feegrant/PeriodicAllowance",
            "value": {}
        }))
        .unwrap_err();
        assert_eq!(err, CodecError::type_not_found("feegrant/PeriodicAllowance"));
    }

    #[test]
    fn test_any_round_trip() {
        let basic = BasicAllowance::new(Some("7uusd".parse().unwrap()), None).unwrap();
        let allowance = Allowance::from(basic.clone());
        let any = allowance.pack_any();
        assert_eq!(any, basic.pack_any());
        assert_eq!(allowance.to_proto_bytes(), any.value);
        assert_eq!(Allowance::unpack_any(&any).unwrap(), allowance);
    }

    #[test]
    fn test_data_round_trip() {
        let value = json!({
            "@type": "/cosmos.feegrant.v1beta1.BasicAllowance",
            "expiration": "2030-01-01T00:00:00.250Z"
        });
        let allowance = Allowance::from_data_json(value.clone()).unwrap();
        assert_eq!(allowance.to_data_json().unwrap(), value);
        assert_eq!(
            allowance.to_amino_json().unwrap()["value"]["expiration"],
            "2030-01-01T00:00:00.250Z"
        );
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Per-format conversion traits.
//!
//! Every entity has one canonical in-memory type and implements a thin
//! adapter trait per wire format:
//!
//! - **Amino** ([`AminoCodec`]) - legacy JSON with a `type`/`value` wrapper
//! - **Data** ([`DataCodec`]) - REST JSON with an `@type` URL field
//! - **Proto** ([`ProtoCodec`]) - protobuf binary via prost
//! - **Any** ([`AnyCodec`]) - protobuf `Any` envelope tagged with a type URL
//!
//! Validation lives in the entity's constructor, so every `from_*` adapter
//! only parses fields and then delegates to it.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use txcodec::encoding::{AminoCodec, AnyCodec};
//! use txcodec::feegrant::BasicAllowance;
//!
//! let allowance = BasicAllowance::new(Some("100uluna".parse()?), None)?;
//! let any = allowance.pack_any();
//! assert_eq!(BasicAllowance::unpack_any(&any)?, allowance);
//!
//! let json = allowance.to_amino_json()?;
//! assert_eq!(json["type"], "feegrant/BasicAllowance");
//! # Ok(())
//! # }
//! ```

use prost_types::Any;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::core::{CodecError, Result};
use crate::encoding::protobuf::{decode_message, encode_message};

// =============================================================================
// JSON Codecs
// =============================================================================

/// Conversion to and from the legacy Amino JSON form.
pub trait AminoCodec: Sized {
    /// Serde model of the Amino form.
    type Amino: Serialize + DeserializeOwned;

    /// Amino type tag (e.g., "feegrant/BasicAllowance").
    const AMINO_TYPE: &'static str;

    /// Build the entity from its Amino form.
    fn from_amino(amino: Self::Amino) -> Result<Self>;

    /// Convert the entity to its Amino form.
    fn to_amino(&self) -> Result<Self::Amino>;

    /// Build the entity from an untyped Amino JSON value.
    fn from_amino_json(value: Value) -> Result<Self> {
        Self::from_amino(serde_json::from_value(value)?)
    }

    /// Convert the entity to an untyped Amino JSON value.
    fn to_amino_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_amino()?)?)
    }
}

/// Conversion to and from the REST Data JSON form.
pub trait DataCodec: Sized {
    /// Serde model of the Data form.
    type Data: Serialize + DeserializeOwned;

    /// Build the entity from its Data form.
    fn from_data(data: Self::Data) -> Result<Self>;

    /// Convert the entity to its Data form.
    fn to_data(&self) -> Result<Self::Data>;

    /// Build the entity from an untyped Data JSON value.
    fn from_data_json(value: Value) -> Result<Self> {
        Self::from_data(serde_json::from_value(value)?)
    }

    /// Convert the entity to an untyped Data JSON value.
    fn to_data_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_data()?)?)
    }
}

// =============================================================================
// Binary Codecs
// =============================================================================

/// Conversion to and from the protobuf message.
pub trait ProtoCodec: Sized {
    /// Generated prost message type.
    type Proto: prost::Message + Default;

    /// Build the entity from a decoded protobuf message.
    fn from_proto(proto: Self::Proto) -> Result<Self>;

    /// Convert the entity to its protobuf message.
    fn to_proto(&self) -> Self::Proto;

    /// Encode the entity to protobuf bytes.
    fn to_proto_bytes(&self) -> Vec<u8> {
        encode_message(&self.to_proto())
    }

    /// Decode the entity from protobuf bytes.
    fn from_proto_bytes(data: &[u8]) -> Result<Self> {
        Self::from_proto(decode_message(data)?)
    }
}

/// Packing into and out of a protobuf `Any` envelope.
pub trait AnyCodec: ProtoCodec {
    /// Type URL (e.g., "/cosmos.feegrant.v1beta1.BasicAllowance").
    const TYPE_URL: &'static str;

    /// Wrap the encoded protobuf form in an `Any`.
    fn pack_any(&self) -> Any {
        Any {
            type_url: Self::TYPE_URL.to_string(),
            value: self.to_proto_bytes(),
        }
    }

    /// Unwrap an `Any` carrying this type.
    ///
    /// Fails with [`CodecError::TypeNotFound`] when the type URL does not
    /// match, or with the decoder's error on malformed bytes.
    fn unpack_any(any: &Any) -> Result<Self> {
        if any.type_url != Self::TYPE_URL {
            return Err(CodecError::type_not_found(any.type_url.clone()));
        }
        Self::from_proto_bytes(&any.value)
    }
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Protobuf wire types.
//!
//! Field numbers follow `cosmos.base.v1beta1.Coin` and
//! `cosmos.feegrant.v1beta1.BasicAllowance`.

/// `cosmos.base.v1beta1.Coin`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub amount: ::prost::alloc::string::String,
}

/// `cosmos.feegrant.v1beta1.BasicAllowance`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BasicAllowance {
    /// Maximum amount the grantee may spend; empty means unbounded.
    #[prost(message, repeated, tag = "1")]
    pub spend_limit: ::prost::alloc::vec::Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub expiration: ::core::option::Option<::prost_types::Timestamp>,
}

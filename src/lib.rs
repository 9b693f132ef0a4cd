// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Txcodec
//!
//! Transcoding library for blockchain transaction messages and fee-grant
//! allowances.
//!
//! Every entity has one canonical in-memory type and converts to and from:
//! - **Amino** - legacy JSON with a `type` tag and a `value` body
//! - **Data** - REST JSON with an `@type` URL field
//! - **Proto** - protobuf binary
//! - **Any** - protobuf `Any` envelope tagged with a type URL
//!
//! ## Architecture
//!
//! - `core/` - Errors, [`Coins`], [`AccAddress`], [`Format`]
//! - `encoding/` - Conversion traits, prost wire types, JSON payloads,
//!   timestamps and the type URL registry
//! - `feegrant/` - Fee allowances ([`feegrant::BasicAllowance`])
//! - `wasm/` - Contract messages ([`wasm::MsgInstantiateContract`])
//!
//! ## Example: Allowance round trip
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use txcodec::encoding::{AminoCodec, AnyCodec};
//! use txcodec::feegrant::BasicAllowance;
//!
//! let allowance = BasicAllowance::from_amino_json(serde_json::json!({
//!     "type": "feegrant/BasicAllowance",
//!     "value": {"spend_limit": [{"denom": "uluna", "amount": "100"}]}
//! }))?;
//! let any = allowance.pack_any();
//! assert_eq!(BasicAllowance::unpack_any(&any)?, allowance);
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Instantiate message
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use txcodec::encoding::DataCodec;
//! use txcodec::wasm::MsgInstantiateContract;
//!
//! let msg = MsgInstantiateContract::new("terra1...", "terra1...", 5, serde_json::json!({"count": 0}));
//! let data = msg.to_data()?;
//! assert_eq!(data.value.code_id, "5");
//! assert_eq!(data.value.init_msg, r#"{"count":0}"#);
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{AccAddress, CodecError, Coin, CoinData, Coins, Format, Result};

// Encoding/decoding
pub mod encoding;

// Fee-grant allowances
pub mod feegrant;

// Wasm contract messages
pub mod wasm;

pub use encoding::{AminoCodec, AnyCodec, DataCodec, ProtoCodec};
pub use feegrant::{Allowance, BasicAllowance};
pub use wasm::MsgInstantiateContract;

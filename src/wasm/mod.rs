// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wasm contract messages.
//!
//! Contract messages embed a free-form JSON payload as a raw string on the
//! wire and carry integer ids as decimal strings.

pub mod msg_instantiate_contract;

pub use msg_instantiate_contract::{
    MsgInstantiateContract, MsgInstantiateContractData, MsgInstantiateContractValue,
};

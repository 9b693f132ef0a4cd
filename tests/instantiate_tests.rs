// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Instantiate-contract message integration tests.
//!
//! Tests cover:
//! - Decimal-string `code_id` parsing and formatting
//! - Raw JSON `init_msg` decoding and re-encoding
//! - Fixture decoding and JSON round trips

use std::path::PathBuf;

use serde_json::json;

use txcodec::encoding::{raw_to_dict, AminoCodec, DataCodec};
use txcodec::wasm::MsgInstantiateContract;
use txcodec::{AccAddress, CodecError, Coin};

const CREATOR: &str = "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v";

fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> serde_json::Value {
    let text = std::fs::read_to_string(fixture_path(name)).expect("fixture should exist");
    serde_json::from_str(&text).expect("fixture should be valid JSON")
}

fn with_code_id(code_id: &str) -> serde_json::Value {
    json!({
        "type": "wasm/MsgInstantiateContract",
        "value": {
            "creator": CREATOR,
            "admin": CREATOR,
            "code_id": code_id,
            "init_msg": "{\"key\":1}",
            "init_coins": [],
            "migratable": false
        }
    })
}

#[test]
fn test_decode_fixture() {
    let msg = MsgInstantiateContract::from_data_json(load_fixture("instantiate_data.json")).unwrap();

    assert_eq!(msg.creator, AccAddress::new(CREATOR));
    assert!(msg.creator.is_valid());
    assert_eq!(msg.code_id, 42);
    assert_eq!(msg.init_msg, json!({"count": 1, "owner": {"name": "alice"}}));
    assert_eq!(msg.init_coins.get("uluna"), Some(&Coin::new("uluna", 1000)));
    assert!(msg.migratable);
}

#[test]
fn test_fixture_round_trip() {
    let input = load_fixture("instantiate_data.json");
    let msg = MsgInstantiateContract::from_data_json(input.clone()).unwrap();
    let output = msg.to_data_json().unwrap();

    assert_eq!(output["type"], input["type"]);
    assert_eq!(output["value"]["code_id"], "42");
    assert_eq!(output["value"]["init_coins"], input["value"]["init_coins"]);
    let reencoded = output["value"]["init_msg"].as_str().unwrap();
    let original = input["value"]["init_msg"].as_str().unwrap();
    assert_eq!(raw_to_dict(reencoded).unwrap(), raw_to_dict(original).unwrap());

    assert_eq!(MsgInstantiateContract::from_data_json(output).unwrap(), msg);
}

#[test]
fn test_code_id_boundaries() {
    let zero = MsgInstantiateContract::from_data_json(with_code_id("0")).unwrap();
    assert_eq!(zero.code_id, 0);

    let max = MsgInstantiateContract::from_data_json(with_code_id("18446744073709551615")).unwrap();
    assert_eq!(max.code_id, u64::MAX);

    let err = MsgInstantiateContract::from_data_json(with_code_id("abc")).unwrap_err();
    assert!(matches!(err, CodecError::NumericParse { ref field, .. } if field == "code_id"));

    let overflow = MsgInstantiateContract::from_data_json(with_code_id("18446744073709551616"));
    assert!(overflow.unwrap_err().is_numeric_parse());
}

#[test]
fn test_code_id_to_data() {
    let msg = MsgInstantiateContract::new(CREATOR, CREATOR, 5, json!({}));
    assert_eq!(msg.to_data().unwrap().value.code_id, "5");
}

#[test]
fn test_init_msg_scenario() {
    let msg = MsgInstantiateContract::from_data_json(with_code_id("1")).unwrap();
    assert_eq!(msg.init_msg, json!({"key": 1}));

    let raw = msg.to_data().unwrap().value.init_msg;
    assert_eq!(raw_to_dict(&raw).unwrap(), json!({"key": 1}));
}

#[test]
fn test_amino_alias() {
    let msg = MsgInstantiateContract::new(CREATOR, CREATOR, 7, json!({"a": [1, {"b": null}]}))
        .with_init_coins("5uluna,6uusd".parse::<txcodec::Coins>().unwrap())
        .with_migratable(true);

    let amino = msg.to_amino_json().unwrap();
    assert_eq!(amino["type"], "wasm/MsgInstantiateContract");
    assert_eq!(MsgInstantiateContract::from_amino_json(amino).unwrap(), msg);
}

#[test]
fn test_bad_coins_propagate() {
    let mut value = with_code_id("1");
    value["value"]["init_coins"] = json!([{"denom": "uluna", "amount": "-3"}]);
    let err = MsgInstantiateContract::from_data_json(value).unwrap_err();
    assert!(matches!(err, CodecError::ParseError { ref context, .. } if context == "coin amount"));
}

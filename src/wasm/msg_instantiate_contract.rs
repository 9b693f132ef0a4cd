// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Contract instantiation message.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{AccAddress, CodecError, CoinData, Coins, Result};
use crate::encoding::json::{dict_to_raw, raw_to_dict};
use crate::encoding::{AminoCodec, DataCodec};

/// Instantiates a contract from uploaded code.
#[derive(Debug, Clone, PartialEq)]
pub struct MsgInstantiateContract {
    /// Contract creator
    pub creator: AccAddress,
    /// Admin address allowed to migrate the contract
    pub admin: AccAddress,
    /// Reference to the code on chain
    pub code_id: u64,
    /// Contract-specific init message
    pub init_msg: Value,
    /// Coins sent to the contract on instantiation
    pub init_coins: Coins,
    /// Whether the contract can be migrated
    pub migratable: bool,
}

impl MsgInstantiateContract {
    /// Create a message with no init coins that is not migratable.
    pub fn new(
        creator: impl Into<AccAddress>,
        admin: impl Into<AccAddress>,
        code_id: u64,
        init_msg: Value,
    ) -> Self {
        Self {
            creator: creator.into(),
            admin: admin.into(),
            code_id,
            init_msg,
            init_coins: Coins::new(),
            migratable: false,
        }
    }

    /// Set the coins sent with the instantiation.
    pub fn with_init_coins(mut self, init_coins: impl Into<Coins>) -> Self {
        self.init_coins = init_coins.into();
        self
    }

    /// Set the migratable flag.
    pub fn with_migratable(mut self, migratable: bool) -> Self {
        self.migratable = migratable;
        self
    }
}

/// Tagged JSON form: `{"type": "wasm/MsgInstantiateContract", "value": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgInstantiateContractData {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub value: MsgInstantiateContractValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MsgInstantiateContractValue {
    pub creator: AccAddress,
    pub admin: AccAddress,
    pub code_id: String,
    pub init_msg: String,
    #[serde(default)]
    pub init_coins: Vec<CoinData>,
    #[serde(default)]
    pub migratable: bool,
}

fn parse_code_id(code_id: &str) -> Result<u64> {
    code_id
        .parse::<u64>()
        .map_err(|e| CodecError::numeric_parse("code_id", code_id, e.to_string()))
}

impl DataCodec for MsgInstantiateContract {
    type Data = MsgInstantiateContractData;

    fn from_data(data: MsgInstantiateContractData) -> Result<Self> {
        if data.msg_type != Self::AMINO_TYPE {
            return Err(CodecError::type_not_found(data.msg_type));
        }
        let MsgInstantiateContractValue {
            creator,
            admin,
            code_id,
            init_msg,
            init_coins,
            migratable,
        } = data.value;

        Ok(Self {
            creator,
            admin,
            code_id: parse_code_id(&code_id)?,
            init_msg: raw_to_dict(&init_msg)?,
            init_coins: Coins::from_data(&init_coins)?,
            migratable,
        })
    }

    fn to_data(&self) -> Result<MsgInstantiateContractData> {
        Ok(MsgInstantiateContractData {
            msg_type: Self::AMINO_TYPE.to_string(),
            value: MsgInstantiateContractValue {
                creator: self.creator.clone(),
                admin: self.admin.clone(),
                code_id: self.code_id.to_string(),
                init_msg: dict_to_raw(&self.init_msg)?,
                init_coins: self.init_coins.to_data(),
                migratable: self.migratable,
            },
        })
    }
}

// Legacy Amino uses the same tagged shape as Data.
impl AminoCodec for MsgInstantiateContract {
    type Amino = MsgInstantiateContractData;

    const AMINO_TYPE: &'static str = "wasm/MsgInstantiateContract";

    fn from_amino(amino: MsgInstantiateContractData) -> Result<Self> {
        Self::from_data(amino)
    }

    fn to_amino(&self) -> Result<MsgInstantiateContractData> {
        self.to_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coin;
    use serde_json::json;

    fn sample_json(code_id: &str, init_msg: &str) -> Value {
        json!({
            "type": "wasm/MsgInstantiateContract",
            "value": {
                "creator": "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v",
                "admin": "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v",
                "code_id": code_id,
                "init_msg": init_msg,
                "init_coins": [{"denom": "uluna", "amount": "1000"}],
                "migratable": true
            }
        })
    }

    #[test]
    fn test_from_data() {
        let msg = MsgInstantiateContract::from_data_json(sample_json("3", r#"{"key":1}"#)).unwrap();
        assert_eq!(msg.code_id, 3);
        assert_eq!(msg.init_msg, json!({"key": 1}));
        assert_eq!(msg.init_coins.get("uluna"), Some(&Coin::new("uluna", 1000)));
        assert!(msg.migratable);
    }

    #[test]
    fn test_wrong_type_tag() {
        let mut value = sample_json("1", "{}");
        value["type"] = json!("bank/MsgSend");
        let err = MsgInstantiateContract::from_data_json(value.clone()).unwrap_err();
        assert!(matches!(err, CodecError::TypeNotFound { ref type_name } if type_name == "bank/MsgSend"));
        assert!(MsgInstantiateContract::from_amino_json(value).is_err());
    }

    #[test]
    fn test_code_id_zero() {
        let msg = MsgInstantiateContract::from_data_json(sample_json("0", "{}")).unwrap();
        assert_eq!(msg.code_id, 0);
    }

    #[test]
    fn test_code_id_not_numeric() {
        for bad in ["abc", "", "-1", "1.5", "1e3"] {
            let err = MsgInstantiateContract::from_data_json(sample_json(bad, "{}")).unwrap_err();
            assert!(err.is_numeric_parse(), "expected numeric parse error for {bad:?}");
        }
    }

    #[test]
    fn test_code_id_serialized_as_plain_integer() {
        let msg = MsgInstantiateContract::new("a", "b", 5, json!({}));
        let data = msg.to_data().unwrap();
        assert_eq!(data.value.code_id, "5");
    }

    #[test]
    fn test_init_msg_round_trip() {
        let msg = MsgInstantiateContract::from_data_json(sample_json("1", "{\"key\":1}")).unwrap();
        let raw = msg.to_data().unwrap().value.init_msg;
        assert_eq!(raw_to_dict(&raw).unwrap(), json!({"key": 1}));
    }

    #[test]
    fn test_malformed_init_msg() {
        let err = MsgInstantiateContract::from_data_json(sample_json("1", "{not json")).unwrap_err();
        assert!(matches!(err, CodecError::ParseError { ref context, .. } if context == "json payload"));
    }

    #[test]
    fn test_defaults() {
        let msg = MsgInstantiateContract::new("creator", "admin", 1, json!({"a": 1}));
        assert!(msg.init_coins.is_empty());
        assert!(!msg.migratable);

        let data = msg.to_data_json().unwrap();
        assert_eq!(data["value"]["init_coins"], json!([]));
        assert_eq!(data["value"]["migratable"], json!(false));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let msg = MsgInstantiateContract::from_data_json(json!({
            "type": "wasm/MsgInstantiateContract",
            "value": {
                "creator": "c",
                "admin": "a",
                "code_id": "9",
                "init_msg": "null"
            }
        }))
        .unwrap();
        assert!(msg.init_coins.is_empty());
        assert!(!msg.migratable);
        assert!(msg.init_msg.is_null());
    }

    #[test]
    fn test_amino_matches_data() {
        let msg = MsgInstantiateContract::new("c", "a", 2, json!({"x": [1, 2]}))
            .with_init_coins(Coin::new("uusd", 3))
            .with_migratable(true);
        assert_eq!(msg.to_amino_json().unwrap(), msg.to_data_json().unwrap());
        let back = MsgInstantiateContract::from_amino(msg.to_amino().unwrap()).unwrap();
        assert_eq!(back, msg);
    }
}

// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::{anyhow, Context};
use serde::Deserialize;
use serde_json::Value;

use crate::account::AccountInfo;
use crate::tx::TxInfo;

/// Serde helpers for integers that the LCD encodes as JSON strings.
///
/// Deserialization accepts both `"42"` and `42`; serialization always emits a string.
pub mod stringified {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Str(String),
        Raw(T),
    }

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr + Deserialize<'de>,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        match Repr::<T>::deserialize(deserializer)? {
            Repr::Str(s) => s.parse().map_err(Error::custom),
            Repr::Raw(v) => Ok(v),
        }
    }
}

#[derive(Deserialize)]
struct GetTxResponse {
    tx_response: TxInfo,
}

#[derive(Deserialize)]
struct GasInfo {
    #[serde(with = "stringified")]
    gas_used: u64,
}

#[derive(Deserialize)]
struct SimulateResponse {
    gas_info: GasInfo,
}

/// Parse the body of `GET /cosmos/tx/v1beta1/txs/{hash}`.
pub fn decode_tx_info(body: Value) -> anyhow::Result<TxInfo> {
    let response: GetTxResponse =
        serde_json::from_value(body).context("error parsing tx response")?;
    Ok(response.tx_response)
}

/// Parse the body of `POST /cosmos/tx/v1beta1/simulate` into the gas used.
pub fn decode_gas_used(body: Value) -> anyhow::Result<u64> {
    let response: SimulateResponse =
        serde_json::from_value(body).context("error parsing simulate response")?;
    Ok(response.gas_info.gas_used)
}

/// Parse the body of `GET /cosmos/auth/v1beta1/accounts/{address}`.
///
/// Vesting and module accounts wrap the base account, so the base account is
/// located by walking the known wrapper fields.
pub fn decode_account_info(body: Value) -> anyhow::Result<AccountInfo> {
    let mut account = body
        .get("account")
        .cloned()
        .ok_or_else(|| anyhow!("response has no account field"))?;
    for wrapper in ["base_vesting_account", "base_account"] {
        if let Some(inner) = account.get(wrapper) {
            account = inner.clone();
        }
    }
    serde_json::from_value(account).context("error parsing account")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_failed_tx_response() {
        let body = json!({
            "tx": {},
            "tx_response": {
                "height": "7441093",
                "txhash": "5E4D9E2F6A0C3B1D7F8E9A0B1C2D3E4F5A6B7C8D9E0F1A2B3C4D5E6F7A8B9C0D",
                "codespace": "wasm",
                "code": 5,
                "data": "",
                "raw_log": "failed to execute message; message index: 0: insufficient funds",
                "logs": [],
                "info": "",
                "gas_wanted": "250000",
                "gas_used": "120345",
                "timestamp": "2022-05-01T10:00:00Z"
            }
        });
        let info = decode_tx_info(body).unwrap();
        assert_eq!(info.height, 7441093);
        assert_eq!(info.code, 5);
        assert_eq!(info.codespace, "wasm");
        assert_eq!(info.gas_used, 120345);
        assert!(info.is_error());
    }

    #[test]
    fn decodes_simulate_response() {
        let body = json!({
            "gas_info": {"gas_wanted": "0", "gas_used": "91234"},
            "result": {"data": "", "log": "", "events": []}
        });
        assert_eq!(decode_gas_used(body).unwrap(), 91234);
    }

    #[test]
    fn decodes_base_account() {
        let body = json!({
            "account": {
                "@type": "/cosmos.auth.v1beta1.BaseAccount",
                "address": "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v",
                "pub_key": {
                    "@type": "/cosmos.crypto.secp256k1.PubKey",
                    "key": "AjszqFJDRAYbEjZMuiD+ChqzbUSGq/RRu3zr0R6iJB5b"
                },
                "account_number": "68",
                "sequence": "12"
            }
        });
        let account = decode_account_info(body).unwrap();
        assert_eq!(account.account_number, 68);
        assert_eq!(account.sequence, 12);
        assert!(account.public_key.is_some());
    }

    #[test]
    fn decodes_vesting_account_without_key() {
        let body = json!({
            "account": {
                "@type": "/cosmos.vesting.v1beta1.ContinuousVestingAccount",
                "base_vesting_account": {
                    "base_account": {
                        "address": "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v",
                        "pub_key": null,
                        "account_number": "3",
                        "sequence": "0"
                    },
                    "original_vesting": []
                },
                "start_time": "0"
            }
        });
        let account = decode_account_info(body).unwrap();
        assert_eq!(account.account_number, 3);
        assert_eq!(account.sequence, 0);
        assert!(account.public_key.is_none());
    }

    #[test]
    fn rejects_missing_account() {
        assert!(decode_account_info(json!({"code": 5})).is_err());
    }
}

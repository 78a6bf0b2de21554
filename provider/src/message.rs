// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::BTreeMap;
use std::fmt::Display;

use anyhow::{anyhow, bail};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::account::SignerData;
use crate::response::stringified;

/// Gas price per unit of gas, keyed by denomination.
pub type GasPrices = BTreeMap<String, Decimal>;

/// An opaque chain message in its LCD JSON form, e.g. a `MsgExecuteContract`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Msg(pub Value);

impl Msg {
    /// Creates a message from a type URL and a JSON object body.
    pub fn new(type_url: &str, body: Value) -> anyhow::Result<Self> {
        let Value::Object(mut fields) = body else {
            bail!("message body for {} must be a JSON object", type_url);
        };
        fields.insert("@type".to_owned(), Value::String(type_url.to_owned()));
        Ok(Msg(Value::Object(fields)))
    }

    /// Returns the message type URL.
    pub fn type_url(&self) -> Option<&str> {
        self.0.get("@type").and_then(Value::as_str)
    }
}

/// An amount of a single denomination.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "stringified")]
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Coin {
            denom: denom.into(),
            amount,
        }
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Transaction fee.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Maximum amount of gas that can be consumed.
    #[serde(with = "stringified")]
    pub gas_limit: u64,
    /// Amount paid, one coin per denomination.
    pub amount: Vec<Coin>,
}

/// Everything a wallet needs to build, sign and broadcast a transaction.
#[derive(Clone, Debug, Default)]
pub struct CreateTxOptions {
    pub msgs: Vec<Msg>,
    pub memo: String,
    /// Denominations the fee may be paid in. Empty means any priced denomination.
    pub fee_denoms: Vec<String>,
    pub gas_prices: Option<GasPrices>,
    /// Overrides the chain's default gas adjustment.
    pub gas_adjustment: Option<Decimal>,
    /// Precomputed fee. The wallet estimates its own if not set.
    pub fee: Option<Fee>,
    /// Whether the target chain is Terra Classic.
    pub is_classic: bool,
}

/// Compute a fee from simulated gas usage.
///
/// Gas is `ceil(gas_used * gas_adjustment)`. Prices are restricted to `fee_denoms`
/// unless that leaves nothing, in which case every priced denomination is charged.
/// Each coin amount is `ceil(price * gas)`.
pub fn compute_fee(
    gas_used: u64,
    gas_adjustment: Decimal,
    gas_prices: &GasPrices,
    fee_denoms: &[String],
) -> anyhow::Result<Fee> {
    let gas = Decimal::from(gas_used)
        .checked_mul(gas_adjustment)
        .and_then(|g| g.ceil().to_u64())
        .ok_or_else(|| anyhow!("gas overflow: {} * {}", gas_used, gas_adjustment))?;

    let filtered: Vec<_> = gas_prices
        .iter()
        .filter(|(denom, _)| fee_denoms.contains(*denom))
        .collect();
    let prices = if filtered.is_empty() {
        gas_prices.iter().collect()
    } else {
        filtered
    };

    let amount = prices
        .into_iter()
        .map(|(denom, price)| {
            let amount = price
                .checked_mul(Decimal::from(gas))
                .and_then(|a| a.ceil().to_u128())
                .ok_or_else(|| anyhow!("fee overflow for {}: {} * {}", denom, price, gas))?;
            Ok(Coin::new(denom.clone(), amount))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Fee {
        gas_limit: gas,
        amount,
    })
}

/// Build an unsigned JSON transaction suitable for `POST /cosmos/tx/v1beta1/simulate`.
///
/// Each signer gets a direct-mode signer info and an empty signature.
pub fn simulation_tx(signers: &[SignerData], msgs: &[Msg], memo: &str) -> Value {
    let signer_infos: Vec<Value> = signers
        .iter()
        .map(|signer| {
            json!({
                "public_key": signer.public_key,
                "mode_info": {"single": {"mode": "SIGN_MODE_DIRECT"}},
                "sequence": signer.sequence.to_string(),
            })
        })
        .collect();
    json!({
        "body": {
            "messages": msgs,
            "memo": memo,
            "timeout_height": "0",
            "extension_options": [],
            "non_critical_extension_options": [],
        },
        "auth_info": {
            "signer_infos": signer_infos,
            "fee": {"amount": [], "gas_limit": "0", "payer": "", "granter": ""},
        },
        "signatures": vec![""; signers.len()],
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::account::PublicKey;

    fn prices() -> GasPrices {
        let mut prices = GasPrices::new();
        prices.insert("uluna".into(), Decimal::from_str("28.325").unwrap());
        prices.insert("uusd".into(), Decimal::from_str("0.75").unwrap());
        prices
    }

    #[test]
    fn compute_fee_filters_denoms() {
        let fee = compute_fee(
            100_000,
            Decimal::from_str("1.75").unwrap(),
            &prices(),
            &["uusd".to_owned()],
        )
        .unwrap();
        assert_eq!(fee.gas_limit, 175_000);
        assert_eq!(fee.amount, vec![Coin::new("uusd", 131_250)]);
    }

    #[test]
    fn compute_fee_falls_back_to_all_prices() {
        let fee = compute_fee(1, Decimal::ONE, &prices(), &["ukrw".to_owned()]).unwrap();
        assert_eq!(fee.gas_limit, 1);
        // Amounts are rounded up.
        assert_eq!(
            fee.amount,
            vec![Coin::new("uluna", 29), Coin::new("uusd", 1)]
        );
    }

    #[test]
    fn compute_fee_rounds_gas_up() {
        let fee = compute_fee(3, Decimal::from_str("1.5").unwrap(), &GasPrices::new(), &[])
            .unwrap();
        assert_eq!(fee.gas_limit, 5);
        assert!(fee.amount.is_empty());
    }

    #[test]
    fn msg_requires_object_body() {
        let msg = Msg::new(
            "/cosmwasm.wasm.v1.MsgExecuteContract",
            json!({"sender": "terra1", "contract": "terra1c", "msg": {}, "funds": []}),
        )
        .unwrap();
        assert_eq!(msg.type_url(), Some("/cosmwasm.wasm.v1.MsgExecuteContract"));
        assert!(Msg::new("/cosmos.bank.v1beta1.MsgSend", json!("send")).is_err());
    }

    #[test]
    fn simulation_tx_has_one_signature_per_signer() {
        let signer = SignerData {
            sequence: 7,
            public_key: Some(PublicKey::secp256k1(&[3u8; 33])),
        };
        let tx = simulation_tx(&[signer], &[], "bridge");
        assert_eq!(tx["body"]["memo"], "bridge");
        assert_eq!(tx["auth_info"]["signer_infos"][0]["sequence"], "7");
        assert_eq!(tx["signatures"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn fee_serializes_amounts_as_strings() {
        let fee = Fee {
            gas_limit: 200_000,
            amount: vec![Coin::new("uluna", 5_665_000)],
        };
        let value = serde_json::to_value(&fee).unwrap();
        assert_eq!(
            value,
            json!({"gas_limit": "200000", "amount": [{"denom": "uluna", "amount": "5665000"}]})
        );
    }
}

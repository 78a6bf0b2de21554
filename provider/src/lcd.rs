// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::account::{AccountInfo, SignerData};
use crate::error::LcdError;
use crate::message::{compute_fee, simulation_tx, CreateTxOptions, Fee, Msg};
use crate::response::{decode_account_info, decode_gas_used, decode_tx_info};
use crate::tx::TxInfo;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for one Terra chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerraConfig {
    /// Base URL of the LCD REST API.
    pub lcd_url: Url,
    /// Cosmos chain ID, e.g. `columbus-5`.
    pub chain_id: String,
    /// Network name, e.g. `mainnet`.
    pub name: String,
    /// Whether this is Terra Classic.
    pub is_classic: bool,
    /// Multiplier applied to simulated gas.
    pub gas_adjustment: Decimal,
}

/// Provider for ledger queries.
#[async_trait]
pub trait LcdClient: Send + Sync {
    /// Returns the chain this client talks to.
    fn config(&self) -> &TerraConfig;

    /// Returns the execution record of a transaction.
    async fn tx_info(&self, txhash: &str) -> anyhow::Result<TxInfo>;

    /// Returns account state for an address.
    async fn account_info(&self, address: &str) -> anyhow::Result<AccountInfo>;

    /// Simulates the messages and returns the gas used, without adjustment.
    async fn simulate_gas(
        &self,
        signers: &[SignerData],
        msgs: &[Msg],
        memo: &str,
    ) -> anyhow::Result<u64>;

    /// Estimates the fee for a transaction with the given signers.
    ///
    /// Without gas prices in `options` the fee only carries a gas limit.
    async fn estimate_fee(
        &self,
        signers: &[SignerData],
        options: &CreateTxOptions,
    ) -> anyhow::Result<Fee> {
        let gas_used = self
            .simulate_gas(signers, &options.msgs, &options.memo)
            .await?;
        let gas_adjustment = options
            .gas_adjustment
            .unwrap_or(self.config().gas_adjustment);
        let gas_prices = options.gas_prices.clone().unwrap_or_default();
        compute_fee(gas_used, gas_adjustment, &gas_prices, &options.fee_denoms)
    }
}

/// [`LcdClient`] implementation over the LCD REST API.
#[derive(Clone, Debug)]
pub struct Lcd {
    inner: reqwest::Client,
    config: TerraConfig,
}

impl Lcd {
    /// Create a new client for the given chain.
    pub fn new(config: TerraConfig) -> anyhow::Result<Self> {
        let inner = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Lcd { inner, config })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.lcd_url.as_str().trim_end_matches('/'),
            path
        )
    }

    async fn get(&self, path: &str) -> Result<Value, LcdError> {
        let url = self.url(path);
        debug!(%url, "lcd get");
        let response = self
            .inner
            .get(&url)
            .send()
            .await
            .map_err(|source| LcdError::Transport {
                url: url.clone(),
                source,
            })?;
        read_json(url, response).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, LcdError> {
        let url = self.url(path);
        debug!(%url, "lcd post");
        let response = self
            .inner
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| LcdError::Transport {
                url: url.clone(),
                source,
            })?;
        read_json(url, response).await
    }
}

async fn read_json(url: String, response: reqwest::Response) -> Result<Value, LcdError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(LcdError::NotFound { url });
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        // Older LCDs answer unknown hashes with a 400 and a "not found" message.
        if body.contains("not found") {
            return Err(LcdError::NotFound { url });
        }
        return Err(LcdError::Status { url, status, body });
    }
    response.json::<Value>().await.map_err(|e| LcdError::Decode {
        url,
        reason: e.to_string(),
    })
}

#[async_trait]
impl LcdClient for Lcd {
    fn config(&self) -> &TerraConfig {
        &self.config
    }

    async fn tx_info(&self, txhash: &str) -> anyhow::Result<TxInfo> {
        let body = self
            .get(&format!("/cosmos/tx/v1beta1/txs/{}", txhash))
            .await?;
        decode_tx_info(body)
    }

    async fn account_info(&self, address: &str) -> anyhow::Result<AccountInfo> {
        let body = self
            .get(&format!("/cosmos/auth/v1beta1/accounts/{}", address))
            .await?;
        decode_account_info(body)
    }

    async fn simulate_gas(
        &self,
        signers: &[SignerData],
        msgs: &[Msg],
        memo: &str,
    ) -> anyhow::Result<u64> {
        let body = json!({ "tx": simulation_tx(signers, msgs, memo) });
        let response = self.post("/cosmos/tx/v1beta1/simulate", &body).await?;
        decode_gas_used(response)
    }
}

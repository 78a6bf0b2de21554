// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use terra_bridge_provider::account::{AccountInfo, SignerData};
use terra_bridge_provider::LcdClient;
use terra_bridge_signer::Signer;

/// A static wrapper around Terra account queries.
pub struct Account {}

impl Account {
    /// Get on-chain account state for an address.
    pub async fn info(lcd: &impl LcdClient, address: &str) -> anyhow::Result<AccountInfo> {
        lcd.account_info(address).await
    }

    /// Get the sequence (nonce) and public key for a [`Signer`].
    pub async fn signer_data(
        lcd: &impl LcdClient,
        signer: &impl Signer,
    ) -> anyhow::Result<SignerData> {
        Ok(Self::info(lcd, &signer.address()).await?.signer_data())
    }
}

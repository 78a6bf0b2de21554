// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::anyhow;
use async_trait::async_trait;

use terra_bridge_provider::message::CreateTxOptions;
use terra_bridge_provider::tx::TxResult;

use crate::signer::Signer;

/// [`Signer`] implementation that is not capable of posting transactions.
///
/// Useful for read-only flows that only need an address, such as fee estimation.
#[derive(Clone, Debug)]
pub struct Void {
    address: String,
}

impl Void {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[async_trait]
impl Signer for Void {
    fn address(&self) -> String {
        self.address.clone()
    }

    fn chain_id(&self) -> Option<String> {
        None
    }

    async fn post(&self, _options: CreateTxOptions) -> anyhow::Result<TxResult> {
        Err(anyhow!("void signer cannot post transactions"))
    }
}

// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use async_trait::async_trait;

use terra_bridge_provider::message::CreateTxOptions;
use terra_bridge_provider::tx::TxResult;

/// Trait that must be implemented by all signers.
///
/// A signer is a connected wallet: it owns the keys, builds and signs the
/// transaction, and broadcasts it. Browser extensions, hardware wallets and
/// remote signing services all fit behind this trait.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Returns the wallet address, e.g. `terra1...`.
    fn address(&self) -> String;

    /// Returns the chain ID the wallet is connected to, if known.
    fn chain_id(&self) -> Option<String>;

    /// Signs and broadcasts a transaction built from `options`.
    async fn post(&self, options: CreateTxOptions) -> anyhow::Result<TxResult>;
}

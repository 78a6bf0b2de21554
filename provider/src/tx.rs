// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::response::stringified;

/// Execution record of a transaction included in a block.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TxInfo {
    /// The block height at which the transaction was included.
    #[serde(with = "stringified")]
    pub height: u64,
    /// The hash of the transaction.
    pub txhash: String,
    /// Namespace of `code`; empty on success.
    #[serde(default)]
    pub codespace: String,
    /// Result code. Zero means the transaction executed successfully.
    #[serde(default)]
    pub code: u32,
    /// Raw execution log. Holds the error message when `code` is non-zero.
    #[serde(default)]
    pub raw_log: String,
    /// Structured message logs.
    #[serde(default)]
    pub logs: Vec<Value>,
    /// Gas limit requested by the transaction.
    #[serde(with = "stringified", default)]
    pub gas_wanted: u64,
    /// Gas used by the transaction.
    #[serde(with = "stringified", default)]
    pub gas_used: u64,
    /// Block time.
    #[serde(default)]
    pub timestamp: String,
}

impl TxInfo {
    /// Returns true if the ledger reported an execution error.
    pub fn is_error(&self) -> bool {
        self.code != 0
    }
}

/// The result of posting a transaction through a wallet.
///
/// Posting only broadcasts; whether the transaction executed must be checked
/// against the ledger using `txhash`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResult {
    /// The hash of the broadcasted transaction.
    pub txhash: String,
    /// Height reported by the wallet, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    /// Broadcast log.
    #[serde(default)]
    pub raw_log: String,
    /// Whether the wallet considered the broadcast successful.
    #[serde(default)]
    pub success: bool,
}

impl TxResult {
    /// Create a successful result for the given hash.
    pub fn broadcasted(txhash: impl Into<String>) -> Self {
        TxResult {
            txhash: txhash.into(),
            success: true,
            ..Default::default()
        }
    }
}

// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::response::stringified;

const SECP256K1_PUBKEY_TYPE: &str = "/cosmos.crypto.secp256k1.PubKey";

/// A public key in its LCD JSON form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    #[serde(rename = "@type")]
    pub type_url: String,
    /// Base64 encoded key bytes.
    pub key: String,
}

impl PublicKey {
    /// Wrap compressed secp256k1 key bytes.
    pub fn secp256k1(bytes: &[u8]) -> Self {
        PublicKey {
            type_url: SECP256K1_PUBKEY_TYPE.to_owned(),
            key: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

/// On-chain account state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountInfo {
    pub address: String,
    #[serde(rename = "pub_key", default)]
    pub public_key: Option<PublicKey>,
    #[serde(with = "stringified")]
    pub account_number: u64,
    #[serde(with = "stringified")]
    pub sequence: u64,
}

impl AccountInfo {
    /// Returns the data needed to simulate a transaction signed by this account.
    pub fn signer_data(&self) -> SignerData {
        SignerData {
            sequence: self.sequence,
            public_key: self.public_key.clone(),
        }
    }
}

/// Signer sequence and key used when estimating fees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignerData {
    pub sequence: u64,
    /// Accounts that never signed have no key on chain.
    pub public_key: Option<PublicKey>,
}

// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::anyhow;
use bech32::{FromBase32, Variant};

use crate::denom::is_native_denom;

/// Human readable prefix of Terra account addresses.
pub const TERRA_ADDRESS_PREFIX: &str = "terra";

const CANONICAL_ADDRESS_LEN: usize = 20;

/// Decodes a bech32 address into its canonical bytes.
///
/// Only the bech32 checksum is accepted. Bech32m addresses are rejected.
pub fn canonical_address(address: &str) -> anyhow::Result<Vec<u8>> {
    let (_, data, variant) = bech32::decode(address)?;
    if variant != Variant::Bech32 {
        return Err(anyhow!("address '{}' is not bech32 encoded", address));
    }
    Ok(Vec::<u8>::from_base32(&data)?)
}

/// Returns true if `address` is a native denomination or a 20 byte `terra` account address.
///
/// Contract addresses (32 bytes) and addresses of other chains are rejected.
pub fn is_valid_terra_address(address: &str) -> bool {
    if is_native_denom(address) {
        return true;
    }
    address.starts_with(TERRA_ADDRESS_PREFIX)
        && matches!(canonical_address(address), Ok(bytes) if bytes.len() == CANONICAL_ADDRESS_LEN)
}

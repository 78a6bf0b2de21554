// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use clap::{Args, Subcommand};
use serde_json::json;

use terra_bridge_sdk::address::{canonical_address, is_valid_terra_address};

use crate::print_json;

#[derive(Clone, Debug, Args)]
pub struct AddressArgs {
    #[command(subcommand)]
    command: AddressCommands,
}

#[derive(Clone, Debug, Subcommand)]
enum AddressCommands {
    /// Check whether a string is a Terra account address or a native denomination.
    Validate(AddressArg),
    /// Get the canonical (20 byte) form of a Terra address as hex.
    Canonical(AddressArg),
}

#[derive(Clone, Debug, Args)]
struct AddressArg {
    /// Terra address (terra1...) or native denomination.
    address: String,
}

/// Address commands handler.
pub fn handle_address(args: &AddressArgs) -> anyhow::Result<()> {
    match &args.command {
        AddressCommands::Validate(args) => print_json(&json!({
            "address": args.address,
            "valid": is_valid_terra_address(&args.address),
        })),
        AddressCommands::Canonical(args) => {
            print_json(&json!({
                "address": args.address,
                "canonical": canonical_hex(&args.address)?,
            }))
        }
    }
}

/// Returns the canonical address bytes as 0x-prefixed hex.
fn canonical_hex(address: &str) -> anyhow::Result<String> {
    Ok(format!("0x{}", hex::encode(canonical_address(address)?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_address_as_hex() {
        assert_eq!(
            canonical_hex("terra1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5exk7yu").unwrap(),
            "0x0102030405060708090a0b0c0d0e0f1011121314"
        );
        assert!(canonical_hex("terra1qypqxpq9qcrsszg2pvxq6rs0zqg3yyc5exk7yv").is_err());
    }
}

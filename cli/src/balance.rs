// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use clap::{Args, Subcommand};

use terra_bridge_sdk::balance::format_units;
use terra_bridge_sdk::denom::NATIVE_TERRA_DECIMALS;

#[derive(Clone, Debug, Args)]
pub struct BalanceArgs {
    #[command(subcommand)]
    command: BalanceCommands,
}

#[derive(Clone, Debug, Subcommand)]
enum BalanceCommands {
    /// Format an amount of base units for display, e.g. 1000000 -> 1.0.
    Format(FormatArgs),
}

#[derive(Clone, Debug, Args)]
struct FormatArgs {
    /// Integer amount in base units.
    amount: String,
    /// Number of decimals of the asset.
    #[arg(short, long, default_value_t = NATIVE_TERRA_DECIMALS)]
    decimals: u32,
}

/// Balance commands handler.
pub fn handle_balance(args: &BalanceArgs) -> anyhow::Result<()> {
    match &args.command {
        BalanceCommands::Format(args) => {
            println!("{}", format_units(&args.amount, args.decimals)?);
            Ok(())
        }
    }
}

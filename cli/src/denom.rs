// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use clap::{Args, Subcommand};
use serde_json::json;

use terra_bridge_sdk::denom::{format_native_denom, is_native_denom, native_icon_url};

use crate::print_json;

#[derive(Clone, Debug, Args)]
pub struct DenomArgs {
    #[command(subcommand)]
    command: DenomCommands,
}

#[derive(Clone, Debug, Subcommand)]
enum DenomCommands {
    /// Get the display symbol of a native denomination, e.g. uusd -> USTC.
    Format(DenomArg),
    /// Get the icon URL of a native denomination.
    Icon(DenomArg),
}

#[derive(Clone, Debug, Args)]
struct DenomArg {
    /// Native denomination, e.g. uluna.
    denom: String,
}

/// Denom commands handler.
pub fn handle_denom(args: &DenomArgs) -> anyhow::Result<()> {
    match &args.command {
        DenomCommands::Format(args) => print_json(&json!({
            "denom": args.denom,
            "native": is_native_denom(&args.denom),
            "symbol": format_native_denom(&args.denom),
        })),
        DenomCommands::Icon(args) => {
            let symbol = format_native_denom(&args.denom);
            let icon = (!symbol.is_empty()).then(|| native_icon_url(&symbol));
            print_json(&json!({"symbol": symbol, "icon": icon}))
        }
    }
}

// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use clap::{Args, Subcommand};

use terra_bridge_provider::Lcd;
use terra_bridge_sdk::account::Account;

use crate::{get_terra_config, print_json, Cli};

#[derive(Clone, Debug, Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    command: AccountCommands,
}

#[derive(Clone, Debug, Subcommand)]
enum AccountCommands {
    /// Get account information.
    Info(InfoArgs),
}

#[derive(Clone, Debug, Args)]
struct InfoArgs {
    /// Account address.
    address: String,
}

/// Account commands handler.
pub async fn handle_account(cli: Cli, args: &AccountArgs) -> anyhow::Result<()> {
    let lcd = Lcd::new(get_terra_config(&cli)?)?;

    match &args.command {
        AccountCommands::Info(args) => {
            let info = Account::info(&lcd, &args.address).await?;
            print_json(&info)
        }
    }
}

// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::time::Duration;

use clap::{Args, Subcommand};
use tokio_util::sync::CancellationToken;

use terra_bridge_provider::{
    account::SignerData,
    message::{CreateTxOptions, GasPrices},
    util::{parse_decimal, parse_gas_prices, parse_msgs},
    Decimal, Lcd, LcdClient,
};
use terra_bridge_sdk::{
    account::Account,
    gas::GasPriceFeed,
    tx::{wait_for_execution_with, WaitOptions},
};

use crate::{get_network_spec, print_json, Cli};

#[derive(Clone, Debug, Args)]
pub struct TxArgs {
    #[command(subcommand)]
    command: TxCommands,
}

#[derive(Clone, Debug, Subcommand)]
enum TxCommands {
    /// Wait for a transaction to be executed and print its record.
    Wait(WaitArgs),
    /// Estimate the fee of a set of messages.
    EstimateFee(EstimateFeeArgs),
}

#[derive(Clone, Debug, Args)]
struct WaitArgs {
    /// Transaction hash.
    txhash: String,
    /// Maximum number of queries before giving up.
    #[arg(long)]
    max_attempts: Option<u32>,
    /// Stop waiting after this long, e.g. "2m".
    #[arg(long, value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,
    /// Fail immediately on query errors that retrying cannot fix.
    #[arg(long, default_value_t = false)]
    fail_fast: bool,
}

#[derive(Clone, Debug, Args)]
struct EstimateFeeArgs {
    /// JSON array of messages, each with an "@type" field.
    msgs: String,
    /// Signer address. Its sequence and public key are used for simulation.
    #[arg(long)]
    from: Option<String>,
    /// Transaction memo.
    #[arg(long, default_value = "")]
    memo: String,
    /// Denominations the fee may be paid in (repeatable).
    #[arg(long = "fee-denom")]
    fee_denoms: Vec<String>,
    /// Gas prices, e.g. "0.15uluna,0.75uusd". Fetched from the price feed if not given.
    #[arg(long, value_parser = parse_gas_prices)]
    gas_prices: Option<GasPrices>,
    /// Multiplier applied to simulated gas.
    #[arg(long, value_parser = parse_decimal)]
    gas_adjustment: Option<Decimal>,
}

/// Tx commands handler.
pub async fn handle_tx(cli: Cli, args: &TxArgs) -> anyhow::Result<()> {
    let spec = get_network_spec(&cli)?;
    let lcd = Lcd::new(spec.terra_config(cli.chain.get()))?;

    match &args.command {
        TxCommands::Wait(args) => {
            let mut options = WaitOptions::default();
            if let Some(max_attempts) = args.max_attempts {
                options = options.with_max_attempts(max_attempts);
            }
            if args.fail_fast {
                options = options.fail_on_terminal();
            }
            if let Some(timeout) = args.timeout {
                let cancel = CancellationToken::new();
                let guard = cancel.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(timeout).await;
                    guard.cancel();
                });
                options = options.with_cancel(cancel);
            }
            let info = wait_for_execution_with(&lcd, &args.txhash, options).await?;
            print_json(&info)
        }
        TxCommands::EstimateFee(args) => {
            let signer = match &args.from {
                Some(address) => Account::info(&lcd, address).await?.signer_data(),
                None => SignerData::default(),
            };
            let gas_prices = match &args.gas_prices {
                Some(prices) => prices.clone(),
                None => GasPriceFeed::new(spec.gas_prices_url.clone())?.fetch().await?,
            };
            let options = CreateTxOptions {
                msgs: parse_msgs(&args.msgs)?,
                memo: args.memo.clone(),
                fee_denoms: args.fee_denoms.clone(),
                gas_prices: Some(gas_prices),
                gas_adjustment: args.gas_adjustment,
                is_classic: lcd.config().is_classic,
                ..Default::default()
            };
            let fee = lcd.estimate_fee(&[signer], &options).await?;
            print_json(&fee)
        }
    }
}

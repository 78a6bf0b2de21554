// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::env;

use anyhow::anyhow;

use terra_bridge_provider::message::{CreateTxOptions, Msg};
use terra_bridge_provider::{Lcd, LcdClient};
use terra_bridge_sdk::account::Account;
use terra_bridge_sdk::gas::GasPriceFeed;
use terra_bridge_sdk::network::{Network, TerraChain};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(anyhow!("usage: estimate_fee <from> <to>"));
    }
    let (from, to) = (&args[1], &args[2]);

    // Use Terra Classic testnet defaults
    let network = Network::Testnet.spec();
    let lcd = Lcd::new(network.terra_config(TerraChain::Classic))?;
    let gas_prices = GasPriceFeed::new(network.gas_prices_url.clone())?
        .fetch()
        .await?;

    let send = Msg::new(
        "/cosmos.bank.v1beta1.MsgSend",
        serde_json::json!({
            "from_address": from,
            "to_address": to,
            "amount": [{"denom": "uluna", "amount": "1000000"}],
        }),
    )?;
    let account = Account::info(&lcd, from).await?;
    let fee = lcd
        .estimate_fee(
            &[account.signer_data()],
            &CreateTxOptions {
                msgs: vec![send],
                fee_denoms: vec!["uluna".to_owned()],
                gas_prices: Some(gas_prices),
                ..Default::default()
            },
        )
        .await?;

    println!("{}", serde_json::to_string_pretty(&fee)?);

    Ok(())
}

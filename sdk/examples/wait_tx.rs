// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::env;

use anyhow::anyhow;

use terra_bridge_provider::tx::TxResult;
use terra_bridge_sdk::network::{Network, TerraChain};
use terra_bridge_sdk::tx::wait_for_execution;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(anyhow!("missing transaction hash"));
    }
    let tx = TxResult::broadcasted(&args[1]);

    // Use Terra Classic mainnet defaults
    let network = Network::Mainnet.spec();
    let info = wait_for_execution(&tx, TerraChain::Classic, &network).await?;

    println!(
        "Tx {} executed at height {} (gas used {})",
        info.txhash, info.height, info.gas_used
    );

    Ok(())
}

// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use terra_bridge_sdk::gas::GasPriceFeed;

use crate::{get_network_spec, print_json, Cli};

/// Gas prices command handler.
pub async fn handle_gas_prices(cli: Cli) -> anyhow::Result<()> {
    let spec = get_network_spec(&cli)?;
    let prices = GasPriceFeed::new(spec.gas_prices_url)?.fetch().await?;
    print_json(&prices)
}

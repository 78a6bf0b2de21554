// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use mockito::ServerGuard;
use url::Url;

use terra_bridge_sdk::network::{Network, NetworkSpec};

/// Devnet presets with both chains and the gas price feed pointed at `server`.
pub fn mock_network(server: &ServerGuard) -> NetworkSpec {
    let mut spec = Network::Devnet.spec();
    let base = Url::parse(&server.url()).unwrap();
    spec.classic.lcd_url = base.clone();
    spec.terra2.lcd_url = base.clone();
    spec.gas_prices_url = base.join("/v1/txs/gas_prices").unwrap();
    spec
}

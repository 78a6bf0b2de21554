// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use terra_bridge_provider::TerraConfig;

/// Wormhole chain ID of Terra Classic.
pub const CHAIN_ID_TERRA: u16 = 3;
/// Wormhole chain ID of Terra 2.
pub const CHAIN_ID_TERRA2: u16 = 18;

const DEFAULT_GAS_ADJUSTMENT: Decimal = Decimal::from_parts(175, 0, 0, false, 2);

const MAINNET_NETWORK_NAME: &str = "mainnet";
const MAINNET_CLASSIC_LCD_URL: &str = "https://columbus-lcd.terra.dev";
const MAINNET_CLASSIC_CHAIN_ID: &str = "columbus-5";
const MAINNET_TERRA2_LCD_URL: &str = "https://phoenix-lcd.terra.dev";
const MAINNET_TERRA2_CHAIN_ID: &str = "phoenix-1";
const MAINNET_GAS_PRICES_URL: &str = "https://fcd.terra.dev/v1/txs/gas_prices";

const TESTNET_NETWORK_NAME: &str = "testnet";
const TESTNET_CLASSIC_LCD_URL: &str = "https://bombay-lcd.terra.dev";
const TESTNET_CLASSIC_CHAIN_ID: &str = "bombay-12";
const TESTNET_TERRA2_LCD_URL: &str = "https://pisco-lcd.terra.dev";
const TESTNET_TERRA2_CHAIN_ID: &str = "pisco-1";
const TESTNET_GAS_PRICES_URL: &str = "https://bombay-fcd.terra.dev/v1/txs/gas_prices";

const DEVNET_NETWORK_NAME: &str = "devnet";
const DEVNET_CLASSIC_LCD_URL: &str = "http://localhost:1317";
const DEVNET_TERRA2_LCD_URL: &str = "http://localhost:1318";
const DEVNET_CHAIN_ID: &str = "localterra";
const DEVNET_GAS_PRICES_URL: &str = "http://localhost:3060/v1/txs/gas_prices";

/// A Terra chain as identified by the bridge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TerraChain {
    /// Terra Classic (`columbus-5`).
    Classic,
    /// Terra 2 (`phoenix-1`).
    Terra2,
}

impl TerraChain {
    /// Returns the Wormhole chain ID.
    pub fn wormhole_id(&self) -> u16 {
        match self {
            TerraChain::Classic => CHAIN_ID_TERRA,
            TerraChain::Terra2 => CHAIN_ID_TERRA2,
        }
    }
}

impl TryFrom<u16> for TerraChain {
    type Error = anyhow::Error;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        match id {
            CHAIN_ID_TERRA => Ok(TerraChain::Classic),
            CHAIN_ID_TERRA2 => Ok(TerraChain::Terra2),
            _ => Err(anyhow!("wormhole chain {} is not a terra chain", id)),
        }
    }
}

impl FromStr for TerraChain {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "terra" | "classic" => Ok(TerraChain::Classic),
            "terra2" => Ok(TerraChain::Terra2),
            _ => match s.parse::<u16>() {
                Ok(id) => TerraChain::try_from(id),
                Err(_) => Err(anyhow!("unknown terra chain '{}'", s)),
            },
        }
    }
}

impl Display for TerraChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerraChain::Classic => write!(f, "terra"),
            TerraChain::Terra2 => write!(f, "terra2"),
        }
    }
}

/// Chain configs and the gas price feed of one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub classic: TerraConfig,
    pub terra2: TerraConfig,
    pub gas_prices_url: Url,
}

impl NetworkSpec {
    /// Returns the config of the given chain.
    pub fn terra_config(&self, chain: TerraChain) -> TerraConfig {
        match chain {
            TerraChain::Classic => self.classic.clone(),
            TerraChain::Terra2 => self.terra2.clone(),
        }
    }
}

fn preset(
    name: &str,
    classic: (&str, &str),
    terra2: (&str, &str),
    gas_prices_url: &str,
) -> NetworkSpec {
    let config = |(lcd_url, chain_id): (&str, &str), is_classic| TerraConfig {
        lcd_url: Url::parse(lcd_url).unwrap(),
        chain_id: chain_id.to_owned(),
        name: name.to_owned(),
        is_classic,
        gas_adjustment: DEFAULT_GAS_ADJUSTMENT,
    };
    NetworkSpec {
        classic: config(classic, true),
        terra2: config(terra2, false),
        gas_prices_url: Url::parse(gas_prices_url).unwrap(),
    }
}

/// Returns the built-in network specs keyed by network name.
pub fn default_networks() -> HashMap<String, NetworkSpec> {
    [Network::Mainnet, Network::Testnet, Network::Devnet]
        .into_iter()
        .map(|network| (network.to_string(), network.spec()))
        .collect()
}

/// Parses network specs from TOML, layered over [`default_networks`].
///
/// ```toml
/// [devnet]
/// gas_prices_url = "http://localhost:3060/v1/txs/gas_prices"
///
/// [devnet.classic]
/// lcd_url = "http://localhost:1317"
/// ...
/// ```
pub fn load_networks(toml_str: &str) -> anyhow::Result<HashMap<String, NetworkSpec>> {
    let overrides: HashMap<String, NetworkSpec> =
        toml::from_str(toml_str).context("error parsing network specs")?;
    let mut specs = default_networks();
    specs.extend(overrides);
    Ok(specs)
}

/// Network presets for chain configs and gas prices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Network {
    /// Network presets for mainnet.
    Mainnet,
    /// Network presets for the public testnets.
    Testnet,
    /// Network presets for LocalTerra.
    Devnet,
}

impl Network {
    pub fn spec(&self) -> NetworkSpec {
        match self {
            Network::Mainnet => preset(
                MAINNET_NETWORK_NAME,
                (MAINNET_CLASSIC_LCD_URL, MAINNET_CLASSIC_CHAIN_ID),
                (MAINNET_TERRA2_LCD_URL, MAINNET_TERRA2_CHAIN_ID),
                MAINNET_GAS_PRICES_URL,
            ),
            Network::Testnet => preset(
                TESTNET_NETWORK_NAME,
                (TESTNET_CLASSIC_LCD_URL, TESTNET_CLASSIC_CHAIN_ID),
                (TESTNET_TERRA2_LCD_URL, TESTNET_TERRA2_CHAIN_ID),
                TESTNET_GAS_PRICES_URL,
            ),
            Network::Devnet => preset(
                DEVNET_NETWORK_NAME,
                (DEVNET_CLASSIC_LCD_URL, DEVNET_CHAIN_ID),
                (DEVNET_TERRA2_LCD_URL, DEVNET_CHAIN_ID),
                DEVNET_GAS_PRICES_URL,
            ),
        }
    }

    pub fn terra_config(&self, chain: TerraChain) -> TerraConfig {
        self.spec().terra_config(chain)
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MAINNET_NETWORK_NAME => Ok(Network::Mainnet),
            TESTNET_NETWORK_NAME => Ok(Network::Testnet),
            DEVNET_NETWORK_NAME => Ok(Network::Devnet),
            _ => Err(anyhow!("unknown network '{}'", s)),
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "{}", MAINNET_NETWORK_NAME),
            Network::Testnet => write!(f, "{}", TESTNET_NETWORK_NAME),
            Network::Devnet => write!(f, "{}", DEVNET_NETWORK_NAME),
        }
    }
}

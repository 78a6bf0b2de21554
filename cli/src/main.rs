// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use stderrlog::Timestamp;
use url::Url;

use terra_bridge_provider::TerraConfig;
use terra_bridge_sdk::network::{
    load_networks, Network as SdkNetwork, NetworkSpec, TerraChain,
};

use crate::account::{handle_account, AccountArgs};
use crate::address::{handle_address, AddressArgs};
use crate::balance::{handle_balance, BalanceArgs};
use crate::denom::{handle_denom, DenomArgs};
use crate::gas::handle_gas_prices;
use crate::tx::{handle_tx, TxArgs};

mod account;
mod address;
mod balance;
mod denom;
mod gas;
mod tx;

#[derive(Clone, Debug, Parser)]
#[command(name = "terra-bridge", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Network presets for LCD and gas price URLs.
    #[arg(short, long, env = "TERRA_BRIDGE_NETWORK", value_enum, default_value_t = Network::Mainnet)]
    network: Network,
    /// The target Terra chain.
    #[arg(short, long, env = "TERRA_BRIDGE_CHAIN", value_enum, default_value_t = Chain::Terra)]
    chain: Chain,
    /// LCD REST API URL.
    #[arg(long, env = "TERRA_BRIDGE_LCD_URL")]
    lcd_url: Option<Url>,
    /// TOML file with network definitions that override the presets.
    #[arg(long, env = "TERRA_BRIDGE_NETWORKS_FILE")]
    networks_file: Option<PathBuf>,
    /// Logging verbosity (repeat for more verbose logging).
    #[arg(short, long, env = "TERRA_BRIDGE_LOG_VERBOSITY", action = clap::ArgAction::Count)]
    verbosity: u8,
    /// Silence logging.
    #[arg(short, long, env = "TERRA_BRIDGE_LOG_QUIET", default_value_t = false)]
    quiet: bool,
}

#[derive(Clone, Debug, Subcommand)]
enum Commands {
    /// Denomination related commands.
    #[clap(alias = "denoms")]
    Denom(DenomArgs),
    /// Balance related commands.
    Balance(BalanceArgs),
    /// Address related commands.
    Address(AddressArgs),
    /// Get current gas prices from the network's price feed.
    GasPrices,
    /// Account related commands.
    #[clap(alias = "accounts")]
    Account(AccountArgs),
    /// Transaction related commands.
    Tx(TxArgs),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Network {
    /// Network presets for mainnet.
    Mainnet,
    /// Network presets for the public testnets.
    Testnet,
    /// Network presets for LocalTerra.
    Devnet,
}

impl Network {
    pub fn get(&self) -> SdkNetwork {
        match self {
            Network::Mainnet => SdkNetwork::Mainnet,
            Network::Testnet => SdkNetwork::Testnet,
            Network::Devnet => SdkNetwork::Devnet,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Chain {
    /// Terra Classic.
    Terra,
    /// Terra 2.
    Terra2,
}

impl Chain {
    pub fn get(&self) -> TerraChain {
        match self {
            Chain::Terra => TerraChain::Classic,
            Chain::Terra2 => TerraChain::Terra2,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .module("terra_bridge_provider")
        .module("terra_bridge_sdk")
        .quiet(cli.quiet)
        .verbosity(cli.verbosity as usize)
        .timestamp(Timestamp::Millisecond)
        .init()?;

    match &cli.command.clone() {
        Commands::Denom(args) => handle_denom(args),
        Commands::Balance(args) => handle_balance(args),
        Commands::Address(args) => handle_address(args),
        Commands::GasPrices => handle_gas_prices(cli).await,
        Commands::Account(args) => handle_account(cli, args).await,
        Commands::Tx(args) => handle_tx(cli, args).await,
    }
}

/// Returns the network spec from the networks file or the presets.
fn get_network_spec(cli: &Cli) -> anyhow::Result<NetworkSpec> {
    let network = cli.network.get();
    let mut spec = match &cli.networks_file {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            load_networks(&contents)?
                .remove(&network.to_string())
                .ok_or_else(|| anyhow!("network '{}' is not defined", network))?
        }
        None => network.spec(),
    };
    if let Some(lcd_url) = cli.lcd_url.clone() {
        match cli.chain.get() {
            TerraChain::Classic => spec.classic.lcd_url = lcd_url,
            TerraChain::Terra2 => spec.terra2.lcd_url = lcd_url,
        }
    }
    Ok(spec)
}

/// Returns the config of the selected chain.
fn get_terra_config(cli: &Cli) -> anyhow::Result<TerraConfig> {
    Ok(get_network_spec(cli)?.terra_config(cli.chain.get()))
}

/// Print serializable to stdout as pretty formatted JSON.
fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&value)?;
    println!("{}", json);
    Ok(())
}

// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::str::FromStr;

use anyhow::{anyhow, Context};
use rust_decimal::Decimal;

use crate::message::{GasPrices, Msg};

/// Parse a gas price from string, e.g. `0.15uluna`.
pub fn parse_gas_price(s: &str) -> anyhow::Result<(String, Decimal)> {
    let s = s.trim();
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .ok_or_else(|| anyhow!("gas price '{}' has no denomination", s))?;
    let (price, denom) = s.split_at(split);
    Ok((denom.to_owned(), parse_decimal(price)?))
}

/// Parse a comma separated list of gas prices, e.g. `0.15uluna,0.75uusd`.
pub fn parse_gas_prices(s: &str) -> anyhow::Result<GasPrices> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_gas_price)
        .collect()
}

/// Parse a decimal from string, e.g. a gas adjustment of `1.75`.
pub fn parse_decimal(s: &str) -> anyhow::Result<Decimal> {
    Decimal::from_str(s).with_context(|| format!("invalid decimal '{}'", s))
}

/// Parse a JSON array of messages from string.
pub fn parse_msgs(s: &str) -> anyhow::Result<Vec<Msg>> {
    let msgs: Vec<Msg> = serde_json::from_str(s).context("error parsing messages as JSON")?;
    if let Some(index) = msgs.iter().position(|m| m.type_url().is_none()) {
        return Err(anyhow!("message {} has no @type", index));
    }
    Ok(msgs)
}

// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::time::Duration;

use anyhow::Context;
use tracing::debug;
use url::Url;

pub use terra_bridge_provider::message::GasPrices;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for an FCD gas price endpoint.
///
/// The feed answers with a JSON object mapping denominations to decimal prices,
/// e.g. `{"uluna": "28.325", "uusd": "0.75"}`. Prices change often and are fetched
/// fresh on every call.
#[derive(Clone, Debug)]
pub struct GasPriceFeed {
    inner: reqwest::Client,
    url: Url,
}

impl GasPriceFeed {
    pub fn new(url: Url) -> anyhow::Result<Self> {
        let inner = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(GasPriceFeed { inner, url })
    }

    /// Fetch the current gas prices.
    pub async fn fetch(&self) -> anyhow::Result<GasPrices> {
        debug!(url = %self.url, "fetching gas prices");
        let prices = self
            .inner
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("error requesting gas prices from {}", self.url))?
            .error_for_status()?
            .json::<GasPrices>()
            .await
            .context("error parsing gas prices")?;
        Ok(prices)
    }
}

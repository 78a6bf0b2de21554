// Copyright 2025 Terra Bridge Contributors
// SPDX-License-Identifier: Apache-2.0, MIT

use std::time::Duration;

use backoff::backoff::{Backoff, Constant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use terra_bridge_provider::error::LcdError;
use terra_bridge_provider::message::{CreateTxOptions, Msg};
use terra_bridge_provider::tx::{TxInfo, TxResult};
use terra_bridge_provider::{Lcd, LcdClient};
use terra_bridge_signer::Signer;

use crate::account::Account;
use crate::gas::GasPriceFeed;
use crate::network::{NetworkSpec, TerraChain};

/// Delay before each transaction query.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// The ledger executed the transaction and reported an error.
#[derive(Debug, thiserror::Error)]
#[error("Tx {txhash}: error code {code}: {raw_log}")]
pub struct TxExecutionError {
    pub txhash: String,
    pub code: u32,
    pub raw_log: String,
}

/// Waiting stopped before the ledger returned a record.
#[derive(Debug, thiserror::Error)]
pub enum WaitError {
    #[error("gave up waiting for tx {txhash} after {attempts} attempts")]
    Exhausted { txhash: String, attempts: u32 },
    #[error("stopped waiting for tx {txhash}: cancelled")]
    Cancelled { txhash: String },
}

/// Options for waiting on transaction execution.
///
/// The default polls every second, forever, and treats every query failure as
/// "not yet available".
pub struct WaitOptions {
    /// Delay policy between queries. Waiting is exhausted when it yields `None`.
    pub backoff: Box<dyn Backoff + Send>,
    /// Maximum number of queries.
    pub max_attempts: Option<u32>,
    /// Stops the wait when cancelled.
    pub cancel: CancellationToken,
    /// Fail on query errors that retrying cannot fix, such as a malformed hash.
    pub fail_on_terminal: bool,
}

impl Default for WaitOptions {
    fn default() -> Self {
        WaitOptions {
            backoff: Box::new(Constant::new(POLL_INTERVAL)),
            max_attempts: None,
            cancel: CancellationToken::new(),
            fail_on_terminal: false,
        }
    }
}

impl WaitOptions {
    pub fn with_backoff(mut self, backoff: impl Backoff + Send + 'static) -> Self {
        self.backoff = Box::new(backoff);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn fail_on_terminal(mut self) -> Self {
        self.fail_on_terminal = true;
        self
    }
}

/// Wait until the ledger of `chain` has executed a posted transaction.
///
/// Polls once per second with no upper bound. Returns the execution record, or a
/// [`TxExecutionError`] if the ledger reports a non-zero code.
pub async fn wait_for_execution(
    tx: &TxResult,
    chain: TerraChain,
    network: &NetworkSpec,
) -> anyhow::Result<TxInfo> {
    let lcd = Lcd::new(network.terra_config(chain))?;
    wait_for_execution_with(&lcd, &tx.txhash, WaitOptions::default()).await
}

/// Wait until `lcd` returns an execution record for `txhash`.
pub async fn wait_for_execution_with(
    lcd: &impl LcdClient,
    txhash: &str,
    mut options: WaitOptions,
) -> anyhow::Result<TxInfo> {
    let mut attempts = 0u32;
    let info = loop {
        let exhausted = options.max_attempts.is_some_and(|max| attempts >= max);
        let delay = match options.backoff.next_backoff() {
            Some(delay) if !exhausted => delay,
            _ => {
                return Err(WaitError::Exhausted {
                    txhash: txhash.to_owned(),
                    attempts,
                }
                .into())
            }
        };

        tokio::select! {
            biased;
            _ = options.cancel.cancelled() => {
                return Err(WaitError::Cancelled { txhash: txhash.to_owned() }.into());
            }
            _ = tokio::time::sleep(delay) => {}
        }

        attempts += 1;
        let result = tokio::select! {
            biased;
            _ = options.cancel.cancelled() => {
                return Err(WaitError::Cancelled { txhash: txhash.to_owned() }.into());
            }
            result = lcd.tx_info(txhash) => result,
        };

        match result {
            Ok(info) => break info,
            Err(err) => {
                let retryable = err
                    .downcast_ref::<LcdError>()
                    .map_or(true, LcdError::is_retryable);
                if options.fail_on_terminal && !retryable {
                    return Err(err.context(format!("failed to query tx {}", txhash)));
                }
                warn!(txhash, attempts, error = %err, "transaction not yet available");
            }
        }
    };

    if info.is_error() {
        return Err(TxExecutionError {
            txhash: txhash.to_owned(),
            code: info.code,
            raw_log: info.raw_log,
        }
        .into());
    }
    debug!(txhash, height = info.height, "transaction executed");
    Ok(info)
}

/// Post messages through `signer` on `chain`, paying fees at current gas prices.
///
/// Fetches gas prices from the network's feed and the signer's account from the
/// ledger, estimates the fee, then hands everything to the wallet. Errors from any
/// step are returned as is.
pub async fn post_with_fees(
    signer: &impl Signer,
    msgs: Vec<Msg>,
    memo: &str,
    fee_denoms: &[String],
    chain: TerraChain,
    network: &NetworkSpec,
) -> anyhow::Result<TxResult> {
    let lcd = Lcd::new(network.terra_config(chain))?;
    let feed = GasPriceFeed::new(network.gas_prices_url.clone())?;
    post_with_fees_with(&lcd, &feed, signer, msgs, memo, fee_denoms).await
}

/// Same as [`post_with_fees`] with explicit clients.
pub async fn post_with_fees_with(
    lcd: &impl LcdClient,
    feed: &GasPriceFeed,
    signer: &impl Signer,
    msgs: Vec<Msg>,
    memo: &str,
    fee_denoms: &[String],
) -> anyhow::Result<TxResult> {
    let gas_prices = feed.fetch().await?;
    let signer_data = Account::signer_data(lcd, signer).await?;

    let mut options = CreateTxOptions {
        msgs,
        memo: memo.to_owned(),
        fee_denoms: fee_denoms.to_vec(),
        gas_prices: Some(gas_prices),
        gas_adjustment: None,
        fee: None,
        is_classic: lcd.config().is_classic,
    };
    let fee = lcd.estimate_fee(&[signer_data], &options).await?;
    debug!(gas_limit = fee.gas_limit, amount = ?fee.amount, "estimated fee");
    options.fee = Some(fee);

    if let Some(chain_id) = signer.chain_id() {
        if chain_id != lcd.config().chain_id {
            warn!(
                wallet = %chain_id,
                lcd = %lcd.config().chain_id,
                "wallet is connected to a different chain"
            );
        }
    }

    let result = signer.post(options).await?;
    info!(txhash = %result.txhash, "posted transaction");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use mockito::{Mock, Server};
    use more_asserts::assert_ge;
    use reqwest::StatusCode;
    use rust_decimal::Decimal;
    use tokio::time::Instant;
    use url::Url;

    use terra_bridge_provider::account::{AccountInfo, PublicKey, SignerData};
    use terra_bridge_provider::message::{Coin, Fee};
    use terra_bridge_provider::TerraConfig;
    use terra_bridge_signer::Void;

    use super::*;
    use crate::network::Network;

    const TXHASH: &str = "8E0B4E3F1A0C7D6B5A49382716F5E4D3C2B1A09F8E7D6C5B4A39281706F5E4D3";
    const ADDRESS: &str = "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v";

    struct MockLcd {
        config: TerraConfig,
        tx_responses: Mutex<VecDeque<anyhow::Result<TxInfo>>>,
        tx_calls: AtomicUsize,
        polled_at: Mutex<Vec<Instant>>,
    }

    impl MockLcd {
        fn new(tx_responses: Vec<anyhow::Result<TxInfo>>) -> Self {
            MockLcd {
                config: Network::Devnet.terra_config(TerraChain::Classic),
                tx_responses: Mutex::new(tx_responses.into()),
                tx_calls: AtomicUsize::new(0),
                polled_at: Mutex::new(Vec::new()),
            }
        }

        fn not_found() -> anyhow::Result<TxInfo> {
            Err(LcdError::NotFound {
                url: format!("http://localhost:1317/cosmos/tx/v1beta1/txs/{}", TXHASH),
            }
            .into())
        }

        fn calls(&self) -> usize {
            self.tx_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LcdClient for MockLcd {
        fn config(&self) -> &TerraConfig {
            &self.config
        }

        async fn tx_info(&self, _txhash: &str) -> anyhow::Result<TxInfo> {
            self.tx_calls.fetch_add(1, Ordering::SeqCst);
            self.polled_at.lock().unwrap().push(Instant::now());
            self.tx_responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(MockLcd::not_found)
        }

        async fn account_info(&self, address: &str) -> anyhow::Result<AccountInfo> {
            Ok(AccountInfo {
                address: address.to_owned(),
                public_key: Some(PublicKey::secp256k1(&[2u8; 33])),
                account_number: 68,
                sequence: 5,
            })
        }

        async fn simulate_gas(
            &self,
            signers: &[SignerData],
            _msgs: &[Msg],
            _memo: &str,
        ) -> anyhow::Result<u64> {
            assert_eq!(signers.len(), 1);
            assert_eq!(signers[0].sequence, 5);
            Ok(100_000)
        }
    }

    #[derive(Clone, Default)]
    struct MockSigner {
        posted: Arc<Mutex<Option<CreateTxOptions>>>,
    }

    #[async_trait]
    impl Signer for MockSigner {
        fn address(&self) -> String {
            ADDRESS.to_owned()
        }

        fn chain_id(&self) -> Option<String> {
            Some("localterra".to_owned())
        }

        async fn post(&self, options: CreateTxOptions) -> anyhow::Result<TxResult> {
            self.posted.lock().unwrap().replace(options);
            Ok(TxResult::broadcasted(TXHASH))
        }
    }

    fn executed(code: u32, raw_log: &str) -> anyhow::Result<TxInfo> {
        Ok(TxInfo {
            height: 100,
            txhash: TXHASH.to_owned(),
            code,
            raw_log: raw_log.to_owned(),
            ..Default::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn waits_until_tx_is_available() {
        let lcd = MockLcd::new(vec![
            MockLcd::not_found(),
            MockLcd::not_found(),
            MockLcd::not_found(),
            executed(0, "[]"),
        ]);
        let started = Instant::now();
        let info = wait_for_execution_with(&lcd, TXHASH, WaitOptions::default())
            .await
            .unwrap();
        assert_eq!(info.height, 100);
        assert_eq!(lcd.calls(), 4);
        assert_ge!(started.elapsed(), POLL_INTERVAL * 4);

        let polled_at = lcd.polled_at.lock().unwrap();
        assert_ge!(polled_at[0] - started, POLL_INTERVAL);
        for pair in polled_at.windows(2) {
            assert_ge!(pair[1] - pair[0], POLL_INTERVAL);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_polling_through_transport_errors() {
        let lcd = MockLcd::new(vec![
            Err(anyhow::anyhow!("connection reset")),
            Err(LcdError::Status {
                url: "http://localhost:1317".into(),
                status: StatusCode::BAD_GATEWAY,
                body: String::new(),
            }
            .into()),
            executed(0, "[]"),
        ]);
        let info = wait_for_execution_with(&lcd, TXHASH, WaitOptions::default())
            .await
            .unwrap();
        assert_eq!(info.txhash, TXHASH);
        assert_eq!(lcd.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn fails_on_execution_error() {
        let lcd = MockLcd::new(vec![executed(5, "insufficient funds")]);
        let err = wait_for_execution_with(&lcd, TXHASH, WaitOptions::default())
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains(TXHASH));
        assert!(message.contains("error code 5"));
        assert!(message.contains("insufficient funds"));
        assert_eq!(err.downcast_ref::<TxExecutionError>().unwrap().code, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_after_max_attempts() {
        let lcd = MockLcd::new(vec![]);
        let err = wait_for_execution_with(&lcd, TXHASH, WaitOptions::default().with_max_attempts(3))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WaitError>(),
            Some(WaitError::Exhausted { attempts: 3, .. })
        ));
        assert_eq!(lcd.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_cancelled() {
        let lcd = MockLcd::new(vec![]);
        let cancel = CancellationToken::new();
        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(2500)).await;
            canceller.cancel();
        });
        let err = wait_for_execution_with(&lcd, TXHASH, WaitOptions::default().with_cancel(cancel))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WaitError>(),
            Some(WaitError::Cancelled { .. })
        ));
        assert_eq!(lcd.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn terminal_query_errors_can_fail_fast() {
        let lcd = MockLcd::new(vec![Err(LcdError::Status {
            url: "http://localhost:1317".into(),
            status: StatusCode::BAD_REQUEST,
            body: "invalid hash".into(),
        }
        .into())]);
        let err = wait_for_execution_with(&lcd, "zz", WaitOptions::default().fail_on_terminal())
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<LcdError>().is_some());
        assert_eq!(lcd.calls(), 1);
    }

    async fn gas_price_feed(server: &mut Server, status: usize) -> (GasPriceFeed, Mock) {
        let mock = server
            .mock("GET", "/v1/txs/gas_prices")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"uluna": "28.325", "uusd": "0.75"}"#)
            .create_async()
            .await;
        let url = Url::parse(&format!("{}/v1/txs/gas_prices", server.url())).unwrap();
        (GasPriceFeed::new(url).unwrap(), mock)
    }

    #[tokio::test]
    async fn posts_with_estimated_fee() {
        let mut server = Server::new_async().await;
        let (feed, _m) = gas_price_feed(&mut server, 200).await;
        let lcd = MockLcd::new(vec![]);
        let signer = MockSigner::default();
        let msg = Msg::new(
            "/cosmwasm.wasm.v1.MsgExecuteContract",
            serde_json::json!({"sender": ADDRESS, "contract": ADDRESS, "msg": {}, "funds": []}),
        )
        .unwrap();

        let result = post_with_fees_with(
            &lcd,
            &feed,
            &signer,
            vec![msg.clone()],
            "Wormhole - Initiate Transfer",
            &["uusd".to_owned()],
        )
        .await
        .unwrap();
        assert_eq!(result.txhash, TXHASH);

        let posted = signer.posted.lock().unwrap().take().unwrap();
        assert_eq!(posted.msgs, vec![msg]);
        assert_eq!(posted.memo, "Wormhole - Initiate Transfer");
        assert_eq!(posted.fee_denoms, vec!["uusd".to_owned()]);
        assert!(posted.is_classic);
        assert_eq!(
            posted.gas_prices.unwrap()["uluna"],
            Decimal::from_str("28.325").unwrap()
        );
        assert_eq!(
            posted.fee,
            Some(Fee {
                gas_limit: 175_000,
                amount: vec![Coin::new("uusd", 131_250)],
            })
        );
    }

    #[tokio::test]
    async fn feed_errors_propagate_before_posting() {
        let mut server = Server::new_async().await;
        let (feed, _m) = gas_price_feed(&mut server, 503).await;
        let lcd = MockLcd::new(vec![]);
        let signer = MockSigner::default();

        let result = post_with_fees_with(&lcd, &feed, &signer, vec![], "", &[]).await;
        assert!(result.is_err());
        assert!(signer.posted.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn wallet_errors_propagate() {
        let mut server = Server::new_async().await;
        let (feed, _m) = gas_price_feed(&mut server, 200).await;
        let lcd = MockLcd::new(vec![]);

        let err = post_with_fees_with(&lcd, &feed, &Void::new(ADDRESS), vec![], "", &[])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "void signer cannot post transactions");
    }
}

//! Binance public REST client
//!
//! Thin transport over the four market-data endpoints the pipeline
//! needs. No retries and no backoff: one failed request propagates
//! straight to the operation that issued it.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::constants;

use super::errors::{MarketError, MarketResult};
use super::traits::MarketData;
use super::types::{BookTicker, OrderBook, Ticker24h};

const PING_PATH: &str = "/v3/ping";
const TICKER_24H_PATH: &str = "/v3/ticker/24hr";
const DEPTH_PATH: &str = "/v3/depth";
const BOOK_TICKER_PATH: &str = "/v3/ticker/bookTicker";

/// Client for the public market-data API
pub struct BinanceClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl BinanceClient {
    /// Create a client against the configured API base URL.
    pub fn new() -> Self {
        Self::with_base_url(constants::api_base_url())
    }

    /// Create a client against an explicit base URL (tests point this
    /// at a local mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(constants::http_timeout())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.into(),
            http_client,
        }
    }

    /// Issue a GET and parse the JSON body.
    ///
    /// The body is read as text first so a parse failure can report
    /// what the server actually sent.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> MarketResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(path, "GET market data");

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| MarketError::Transport {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| MarketError::Transport {
            path: path.to_string(),
            reason: format!("failed to read response body: {}", e),
        })?;

        if !status.is_success() {
            return Err(MarketError::Transport {
                path: path.to_string(),
                reason: format!("status {}: {}", status, body),
            });
        }

        serde_json::from_str(&body).map_err(|e| MarketError::InvalidResponse {
            path: path.to_string(),
            reason: format!("{} - {}", e, body),
        })
    }
}

impl Default for BinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MarketData for BinanceClient {
    async fn ping(&self) -> MarketResult<()> {
        let url = format!("{}{}", self.base_url, PING_PATH);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MarketError::Unreachable(format!(
                "liveness probe returned status {}",
                response.status()
            )));
        }

        Ok(())
    }

    async fn ticker_snapshot(&self) -> MarketResult<Vec<Ticker24h>> {
        self.get_json(TICKER_24H_PATH, &[]).await
    }

    async fn order_book(&self, symbol: &str, limit: u32) -> MarketResult<OrderBook> {
        let params = [
            ("symbol", symbol.to_string()),
            ("limit", limit.to_string()),
        ];
        self.get_json(DEPTH_PATH, &params).await
    }

    async fn book_ticker(&self, symbol: &str) -> MarketResult<BookTicker> {
        let params = [("symbol", symbol.to_string())];
        self.get_json(BOOK_TICKER_PATH, &params).await
    }
}

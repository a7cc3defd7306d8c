//! Capability trait between the core and the HTTP transport
//!
//! The derivation pipeline only ever needs these four calls. Keeping
//! them behind a trait lets the core run against a scripted mock in
//! tests and keeps the REST plumbing out of the algorithms.

use async_trait::async_trait;

use super::errors::MarketResult;
use super::types::{BookTicker, OrderBook, Ticker24h};

#[async_trait]
pub trait MarketData: Send + Sync {
    /// Liveness probe. `Err(MarketError::Unreachable)` if the API does
    /// not answer with a success status.
    async fn ping(&self) -> MarketResult<()>;

    /// 24h ticker statistics for every symbol on the exchange.
    async fn ticker_snapshot(&self) -> MarketResult<Vec<Ticker24h>>;

    /// Order-book depth for one symbol, up to `limit` levels per side.
    async fn order_book(&self, symbol: &str, limit: u32) -> MarketResult<OrderBook>;

    /// Best bid/ask quote for one symbol.
    async fn book_ticker(&self, symbol: &str) -> MarketResult<BookTicker>;
}

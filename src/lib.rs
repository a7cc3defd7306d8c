//! driftwatch - Binance market-data watcher
//!
//! Polls the public market-data REST API and derives:
//! - top symbols per quote asset, ranked by a 24h ticker field
//! - summed notional value of each symbol's order-book depth
//! - bid/ask spreads, sampled twice per cycle
//! - the absolute spread delta, published as a Prometheus gauge

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod telemetry;

pub use error::AppError;

//! Market-data adapter for the public exchange REST API
//!
//! The core consumes the transport through the `MarketData` trait;
//! `BinanceClient` is the only production implementation.

pub mod binance;
pub mod errors;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use binance::BinanceClient;
pub use errors::{MarketError, MarketResult};
pub use traits::MarketData;
pub use types::{BookTicker, OrderBook, OrderLevel, Ticker24h};

//! Adapter-level error types
//!
//! Everything the market-data client can fail with. There is no retry
//! layer: one failed call surfaces immediately to the core operation
//! that issued it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    /// The liveness probe did not return a success status. Fatal at
    /// startup, before any sampling begins.
    #[error("Market data API is not reachable: {0}")]
    Unreachable(String),

    /// A request failed at the transport level or came back with a
    /// non-success status.
    #[error("Request to {path} failed: {reason}")]
    Transport { path: String, reason: String },

    /// The endpoint answered 2xx but the payload did not parse.
    #[error("Invalid response from {path}: {reason}")]
    InvalidResponse { path: String, reason: String },
}

/// Result type alias for adapter operations
pub type MarketResult<T> = std::result::Result<T, MarketError>;

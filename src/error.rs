//! Application-wide error types using thiserror
//!
//! Every fallible operation in the crate surfaces as an `AppError`.
//! Failures are never recovered locally: a failed API call aborts the
//! in-flight operation and propagates to the caller.

use thiserror::Error;

use crate::adapters::errors::MarketError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Market data error: {0}")]
    Market(#[from] MarketError),

    /// The caller asked to rank by a column the 24h ticker snapshot
    /// does not have.
    #[error("Unknown ranking field: {0}")]
    InvalidField(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

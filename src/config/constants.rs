//! Application-wide constants and configuration defaults
//!
//! Centralizes hardcoded values; each can be overridden via an
//! environment variable.

use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the public market-data API (default: Binance)
///
/// Environment variable: `MARKET_API_URL`
pub fn api_base_url() -> String {
    std::env::var("MARKET_API_URL").unwrap_or_else(|_| "https://api.binance.com/api".to_string())
}

/// HTTP client timeout (default: 10 seconds)
///
/// Environment variable: `HTTP_TIMEOUT_SECS`
pub fn http_timeout() -> Duration {
    let secs = std::env::var("HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);
    Duration::from_secs(secs)
}

/// Path of the runtime configuration file (default: `config.yaml`)
///
/// Environment variable: `CONFIG_PATH`
pub fn config_path() -> PathBuf {
    std::env::var("CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.yaml"))
}

//! Logging initialization
//!
//! # Environment Variables
//! - `LOG_FORMAT`: output format, `json` (default) or `pretty`
//! - `RUST_LOG`: log level filter (default: `info`)

use tracing_subscriber::EnvFilter;

/// Initialize structured logging.
///
/// JSON output by default so log aggregation can parse it; set
/// `LOG_FORMAT=pretty` for development.
pub fn init_logging() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "pretty" {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .pretty()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    }
}

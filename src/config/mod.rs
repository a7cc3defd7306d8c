//! Configuration module: runtime settings, YAML loading, defaults
//!
//! - Configuration types (`AppConfig`, `WatchConfig`, `MetricsConfig`)
//! - YAML loading (`load_config`, `load_config_from_str`)
//! - Application constants with environment variable overrides
//! - Logging initialization

pub mod constants;
pub mod logging;
mod loader;
mod types;

// Re-export types
pub use types::{AppConfig, MetricsConfig, WatchConfig};

// Re-export loader functions
pub use loader::{load_config, load_config_from_str};

//! Configuration types for the watcher
//!
//! Loaded from YAML at startup. The core operations stay parameterized
//! at call time; this file only feeds the binary's driver loop.

use serde::{Deserialize, Serialize};

use crate::core::ranking::RankField;
use crate::error::AppError;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// What to watch and how to rank it
    pub watch: WatchConfig,
    /// Metrics exposition endpoint
    #[serde(default)]
    pub metrics: MetricsConfig,
}

impl AppConfig {
    /// Validate all configuration rules
    pub fn validate(&self) -> Result<(), AppError> {
        self.watch.validate()?;
        self.metrics.validate()
    }
}

/// Watch parameters driving the derivation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Quote-asset suffix symbols must end with (e.g. "USDT")
    pub quote_asset: String,
    /// 24h ticker column to rank by (e.g. "volume", "count")
    pub rank_field: String,
    /// How many top symbols to keep
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Levels per side requested from the depth endpoint
    #[serde(default = "default_depth_limit")]
    pub depth_limit: u32,
    /// Highest-priced levels per side retained for the notional sum
    #[serde(default = "default_retain")]
    pub retain: usize,
    /// Seconds between the two spread samples of a monitor cycle
    #[serde(default = "default_sample_interval_secs")]
    pub sample_interval_secs: u64,
}

impl WatchConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.quote_asset.trim().is_empty() {
            return Err(AppError::Config(
                "watch.quote_asset cannot be empty".to_string(),
            ));
        }

        self.rank_field.parse::<RankField>().map_err(|_| {
            AppError::Config(format!(
                "watch.rank_field '{}' is not a 24h ticker column",
                self.rank_field
            ))
        })?;

        if self.top_k == 0 {
            return Err(AppError::Config("watch.top_k must be at least 1".to_string()));
        }

        if self.retain == 0 {
            return Err(AppError::Config(
                "watch.retain must be at least 1".to_string(),
            ));
        }

        if self.depth_limit == 0 {
            return Err(AppError::Config(
                "watch.depth_limit must be at least 1".to_string(),
            ));
        }

        if self.sample_interval_secs == 0 {
            return Err(AppError::Config(
                "watch.sample_interval_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured rank field, parsed. Call after `validate()`.
    pub fn field(&self) -> Result<RankField, AppError> {
        self.rank_field.parse()
    }
}

/// Metrics endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Port the Prometheus scrape endpoint listens on
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.port == 0 {
            return Err(AppError::Config("metrics.port cannot be 0".to_string()));
        }
        Ok(())
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

fn default_top_k() -> usize {
    5
}

fn default_depth_limit() -> u32 {
    500
}

fn default_retain() -> usize {
    200
}

fn default_sample_interval_secs() -> u64 {
    10
}

fn default_metrics_port() -> u16 {
    8080
}

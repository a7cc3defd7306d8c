//! Core module - ranking, notional aggregation, spread sampling, delta monitoring
//!
//! Uses explicit re-exports instead of glob exports to keep the public
//! API visible in one place.

pub mod monitor;
pub mod notional;
pub mod ranking;
pub mod spread;

// Explicit re-exports for ranking module
pub use ranking::{RankField, RankedSymbol, SymbolRanker, DEFAULT_TOP_K};

// Explicit re-exports for notional module
pub use notional::{NotionalAggregator, DEFAULT_DEPTH_LIMIT, DEFAULT_RETAIN};

// Explicit re-exports for spread module
pub use spread::{SpreadSampler, SpreadSnapshot};

// Explicit re-exports for monitor module
pub use monitor::{spread_delta, DeltaMonitor, DEFAULT_SAMPLE_INTERVAL, SPREAD_DELTA_GAUGE};

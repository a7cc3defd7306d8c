//! Spread-delta monitoring
//!
//! Takes two time-separated spread snapshots, re-running the ranking
//! for each, and publishes the absolute per-symbol delta as a gauge.
//! The two rolling snapshots are the only state that outlives a single
//! operation, and they are owned by the monitor instance.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use metrics::gauge;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::adapters::traits::MarketData;
use crate::error::Result;

use super::ranking::{RankField, SymbolRanker, DEFAULT_TOP_K};
use super::spread::{SpreadSampler, SpreadSnapshot};

/// Gauge published once per completed cycle, labeled by symbol
pub const SPREAD_DELTA_GAUGE: &str = "absolute_spread_delta";

/// Default wait between the two spread samples of a cycle
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(10);

/// Computes the drift of bid/ask spreads between two samples
pub struct DeltaMonitor<M: MarketData> {
    ranker: SymbolRanker<M>,
    sampler: SpreadSampler<M>,
    quote_asset: String,
    field: RankField,
    top_k: usize,
    interval: Duration,
}

impl<M: MarketData> DeltaMonitor<M> {
    pub fn new(market: Arc<M>, quote_asset: impl Into<String>, field: RankField) -> Self {
        Self {
            ranker: SymbolRanker::new(Arc::clone(&market)),
            sampler: SpreadSampler::new(market),
            quote_asset: quote_asset.into(),
            field,
            top_k: DEFAULT_TOP_K,
            interval: DEFAULT_SAMPLE_INTERVAL,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Run one full cycle: sample, wait, sample again, publish.
    ///
    /// The ranking is re-executed for the second snapshot, so the
    /// symbol universe may drift in between; the delta map covers
    /// exactly the symbols present in both snapshots. Deltas are
    /// published to the gauge before returning.
    pub async fn compute_once(&self) -> Result<HashMap<String, f64>> {
        let first = self.take_snapshot().await?;
        debug!(symbols = first.spreads.len(), "first spread snapshot taken");

        tokio::time::sleep(self.interval).await;

        let second = self.take_snapshot().await?;
        debug!(symbols = second.spreads.len(), "second spread snapshot taken");

        let deltas = spread_delta(&first, &second);
        for (symbol, delta) in &deltas {
            gauge!(SPREAD_DELTA_GAUGE, "symbol" => symbol.clone()).set(*delta);
        }

        info!(
            symbols = deltas.len(),
            elapsed_ms = (second.sampled_at - first.sampled_at).num_milliseconds(),
            "spread deltas published"
        );
        Ok(deltas)
    }

    /// Repeat `compute_once` until shutdown.
    ///
    /// A shutdown signal cancels the in-flight cycle, including the
    /// wait between samples. A fetch failure is fatal: it propagates
    /// out and halts the loop.
    pub async fn run(&self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        info!(
            quote_asset = %self.quote_asset,
            field = %self.field,
            interval_secs = self.interval.as_secs(),
            "delta monitor started"
        );

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("delta monitor shutting down");
                    return Ok(());
                }
                cycle = self.compute_once() => {
                    cycle?;
                }
            }
        }
    }

    async fn take_snapshot(&self) -> Result<SpreadSnapshot> {
        let ranked = self
            .ranker
            .rank(&self.quote_asset, self.field, self.top_k)
            .await?;
        self.sampler.sample(&ranked).await
    }
}

/// Absolute per-symbol delta between two snapshots.
///
/// The domain is the intersection of the two symbol sets; symbols
/// present in only one snapshot are excluded.
pub fn spread_delta(first: &SpreadSnapshot, second: &SpreadSnapshot) -> HashMap<String, f64> {
    first
        .spreads
        .iter()
        .filter_map(|(symbol, t1)| {
            second
                .spreads
                .get(symbol)
                .map(|t2| (symbol.clone(), (t2 - t1).abs()))
        })
        .collect()
}

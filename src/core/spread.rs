//! Bid/ask spread sampling
//!
//! Converts the best bid/ask quote of each ranked symbol into a spread
//! value. A sample is all-or-nothing: one symbol's fetch failure fails
//! the whole snapshot, never a partial one.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::adapters::traits::MarketData;
use crate::error::Result;

use super::ranking::RankedSymbol;

/// Per-symbol spreads taken at one instant
#[derive(Debug, Clone)]
pub struct SpreadSnapshot {
    /// When the sample completed
    pub sampled_at: DateTime<Utc>,
    /// Symbol -> best ask minus best bid
    pub spreads: HashMap<String, f64>,
}

impl SpreadSnapshot {
    pub fn new(spreads: HashMap<String, f64>) -> Self {
        Self {
            sampled_at: Utc::now(),
            spreads,
        }
    }
}

/// Samples best-quote spreads for a ranked symbol set
pub struct SpreadSampler<M: MarketData> {
    market: Arc<M>,
}

impl<M: MarketData> SpreadSampler<M> {
    pub fn new(market: Arc<M>) -> Self {
        Self { market }
    }

    /// Take one spread snapshot over the ranked symbols.
    ///
    /// A crossed book (ask below bid) yields a negative spread and is
    /// passed through, not rejected.
    pub async fn sample(&self, ranked: &[RankedSymbol]) -> Result<SpreadSnapshot> {
        let mut spreads = HashMap::with_capacity(ranked.len());

        for entry in ranked {
            let quote = self.market.book_ticker(&entry.symbol).await?;
            spreads.insert(entry.symbol.clone(), quote.spread());
        }

        Ok(SpreadSnapshot::new(spreads))
    }
}

//! Order-book depth to notional exposure
//!
//! For each ranked symbol, fetches the depth snapshot and sums
//! price x quantity over the retained levels of each side, keyed as
//! `"{symbol}_bids"` / `"{symbol}_asks"`.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::adapters::traits::MarketData;
use crate::adapters::types::OrderLevel;
use crate::error::Result;

use super::ranking::RankedSymbol;

/// Levels per side requested from the depth endpoint
pub const DEFAULT_DEPTH_LIMIT: u32 = 500;

/// Levels per side retained for the notional sum
pub const DEFAULT_RETAIN: usize = 200;

/// Sums order-book depth into per-side notional value
pub struct NotionalAggregator<M: MarketData> {
    market: Arc<M>,
    depth_limit: u32,
    retain: usize,
}

impl<M: MarketData> NotionalAggregator<M> {
    pub fn new(market: Arc<M>) -> Self {
        Self::with_limits(market, DEFAULT_DEPTH_LIMIT, DEFAULT_RETAIN)
    }

    pub fn with_limits(market: Arc<M>, depth_limit: u32, retain: usize) -> Self {
        Self {
            market,
            depth_limit,
            retain,
        }
    }

    /// Aggregate notional value per side for every ranked symbol.
    ///
    /// One symbol's fetch failure aborts the whole batch. An empty or
    /// short book side sums whatever levels are present.
    pub async fn aggregate(&self, ranked: &[RankedSymbol]) -> Result<HashMap<String, f64>> {
        let mut notional = HashMap::with_capacity(ranked.len() * 2);

        for entry in ranked {
            let book = self.market.order_book(&entry.symbol, self.depth_limit).await?;
            // Both sides retain their highest-priced levels: the asks are
            // truncated by the same descending order as the bids, so the
            // ask sum covers the retain highest offers, not the tightest.
            notional.insert(
                format!("{}_bids", entry.symbol),
                side_notional(book.bids, self.retain),
            );
            notional.insert(
                format!("{}_asks", entry.symbol),
                side_notional(book.asks, self.retain),
            );
        }

        Ok(notional)
    }
}

/// Keep the `retain` highest-priced levels and sum their notional.
pub(crate) fn side_notional(mut levels: Vec<OrderLevel>, retain: usize) -> f64 {
    levels.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
    levels.truncate(retain);
    levels.iter().map(OrderLevel::notional).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(pairs: &[(f64, f64)]) -> Vec<OrderLevel> {
        pairs.iter().map(|&(p, q)| OrderLevel::new(p, q)).collect()
    }

    #[test]
    fn sums_retained_bids_by_descending_price() {
        let bids = levels(&[(10.0, 1.0), (9.0, 2.0), (8.0, 3.0)]);
        // 10*1 + 9*2 = 28
        assert!((side_notional(bids, 2) - 28.0).abs() < 1e-12);
    }

    #[test]
    fn asks_also_keep_highest_priced_levels() {
        let asks = levels(&[(11.0, 1.0), (12.0, 2.0)]);
        // 12*2 + 11*1 = 35: the highest offers, not the tightest
        assert!((side_notional(asks, 2) - 35.0).abs() < 1e-12);
    }

    #[test]
    fn short_side_sums_without_padding() {
        let bids = levels(&[(5.0, 2.0)]);
        assert!((side_notional(bids, 200) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn empty_side_sums_to_zero() {
        assert_eq!(side_notional(Vec::new(), 200), 0.0);
    }

    #[test]
    fn unsorted_input_is_ranked_before_truncation() {
        let side = levels(&[(8.0, 3.0), (10.0, 1.0), (9.0, 2.0)]);
        assert!((side_notional(side, 2) - 28.0).abs() < 1e-12);
    }
}

//! Symbol ranking over the 24h ticker snapshot
//!
//! Filters symbols by quote-asset suffix, coerces one ticker column to
//! a number, and keeps the top K by value. Symbols whose column does
//! not coerce are dropped from the ranking, not treated as zero.

use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::Arc;

use crate::adapters::traits::MarketData;
use crate::adapters::types::Ticker24h;
use crate::error::{AppError, Result};

/// How many symbols a ranking keeps by default
pub const DEFAULT_TOP_K: usize = 5;

/// Numeric columns of the 24h ticker snapshot a ranking can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankField {
    Volume,
    QuoteVolume,
    Count,
    LastPrice,
    HighPrice,
    LowPrice,
    PriceChange,
    PriceChangePercent,
    WeightedAvgPrice,
}

impl FromStr for RankField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "volume" => Ok(Self::Volume),
            "quoteVolume" => Ok(Self::QuoteVolume),
            "count" => Ok(Self::Count),
            "lastPrice" => Ok(Self::LastPrice),
            "highPrice" => Ok(Self::HighPrice),
            "lowPrice" => Ok(Self::LowPrice),
            "priceChange" => Ok(Self::PriceChange),
            "priceChangePercent" => Ok(Self::PriceChangePercent),
            "weightedAvgPrice" => Ok(Self::WeightedAvgPrice),
            other => Err(AppError::InvalidField(other.to_string())),
        }
    }
}

impl RankField {
    /// The API column name this field ranks by.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::QuoteVolume => "quoteVolume",
            Self::Count => "count",
            Self::LastPrice => "lastPrice",
            Self::HighPrice => "highPrice",
            Self::LowPrice => "lowPrice",
            Self::PriceChange => "priceChange",
            Self::PriceChangePercent => "priceChangePercent",
            Self::WeightedAvgPrice => "weightedAvgPrice",
        }
    }

    /// Coerce this column of one ticker row to a number.
    ///
    /// Returns `None` when the value does not parse or is not finite;
    /// the ranking drops such rows entirely.
    fn coerce(&self, ticker: &Ticker24h) -> Option<f64> {
        let raw = match self {
            Self::Count => return Some(ticker.count as f64),
            Self::Volume => &ticker.volume,
            Self::QuoteVolume => &ticker.quote_volume,
            Self::LastPrice => &ticker.last_price,
            Self::HighPrice => &ticker.high_price,
            Self::LowPrice => &ticker.low_price,
            Self::PriceChange => &ticker.price_change,
            Self::PriceChangePercent => &ticker.price_change_percent,
            Self::WeightedAvgPrice => &ticker.weighted_avg_price,
        };
        raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl std::fmt::Display for RankField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a ranking: a symbol and the value it ranked by
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSymbol {
    pub symbol: String,
    pub value: f64,
}

impl RankedSymbol {
    pub fn new(symbol: impl Into<String>, value: f64) -> Self {
        Self {
            symbol: symbol.into(),
            value,
        }
    }
}

/// Ranks symbols from the live ticker snapshot
pub struct SymbolRanker<M: MarketData> {
    market: Arc<M>,
}

impl<M: MarketData> SymbolRanker<M> {
    pub fn new(market: Arc<M>) -> Self {
        Self { market }
    }

    /// Fetch the 24h snapshot and rank it.
    ///
    /// Keeps symbols ending in `quote_asset`, descending by `field`,
    /// at most `top_k` of them. Fewer qualifying symbols than `top_k`
    /// is not an error; an empty result is an empty ranking.
    pub async fn rank(
        &self,
        quote_asset: &str,
        field: RankField,
        top_k: usize,
    ) -> Result<Vec<RankedSymbol>> {
        if quote_asset.trim().is_empty() {
            return Err(AppError::Config(
                "quote asset suffix cannot be empty".to_string(),
            ));
        }

        let snapshot = self.market.ticker_snapshot().await?;
        Ok(rank_tickers(snapshot, quote_asset, field, top_k))
    }
}

/// Rank an already-fetched snapshot.
///
/// The sort is stable, so symbols with equal values keep the order the
/// API returned them in.
pub(crate) fn rank_tickers(
    snapshot: Vec<Ticker24h>,
    quote_asset: &str,
    field: RankField,
    top_k: usize,
) -> Vec<RankedSymbol> {
    let mut ranked: Vec<RankedSymbol> = snapshot
        .into_iter()
        // A symbol equal to the bare suffix has no base asset and does
        // not qualify.
        .filter(|t| t.symbol.len() > quote_asset.len() && t.symbol.ends_with(quote_asset))
        .filter_map(|t| field.coerce(&t).map(|value| RankedSymbol::new(t.symbol, value)))
        .collect();

    ranked.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    ranked.truncate(top_k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::errors::{MarketError, MarketResult};
    use crate::adapters::types::{BookTicker, OrderBook};
    use async_trait::async_trait;

    struct StaticMarket {
        tickers: Vec<Ticker24h>,
    }

    #[async_trait]
    impl MarketData for StaticMarket {
        async fn ping(&self) -> MarketResult<()> {
            Ok(())
        }

        async fn ticker_snapshot(&self) -> MarketResult<Vec<Ticker24h>> {
            Ok(self.tickers.clone())
        }

        async fn order_book(&self, _symbol: &str, _limit: u32) -> MarketResult<OrderBook> {
            Ok(OrderBook::default())
        }

        async fn book_ticker(&self, symbol: &str) -> MarketResult<BookTicker> {
            Err(MarketError::Transport {
                path: "/v3/ticker/bookTicker".to_string(),
                reason: format!("not scripted for {}", symbol),
            })
        }
    }

    fn ticker(symbol: &str, volume: &str, count: u64) -> Ticker24h {
        Ticker24h {
            symbol: symbol.to_string(),
            volume: volume.to_string(),
            count,
            ..Default::default()
        }
    }

    #[test]
    fn rank_field_parses_known_columns() {
        assert_eq!("volume".parse::<RankField>().unwrap(), RankField::Volume);
        assert_eq!("count".parse::<RankField>().unwrap(), RankField::Count);
        assert_eq!(
            "weightedAvgPrice".parse::<RankField>().unwrap(),
            RankField::WeightedAvgPrice
        );
    }

    #[test]
    fn rank_field_rejects_unknown_column() {
        let err = "openInterest".parse::<RankField>().unwrap_err();
        assert!(matches!(err, AppError::InvalidField(f) if f == "openInterest"));
    }

    #[test]
    fn filters_by_suffix_and_sorts_descending() {
        let snapshot = vec![
            ticker("AAABTC", "100", 0),
            ticker("BBBBTC", "50", 0),
            ticker("CCCUSDT", "200", 0),
        ];
        let ranked = rank_tickers(snapshot, "BTC", RankField::Volume, 5);
        assert_eq!(
            ranked,
            vec![
                RankedSymbol::new("AAABTC", 100.0),
                RankedSymbol::new("BBBBTC", 50.0),
            ]
        );
    }

    #[test]
    fn truncates_to_top_k() {
        let snapshot = vec![
            ticker("AUSDT", "1", 0),
            ticker("BUSDT", "3", 0),
            ticker("CUSDT", "2", 0),
        ];
        let ranked = rank_tickers(snapshot, "USDT", RankField::Volume, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].symbol, "BUSDT");
        assert_eq!(ranked[1].symbol, "CUSDT");
    }

    #[test]
    fn ties_keep_snapshot_order() {
        let snapshot = vec![
            ticker("AUSDT", "7", 0),
            ticker("BUSDT", "7", 0),
            ticker("CUSDT", "7", 0),
        ];
        let ranked = rank_tickers(snapshot, "USDT", RankField::Volume, 5);
        let symbols: Vec<&str> = ranked.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AUSDT", "BUSDT", "CUSDT"]);
    }

    #[test]
    fn non_coercible_values_are_dropped() {
        let snapshot = vec![
            ticker("AUSDT", "10", 0),
            ticker("BUSDT", "", 0),
            ticker("CUSDT", "garbage", 0),
            ticker("DUSDT", "NaN", 0),
        ];
        let ranked = rank_tickers(snapshot, "USDT", RankField::Volume, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].symbol, "AUSDT");
    }

    #[test]
    fn ranks_by_count_column() {
        let snapshot = vec![ticker("AUSDT", "0", 5), ticker("BUSDT", "0", 9)];
        let ranked = rank_tickers(snapshot, "USDT", RankField::Count, 5);
        assert_eq!(ranked[0].symbol, "BUSDT");
        assert_eq!(ranked[0].value, 9.0);
    }

    #[test]
    fn bare_suffix_symbol_does_not_qualify() {
        let snapshot = vec![ticker("USDT", "10", 0), ticker("AUSDT", "5", 0)];
        let ranked = rank_tickers(snapshot, "USDT", RankField::Volume, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].symbol, "AUSDT");
    }

    #[test]
    fn empty_snapshot_ranks_empty() {
        let ranked = rank_tickers(Vec::new(), "USDT", RankField::Volume, 5);
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn rank_fetches_and_filters() {
        let market = Arc::new(StaticMarket {
            tickers: vec![
                ticker("AAABTC", "100", 0),
                ticker("BBBBTC", "50", 0),
                ticker("CCCUSDT", "200", 0),
            ],
        });
        let ranker = SymbolRanker::new(market);
        let ranked = ranker.rank("BTC", RankField::Volume, 5).await.unwrap();
        let symbols: Vec<&str> = ranked.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAABTC", "BBBBTC"]);
    }

    #[tokio::test]
    async fn rank_rejects_empty_suffix() {
        let market = Arc::new(StaticMarket { tickers: vec![] });
        let ranker = SymbolRanker::new(market);
        let err = ranker.rank("", RankField::Volume, 5).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}

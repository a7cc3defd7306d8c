//! Wire types for the public market-data endpoints
//!
//! The API encodes most numeric fields as JSON strings (`"volume":
//! "1234.5"`). Fields the core coerces on demand stay as strings here;
//! fields that must always be numeric parse at the deserialization
//! boundary so a bad payload fails the call instead of leaking NaNs.

use serde::{Deserialize, Deserializer};

/// One row of the 24h ticker snapshot (`/v3/ticker/24hr`).
///
/// Ranking coerces one of the string columns to f64 per call, so they
/// are kept verbatim; `count` is the only field the API sends as a
/// JSON number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24h {
    pub symbol: String,
    #[serde(default)]
    pub price_change: String,
    #[serde(default)]
    pub price_change_percent: String,
    #[serde(default)]
    pub weighted_avg_price: String,
    #[serde(default)]
    pub last_price: String,
    #[serde(default)]
    pub high_price: String,
    #[serde(default)]
    pub low_price: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub quote_volume: String,
    #[serde(default)]
    pub count: u64,
}

/// A single price level of an order book side.
///
/// The depth endpoint sends levels as `["price", "quantity"]` string
/// pairs; both components must parse.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawLevel")]
pub struct OrderLevel {
    pub price: f64,
    pub quantity: f64,
}

impl OrderLevel {
    pub fn new(price: f64, quantity: f64) -> Self {
        Self { price, quantity }
    }

    /// Exposure at this level: price x quantity.
    pub fn notional(&self) -> f64 {
        self.price * self.quantity
    }
}

#[derive(Deserialize)]
struct RawLevel(String, String);

impl TryFrom<RawLevel> for OrderLevel {
    type Error = String;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        let price = raw
            .0
            .parse::<f64>()
            .map_err(|e| format!("bad level price '{}': {}", raw.0, e))?;
        let quantity = raw
            .1
            .parse::<f64>()
            .map_err(|e| format!("bad level quantity '{}': {}", raw.1, e))?;
        Ok(Self { price, quantity })
    }
}

/// Depth snapshot for one symbol (`/v3/depth`).
///
/// A side the API omits deserializes as empty; downstream aggregation
/// sums whatever levels are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderBook {
    #[serde(default)]
    pub bids: Vec<OrderLevel>,
    #[serde(default)]
    pub asks: Vec<OrderLevel>,
}

/// Best bid/ask quote for one symbol (`/v3/ticker/bookTicker`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    pub symbol: String,
    #[serde(deserialize_with = "f64_from_str")]
    pub bid_price: f64,
    #[serde(deserialize_with = "f64_from_str")]
    pub ask_price: f64,
}

impl BookTicker {
    /// Best ask minus best bid. Negative on a crossed book; the API is
    /// not expected to return one, but the value is passed through
    /// rather than rejected.
    pub fn spread(&self) -> f64 {
        self.ask_price - self.bid_price
    }
}

fn f64_from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<f64>().map_err(serde::de::Error::custom)
}

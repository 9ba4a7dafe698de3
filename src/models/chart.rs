//! Historical price series models.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Response from `/coins/{id}/market_chart`.
///
/// Each series is a list of `[timestamp_ms, value]` pairs ordered by time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketChart {
    /// Price over the lookback window
    pub prices: Vec<ChartPoint>,

    /// Market cap over the lookback window
    pub market_caps: Vec<ChartPoint>,

    /// 24-hour volume over the lookback window
    pub total_volumes: Vec<ChartPoint>,
}

/// One `[timestamp_ms, value]` pair of a chart series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint(pub i64, pub f64);

impl ChartPoint {
    /// Timestamp of the sample, or `None` for an out-of-range value.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }

    /// Sampled value (price, cap, or volume depending on the series).
    pub fn value(&self) -> f64 {
        self.1
    }
}

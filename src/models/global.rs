//! Aggregate market statistics models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Wrapper the `/global` endpoint puts around its payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlobalStatsResponse {
    pub data: GlobalStats,
}

/// Aggregate statistics for the whole market.
///
/// Map keys are lowercase currency codes (e.g., "usd", "btc").
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlobalStats {
    /// Number of coins the provider tracks
    pub active_cryptocurrencies: u32,

    /// Announced but not yet launched ICOs
    pub upcoming_icos: u32,

    /// Currently running ICOs
    pub ongoing_icos: u32,

    /// Completed ICOs
    pub ended_icos: u32,

    /// Number of exchanges the provider tracks
    pub markets: u32,

    /// Total market cap per currency
    pub total_market_cap: HashMap<String, f64>,

    /// Total 24-hour volume per currency
    pub total_volume: HashMap<String, f64>,

    /// Market dominance in percent, keyed by coin symbol
    pub market_cap_percentage: HashMap<String, f64>,

    /// 24-hour total market cap change in percent, USD-denominated
    pub market_cap_change_percentage_24h_usd: f64,

    /// Unix timestamp of the provider's last refresh
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_stats_parsing() {
        let json = r#"{
            "data": {
                "active_cryptocurrencies": 13427,
                "upcoming_icos": 0,
                "ongoing_icos": 49,
                "ended_icos": 3376,
                "markets": 1047,
                "total_market_cap": { "usd": 2567890123456.0, "btc": 38079123.0 },
                "total_volume": { "usd": 98765432109.0 },
                "market_cap_percentage": { "btc": 51.7, "eth": 15.5 },
                "market_cap_change_percentage_24h_usd": -0.87,
                "updated_at": 1712057100
            }
        }"#;

        let response: GlobalStatsResponse = serde_json::from_str(json).unwrap();
        let stats = response.data;
        assert_eq!(stats.active_cryptocurrencies, 13427);
        assert_eq!(stats.markets, 1047);
        assert_eq!(stats.total_market_cap["usd"], 2567890123456.0);
        assert_eq!(stats.market_cap_percentage["btc"], 51.7);
        assert_eq!(stats.updated_at, 1712057100);
    }
}

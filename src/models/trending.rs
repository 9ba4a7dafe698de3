//! Trending coin models.

use serde::{Deserialize, Serialize};

/// Response from `/search/trending`.
///
/// The endpoint also returns trending NFTs and categories; those are
/// ignored during deserialization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub coins: Vec<TrendingEntry>,
}

/// One slot in the trending list; the provider nests the coin under `item`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrendingEntry {
    pub item: TrendingCoin,
}

/// A trending coin.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrendingCoin {
    /// Provider coin id (e.g., "pepe")
    pub id: String,

    /// Internal numeric id
    pub coin_id: i64,

    /// Display name
    pub name: String,

    /// Ticker symbol
    pub symbol: String,

    /// Rank by market cap; absent for unranked coins
    pub market_cap_rank: Option<u32>,

    /// Thumbnail logo URL
    pub thumb: String,

    /// Small logo URL
    pub small: String,

    /// Large logo URL
    pub large: String,

    /// URL slug
    pub slug: String,

    /// Price denominated in BTC
    pub price_btc: f64,

    /// Position within the trending list, zero-based
    pub score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_response_parsing() {
        let json = r#"{
            "coins": [
                {
                    "item": {
                        "id": "pepe",
                        "coin_id": 29850,
                        "name": "Pepe",
                        "symbol": "PEPE",
                        "market_cap_rank": 37,
                        "thumb": "https://assets.coingecko.com/coins/images/29850/thumb/pepe.jpeg",
                        "small": "https://assets.coingecko.com/coins/images/29850/small/pepe.jpeg",
                        "large": "https://assets.coingecko.com/coins/images/29850/large/pepe.jpeg",
                        "slug": "pepe",
                        "price_btc": 1.15e-10,
                        "score": 0,
                        "data": { "price": 0.0000078 }
                    }
                }
            ],
            "nfts": [],
            "categories": []
        }"#;

        let response: TrendingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.coins.len(), 1);
        let coin = &response.coins[0].item;
        assert_eq!(coin.id, "pepe");
        assert_eq!(coin.market_cap_rank, Some(37));
        assert_eq!(coin.score, 0);
    }
}

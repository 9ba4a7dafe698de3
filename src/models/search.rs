//! Free-text coin search models.

use serde::{Deserialize, Serialize};

/// Response from `/search`.
///
/// The endpoint also returns matching exchanges, categories, and NFTs;
/// the dashboard only renders coins, so the rest is ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub coins: Vec<SearchCoin>,
}

/// One coin hit from a free-text search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchCoin {
    /// Provider coin id
    pub id: String,

    /// Display name
    pub name: String,

    /// Ticker symbol
    pub symbol: String,

    /// Rank by market cap; absent for unranked coins
    pub market_cap_rank: Option<u32>,

    /// Thumbnail logo URL
    #[serde(default)]
    pub thumb: Option<String>,

    /// Large logo URL
    #[serde(default)]
    pub large: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_parsing() {
        let json = r#"{
            "coins": [
                {
                    "id": "bitcoin",
                    "name": "Bitcoin",
                    "api_symbol": "bitcoin",
                    "symbol": "BTC",
                    "market_cap_rank": 1,
                    "thumb": "https://assets.coingecko.com/coins/images/1/thumb/bitcoin.png",
                    "large": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png"
                },
                {
                    "id": "bitcoin-cash",
                    "name": "Bitcoin Cash",
                    "api_symbol": "bitcoin-cash",
                    "symbol": "BCH",
                    "market_cap_rank": 16,
                    "thumb": "https://assets.coingecko.com/coins/images/780/thumb/bch.png",
                    "large": "https://assets.coingecko.com/coins/images/780/large/bch.png"
                }
            ],
            "exchanges": [],
            "icos": [],
            "categories": [],
            "nfts": []
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.coins.len(), 2);
        assert_eq!(response.coins[0].id, "bitcoin");
        assert_eq!(response.coins[1].market_cap_rank, Some(16));
    }

    #[test]
    fn test_search_coin_parsing_unranked() {
        let json = r#"{
            "id": "obscure-coin",
            "name": "Obscure Coin",
            "symbol": "OBS",
            "market_cap_rank": null
        }"#;

        let coin: SearchCoin = serde_json::from_str(json).unwrap();
        assert!(coin.market_cap_rank.is_none());
        assert!(coin.thumb.is_none());
    }
}

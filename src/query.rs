//! Logical queries against the market data provider.
//!
//! A [`Query`] is an immutable description of one upstream request. Its
//! wire-level endpoint string doubles as the cache key, and each query
//! class carries its own cache time-to-live: volatile data (the market
//! listing) expires quickly, while slow-moving data (search results)
//! is kept long to conserve the request budget.

use std::time::Duration;

/// TTL for the paged market listing and batch lookups by id.
pub const TTL_LISTING: Duration = Duration::from_secs(60);

/// TTL for aggregate market statistics.
pub const TTL_GLOBAL: Duration = Duration::from_secs(120);

/// TTL for coin detail and chart series.
pub const TTL_DETAIL: Duration = Duration::from_secs(300);

/// TTL for the trending list.
pub const TTL_TRENDING: Duration = Duration::from_secs(600);

/// TTL for free-text search results.
pub const TTL_SEARCH: Duration = Duration::from_secs(1800);

/// Sort order for the market listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    MarketCapDesc,
    MarketCapAsc,
    VolumeDesc,
    VolumeAsc,
    IdAsc,
    IdDesc,
}

impl SortOrder {
    /// Wire-level value for the `order` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarketCapDesc => "market_cap_desc",
            Self::MarketCapAsc => "market_cap_asc",
            Self::VolumeDesc => "volume_desc",
            Self::VolumeAsc => "volume_asc",
            Self::IdAsc => "id_asc",
            Self::IdDesc => "id_desc",
        }
    }
}

/// A logical request against the market data provider.
///
/// Immutable once constructed; [`endpoint`](Self::endpoint) derives the
/// deterministic cache key and [`ttl`](Self::ttl) the cache lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Paged market listing (`/coins/markets`).
    CoinMarkets {
        /// Quote currency (e.g., "usd")
        vs_currency: String,
        /// Sort order for the page
        order: SortOrder,
        /// Rows per page
        per_page: u32,
        /// 1-based page index
        page: u32,
        /// Whether to include 7-day sparkline data
        sparkline: bool,
    },

    /// Batch listing for an explicit set of coin ids.
    CoinsByIds {
        /// Provider coin ids (e.g., "bitcoin")
        ids: Vec<String>,
        /// Quote currency
        vs_currency: String,
    },

    /// Full detail for one coin (`/coins/{id}`).
    CoinDetail {
        /// Provider coin id
        id: String,
    },

    /// Aggregate market statistics (`/global`).
    GlobalStats,

    /// Trending coins (`/search/trending`).
    Trending,

    /// Historical price series (`/coins/{id}/market_chart`).
    MarketChart {
        /// Provider coin id
        id: String,
        /// Quote currency
        vs_currency: String,
        /// Lookback window in days, or "max"
        days: String,
        /// Optional sampling interval (e.g., "daily")
        interval: Option<String>,
    },

    /// Free-text coin search (`/search`).
    Search {
        /// Search text, URL-encoded on the wire
        query: String,
    },
}

impl Query {
    /// Wire-level endpoint (path plus query string) for this request.
    ///
    /// Deterministic for a given query value; used verbatim as the
    /// cache key.
    pub fn endpoint(&self) -> String {
        match self {
            Self::CoinMarkets {
                vs_currency,
                order,
                per_page,
                page,
                sparkline,
            } => format!(
                "/coins/markets?vs_currency={}&order={}&per_page={}&page={}&sparkline={}",
                vs_currency,
                order.as_str(),
                per_page,
                page,
                sparkline
            ),
            Self::CoinsByIds { ids, vs_currency } => format!(
                "/coins/markets?vs_currency={}&ids={}&order=market_cap_desc&sparkline=false",
                vs_currency,
                ids.join(",")
            ),
            Self::CoinDetail { id } => format!(
                "/coins/{}?localization=false&tickers=false&market_data=true&community_data=false&developer_data=false&sparkline=false",
                id
            ),
            Self::GlobalStats => "/global".to_string(),
            Self::Trending => "/search/trending".to_string(),
            Self::MarketChart {
                id,
                vs_currency,
                days,
                interval,
            } => {
                let mut endpoint = format!(
                    "/coins/{}/market_chart?vs_currency={}&days={}",
                    id, vs_currency, days
                );
                if let Some(interval) = interval {
                    endpoint.push_str(&format!("&interval={}", interval));
                }
                endpoint
            }
            Self::Search { query } => format!("/search?query={}", urlencoding::encode(query)),
        }
    }

    /// Cache time-to-live for this query's class.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::CoinMarkets { .. } | Self::CoinsByIds { .. } => TTL_LISTING,
            Self::GlobalStats => TTL_GLOBAL,
            Self::CoinDetail { .. } | Self::MarketChart { .. } => TTL_DETAIL,
            Self::Trending => TTL_TRENDING,
            Self::Search { .. } => TTL_SEARCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_markets_endpoint() {
        let query = Query::CoinMarkets {
            vs_currency: "usd".to_string(),
            order: SortOrder::MarketCapDesc,
            per_page: 100,
            page: 1,
            sparkline: false,
        };
        assert_eq!(
            query.endpoint(),
            "/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=100&page=1&sparkline=false"
        );
    }

    #[test]
    fn test_coins_by_ids_endpoint() {
        let query = Query::CoinsByIds {
            ids: vec!["bitcoin".to_string(), "ethereum".to_string()],
            vs_currency: "eur".to_string(),
        };
        assert_eq!(
            query.endpoint(),
            "/coins/markets?vs_currency=eur&ids=bitcoin,ethereum&order=market_cap_desc&sparkline=false"
        );
    }

    #[test]
    fn test_coin_detail_endpoint() {
        let query = Query::CoinDetail {
            id: "bitcoin".to_string(),
        };
        assert_eq!(
            query.endpoint(),
            "/coins/bitcoin?localization=false&tickers=false&market_data=true&community_data=false&developer_data=false&sparkline=false"
        );
    }

    #[test]
    fn test_market_chart_endpoint_with_interval() {
        let query = Query::MarketChart {
            id: "bitcoin".to_string(),
            vs_currency: "usd".to_string(),
            days: "30".to_string(),
            interval: Some("daily".to_string()),
        };
        assert_eq!(
            query.endpoint(),
            "/coins/bitcoin/market_chart?vs_currency=usd&days=30&interval=daily"
        );
    }

    #[test]
    fn test_market_chart_endpoint_without_interval() {
        let query = Query::MarketChart {
            id: "bitcoin".to_string(),
            vs_currency: "usd".to_string(),
            days: "7".to_string(),
            interval: None,
        };
        assert_eq!(
            query.endpoint(),
            "/coins/bitcoin/market_chart?vs_currency=usd&days=7"
        );
    }

    #[test]
    fn test_search_endpoint_encodes_query() {
        let query = Query::Search {
            query: "wrapped bitcoin & friends".to_string(),
        };
        assert_eq!(
            query.endpoint(),
            "/search?query=wrapped%20bitcoin%20%26%20friends"
        );
    }

    #[test]
    fn test_endpoint_is_deterministic() {
        let a = Query::Trending;
        let b = Query::Trending;
        assert_eq!(a.endpoint(), b.endpoint());
    }

    #[test]
    fn test_ttl_per_query_class() {
        let listing = Query::CoinMarkets {
            vs_currency: "usd".to_string(),
            order: SortOrder::MarketCapDesc,
            per_page: 10,
            page: 1,
            sparkline: false,
        };
        assert_eq!(listing.ttl(), Duration::from_secs(60));
        assert_eq!(Query::GlobalStats.ttl(), Duration::from_secs(120));
        assert_eq!(
            Query::CoinDetail {
                id: "bitcoin".to_string()
            }
            .ttl(),
            Duration::from_secs(300)
        );
        assert_eq!(Query::Trending.ttl(), Duration::from_secs(600));
        assert_eq!(
            Query::Search {
                query: "btc".to_string()
            }
            .ttl(),
            Duration::from_secs(1800)
        );
    }
}

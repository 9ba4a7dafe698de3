//! Market data models
//!
//! This module contains the typed result structures for each query class:
//! - `coin` - Market listing rows and full coin detail (CoinMarket, CoinDetail)
//! - `global` - Aggregate market statistics (GlobalStats)
//! - `trending` - Trending coin list (TrendingResponse)
//! - `chart` - Historical price series (MarketChart, ChartPoint)
//! - `search` - Free-text coin search (SearchResponse)
//!
//! Unknown or extra upstream fields are ignored during deserialization;
//! fields the provider may return as `null` are `Option`.

mod chart;
mod coin;
mod global;
mod search;
mod trending;

pub use chart::{ChartPoint, MarketChart};
pub use coin::{CoinDetail, CoinImage, CoinLinks, CoinMarket, DetailMarketData, Description, Roi};
pub use global::{GlobalStats, GlobalStatsResponse};
pub use search::{SearchCoin, SearchResponse};
pub use trending::{TrendingCoin, TrendingEntry, TrendingResponse};

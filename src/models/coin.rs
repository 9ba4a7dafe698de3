//! Coin listing and detail models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the paged market listing (`/coins/markets`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinMarket {
    /// Provider coin id (e.g., "bitcoin")
    pub id: String,

    /// Ticker symbol (e.g., "btc")
    pub symbol: String,

    /// Display name (e.g., "Bitcoin")
    pub name: String,

    /// Logo URL
    pub image: String,

    /// Current price in the requested currency
    pub current_price: f64,

    /// Market capitalization in the requested currency
    pub market_cap: f64,

    /// Rank by market cap; absent for very small coins
    pub market_cap_rank: Option<u32>,

    /// Fully diluted valuation, when the max supply is known
    pub fully_diluted_valuation: Option<f64>,

    /// 24-hour trading volume
    pub total_volume: f64,

    /// 24-hour high
    pub high_24h: Option<f64>,

    /// 24-hour low
    pub low_24h: Option<f64>,

    /// Absolute 24-hour price change
    pub price_change_24h: f64,

    /// Relative 24-hour price change in percent
    pub price_change_percentage_24h: f64,

    /// Absolute 24-hour market cap change
    pub market_cap_change_24h: f64,

    /// Relative 24-hour market cap change in percent
    pub market_cap_change_percentage_24h: f64,

    /// Coins currently in circulation
    pub circulating_supply: f64,

    /// Total minted supply, when known
    pub total_supply: Option<f64>,

    /// Hard supply cap, when one exists
    pub max_supply: Option<f64>,

    /// All-time high price
    pub ath: f64,

    /// Percent change from the all-time high
    pub ath_change_percentage: f64,

    /// When the all-time high was reached
    pub ath_date: DateTime<Utc>,

    /// All-time low price
    pub atl: f64,

    /// Percent change from the all-time low
    pub atl_change_percentage: f64,

    /// When the all-time low was reached
    pub atl_date: DateTime<Utc>,

    /// Return on investment since listing, for coins that had an ICO
    pub roi: Option<Roi>,

    /// When the provider last refreshed this row
    pub last_updated: DateTime<Utc>,
}

/// Return-on-investment block attached to some listing rows.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roi {
    /// Multiple of the initial price
    pub times: f64,
    /// Currency the ROI is denominated in
    pub currency: String,
    /// ROI in percent
    pub percentage: f64,
}

/// Full detail for one coin (`/coins/{id}`).
///
/// Only the fields the dashboard renders are modeled; the provider
/// returns far more, all of which deserialization ignores.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinDetail {
    /// Provider coin id
    pub id: String,

    /// Ticker symbol
    pub symbol: String,

    /// Display name
    pub name: String,

    /// Localized description; only English is requested
    #[serde(default)]
    pub description: Description,

    /// Logo URLs at several sizes
    pub image: CoinImage,

    /// External links for the coin
    #[serde(default)]
    pub links: CoinLinks,

    /// Rank by market cap
    pub market_cap_rank: Option<u32>,

    /// Per-currency market figures
    pub market_data: DetailMarketData,
}

/// Localized description block; only `en` is populated because the
/// detail endpoint is requested with `localization=false`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Description {
    /// English description, possibly empty
    #[serde(default)]
    pub en: String,
}

/// Logo URLs at several sizes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinImage {
    pub thumb: String,
    pub small: String,
    pub large: String,
}

/// External links for a coin.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CoinLinks {
    /// Project homepages; the provider pads this with empty strings
    #[serde(default)]
    pub homepage: Vec<String>,

    /// Block explorer URLs
    #[serde(default)]
    pub blockchain_site: Vec<String>,

    /// Subreddit URL, when one exists
    #[serde(default)]
    pub subreddit_url: Option<String>,

    /// Twitter handle without the leading @
    #[serde(default)]
    pub twitter_screen_name: Option<String>,

    /// Source repositories
    #[serde(default)]
    pub repos_url: ReposUrl,
}

/// Source repository URLs grouped by host.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReposUrl {
    #[serde(default)]
    pub github: Vec<String>,
}

/// Per-currency market figures from the detail endpoint.
///
/// Keys are lowercase currency codes (e.g., "usd", "eur", "btc").
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetailMarketData {
    /// Current price per currency
    pub current_price: HashMap<String, f64>,

    /// Market cap per currency
    pub market_cap: HashMap<String, f64>,

    /// 24-hour volume per currency
    pub total_volume: HashMap<String, f64>,
}

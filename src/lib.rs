//! Coinboard Market Data Crate
//!
//! Read-through client for the CoinGecko API used by the Coinboard
//! dashboard. The client wraps every upstream call with an in-memory
//! cache and a sliding 24-hour request budget, and degrades to stale
//! cached data when the live path is unavailable.
//!
//! # Fetch path
//!
//! ```text
//! caller --> fetch(query)
//!              |
//!              v
//!       +-------------+  fresh   +---------+
//!       | cache check | -------> | payload |
//!       +-------------+          +---------+
//!              | miss/stale
//!              v
//!       +--------------+  exhausted   +----------------------+
//!       | budget check | -----------> | stale cache fallback |
//!       +--------------+              | or QuotaExceeded     |
//!              | allowed              +----------------------+
//!              v
//!       +---------------+  failure    +----------------------+
//!       | upstream call | ----------> | stale cache fallback |
//!       +---------------+             | or UpstreamError     |
//!              | success              +----------------------+
//!              v
//!       +-------------+
//!       | cache store |
//!       +-------------+
//! ```
//!
//! # Core Types
//!
//! - [`MarketDataClient`] - The client; construct once per process
//! - [`ClientConfig`] - Base URL, optional API key, request budget
//! - [`Query`] - One logical request; derives the cache key and TTL
//! - [`ClientError`] - Typed failures (quota, rate limit, transport, parse)
//! - [`FallbackEvent`] - Structured signal for each stale-cache serve
//! - [`QuotaStatus`] - Read-only view of the request budget
//!
//! Cache hits consume no budget; cache entries expire per query class
//! (60 s for listings up to 30 min for search results) but are retained
//! past expiry so they can serve as a degraded fallback. The client
//! performs no automatic retries.

pub mod budget;
pub mod client;
pub mod errors;
pub mod events;
pub mod models;
pub mod query;
pub mod transport;

mod cache;

// Re-export the client surface
pub use budget::{QuotaStatus, MAX_REQUESTS_PER_WINDOW, WINDOW};
pub use client::{ClientConfig, MarketDataClient, DEFAULT_BASE_URL};
pub use errors::ClientError;
pub use events::{FallbackEvent, FallbackReason};
pub use query::{Query, SortOrder};
pub use transport::{HttpTransport, Transport};

// Re-export all public types from models
pub use models::{
    ChartPoint, CoinDetail, CoinMarket, GlobalStats, MarketChart, SearchCoin, SearchResponse,
    TrendingCoin, TrendingResponse,
};

//! Read-through market data client with caching, a request budget, and
//! stale-cache fallback.
//!
//! Every fetch follows the same path: serve a fresh cache entry if one
//! exists, otherwise check the 24-hour request budget, record the
//! attempt, and call upstream. When the budget is exhausted or the live
//! call fails, an expired cache entry for the same endpoint is served
//! instead and a [`FallbackEvent`] is recorded; an error surfaces only
//! when both the live path and the stale fallback are unavailable.
//!
//! The cache and request log live behind one mutex so the check-then-act
//! sequence (cache check, budget check, request recording) is atomic.
//! The lock is never held across the upstream await.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::budget::{QuotaStatus, RequestBudget, MAX_REQUESTS_PER_WINDOW, WINDOW};
use crate::cache::ResponseCache;
use crate::errors::ClientError;
use crate::events::{FallbackEvent, FallbackReason};
use crate::models::{
    CoinDetail, CoinMarket, GlobalStats, GlobalStatsResponse, MarketChart, SearchResponse,
    TrendingResponse,
};
use crate::query::{Query, SortOrder};
use crate::transport::{HttpTransport, Transport};

/// Base address of the market data provider.
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Client configuration, read once at construction.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base address upstream endpoints are appended to.
    pub base_url: String,

    /// Optional demo API key; requests proceed unauthenticated without
    /// it, subject to the same request budget.
    pub api_key: Option<String>,

    /// Upstream calls allowed per trailing window.
    pub max_requests: u32,

    /// Length of the trailing window.
    pub window: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            max_requests: MAX_REQUESTS_PER_WINDOW,
            window: WINDOW,
        }
    }
}

impl ClientConfig {
    /// Default configuration with the optional `COINGECKO_API_KEY`
    /// credential read from the environment.
    pub fn from_env() -> Self {
        let api_key = std::env::var("COINGECKO_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        Self {
            api_key,
            ..Self::default()
        }
    }
}

/// Mutable client state guarded by one mutex.
struct ClientState {
    cache: ResponseCache,
    budget: RequestBudget,
    events: Vec<FallbackEvent>,
}

impl ClientState {
    fn push_fallback(&mut self, endpoint: &str, reason: FallbackReason) {
        self.events.push(FallbackEvent {
            endpoint: endpoint.to_string(),
            reason,
            at: Utc::now(),
        });
    }
}

/// Market data client.
///
/// Construct once per process and share by reference (or `Arc`) with all
/// callers; cache and request log live only for the process lifetime and
/// start empty.
pub struct MarketDataClient {
    transport: Arc<dyn Transport>,
    state: Mutex<ClientState>,
    config: ClientConfig,
}

impl MarketDataClient {
    /// Create a client backed by the production HTTP transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()), config)
    }

    /// Create a client with a custom transport. Used by tests to
    /// substitute a scripted upstream.
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            transport,
            state: Mutex::new(ClientState {
                cache: ResponseCache::new(),
                budget: RequestBudget::new(config.max_requests, config.window),
                events: Vec::new(),
            }),
            config,
        }
    }

    /// Paged market listing ordered by the given sort.
    pub async fn coin_markets(
        &self,
        vs_currency: &str,
        order: SortOrder,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<CoinMarket>, ClientError> {
        self.request(&Query::CoinMarkets {
            vs_currency: vs_currency.to_string(),
            order,
            per_page,
            page,
            sparkline: false,
        })
        .await
    }

    /// Batch market listing for an explicit set of coin ids.
    pub async fn coins_by_ids(
        &self,
        ids: &[&str],
        vs_currency: &str,
    ) -> Result<Vec<CoinMarket>, ClientError> {
        self.request(&Query::CoinsByIds {
            ids: ids.iter().map(|id| id.to_string()).collect(),
            vs_currency: vs_currency.to_string(),
        })
        .await
    }

    /// Full detail for one coin.
    pub async fn coin_detail(&self, id: &str) -> Result<CoinDetail, ClientError> {
        self.request(&Query::CoinDetail { id: id.to_string() }).await
    }

    /// Aggregate statistics for the whole market.
    pub async fn global_stats(&self) -> Result<GlobalStats, ClientError> {
        let response: GlobalStatsResponse = self.request(&Query::GlobalStats).await?;
        Ok(response.data)
    }

    /// Currently trending coins.
    pub async fn trending(&self) -> Result<TrendingResponse, ClientError> {
        self.request(&Query::Trending).await
    }

    /// Historical price series for a coin over a lookback window.
    pub async fn market_chart(
        &self,
        id: &str,
        vs_currency: &str,
        days: &str,
        interval: Option<&str>,
    ) -> Result<MarketChart, ClientError> {
        self.request(&Query::MarketChart {
            id: id.to_string(),
            vs_currency: vs_currency.to_string(),
            days: days.to_string(),
            interval: interval.map(|i| i.to_string()),
        })
        .await
    }

    /// Free-text coin search.
    pub async fn search(&self, text: &str) -> Result<SearchResponse, ClientError> {
        self.request(&Query::Search {
            query: text.to_string(),
        })
        .await
    }

    /// Fetch a query's payload as raw JSON, going through the same
    /// cache, budget, and fallback path as the typed operations.
    pub async fn fetch(&self, query: &Query) -> Result<Value, ClientError> {
        self.request(query).await
    }

    /// Drop all cache entries. The request log is untouched.
    pub fn clear_cache(&self) {
        self.lock_state().cache.clear();
    }

    /// Snapshot of the request budget. Read-only; cache hits never
    /// consume budget.
    pub fn quota_status(&self) -> QuotaStatus {
        self.lock_state().budget.status()
    }

    /// Drain recorded degraded-path events, oldest first.
    pub fn drain_fallback_events(&self) -> Vec<FallbackEvent> {
        std::mem::take(&mut self.lock_state().events)
    }

    /// Lock the state mutex, recovering from poison if necessary.
    ///
    /// The worst case of recovering is a slightly stale cache read or an
    /// off-by-one budget count, which beats panicking every caller.
    fn lock_state(&self) -> MutexGuard<'_, ClientState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("client state mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Core fetch path shared by all operations.
    async fn request<T: DeserializeOwned>(&self, query: &Query) -> Result<T, ClientError> {
        let endpoint = query.endpoint();

        {
            let mut state = self.lock_state();

            if let Some(payload) = state.cache.fresh(&endpoint) {
                debug!("cache hit for {}", endpoint);
                return decode(payload);
            }

            if !state.budget.check() {
                if let Some(payload) = state.cache.any(&endpoint).cloned() {
                    warn!(
                        "request budget exhausted, serving stale cache for {}",
                        endpoint
                    );
                    state.push_fallback(&endpoint, FallbackReason::QuotaExhausted);
                    return decode(&payload);
                }
                return Err(ClientError::QuotaExceeded);
            }

            // Recorded before the suspending call so a concurrent fetch
            // sees the slot as taken.
            state.budget.record();
        }

        let url = format!("{}{}", self.config.base_url, endpoint);
        let outcome = self.call_upstream(&url).await;

        let mut state = self.lock_state();
        match outcome {
            Ok(value) => match serde_json::from_value::<T>(value.clone()) {
                Ok(parsed) => {
                    state.cache.insert(endpoint, value, query.ttl());
                    Ok(parsed)
                }
                Err(e) => {
                    // Unparseable payloads are never cached.
                    let err = ClientError::Parse {
                        message: e.to_string(),
                    };
                    serve_stale_or(&mut state, &endpoint, err)
                }
            },
            Err(err) => serve_stale_or(&mut state, &endpoint, err),
        }
    }

    async fn call_upstream(&self, url: &str) -> Result<Value, ClientError> {
        let body = self
            .transport
            .get(url, self.config.api_key.as_deref())
            .await?;

        serde_json::from_str(&body).map_err(|e| ClientError::Parse {
            message: format!("invalid JSON from upstream: {}", e),
        })
    }
}

/// Serve the (possibly expired) cache entry for the endpoint, or surface
/// the upstream error when none exists.
fn serve_stale_or<T: DeserializeOwned>(
    state: &mut ClientState,
    endpoint: &str,
    err: ClientError,
) -> Result<T, ClientError> {
    match state.cache.any(endpoint).cloned() {
        Some(payload) => {
            warn!(
                "upstream fetch for {} failed ({}), serving stale cache",
                endpoint, err
            );
            let reason = match err {
                ClientError::RateLimited => FallbackReason::UpstreamRateLimited,
                _ => FallbackReason::UpstreamFailed,
            };
            state.push_fallback(endpoint, reason);
            decode(&payload)
        }
        None => Err(err),
    }
}

fn decode<T: DeserializeOwned>(payload: &Value) -> Result<T, ClientError> {
    serde_json::from_value(payload.clone()).map_err(|e| ClientError::Parse {
        message: e.to_string(),
    })
}

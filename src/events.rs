//! Structured signals for degraded-path serves.
//!
//! Whenever the client answers a fetch from an expired cache entry
//! instead of the live path, it records a [`FallbackEvent`] in addition
//! to a log warning, so callers and tests can observe degraded behavior
//! without parsing log text.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Why a stale cache entry was served instead of live data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FallbackReason {
    /// The local 24-hour request budget was exhausted.
    QuotaExhausted,

    /// The provider answered HTTP 429.
    UpstreamRateLimited,

    /// Transport, status, or decode failure on the live path.
    UpstreamFailed,
}

/// Record of a single stale-cache serve.
#[derive(Clone, Debug, Serialize)]
pub struct FallbackEvent {
    /// Endpoint (cache key) the stale payload was served for.
    pub endpoint: String,

    /// What made the live path unavailable.
    pub reason: FallbackReason,

    /// When the stale payload was served.
    pub at: DateTime<Utc>,
}

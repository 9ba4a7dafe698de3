//! Error types for the market data client.
//!
//! This module provides [`ClientError`], the error enum for all client
//! operations. Upstream failures (rate limiting, transport, bad status,
//! decode) are distinguished from local quota exhaustion because only
//! upstream failures are eligible for the stale-cache fallback.

use thiserror::Error;

/// Errors that can occur while fetching market data.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The local 24-hour request budget is exhausted and no cached
    /// payload (fresh or stale) exists for the requested endpoint.
    /// This is a fail-fast error; the client never waits for quota.
    #[error("request quota exceeded and no cached data available")]
    QuotaExceeded,

    /// The provider rejected the request with HTTP 429.
    #[error("rate limited by upstream provider")]
    RateLimited,

    /// The request could not be sent or the response body could not
    /// be read.
    #[error("transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
    },

    /// The provider answered with a non-success status other than 429.
    #[error("upstream returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode upstream response: {message}")]
    Parse {
        /// Description of the decode failure
        message: String,
    },
}

impl ClientError {
    /// Whether this error originated upstream rather than from the local
    /// request budget. Upstream errors are the class the stale-cache
    /// fallback applies to.
    pub fn is_upstream(&self) -> bool {
        !matches!(self, Self::QuotaExceeded)
    }
}

//! HTTP transport seam for the market data provider.
//!
//! The [`Transport`] trait isolates the client's fetch logic from the
//! network so tests can substitute a scripted transport. The production
//! implementation is a thin reqwest wrapper that maps provider status
//! codes onto [`ClientError`] variants.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::ClientError;

/// Header the provider expects the demo API key in.
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Per-request timeout applied by the transport; the client itself
/// propagates no deadline.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One-shot GET transport against the provider.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET against the fully-qualified URL and return the
    /// response body.
    ///
    /// The optional API key is attached as a request header when present;
    /// its absence is not an error. HTTP 429 maps to
    /// [`ClientError::RateLimited`], other non-success statuses to
    /// [`ClientError::Status`].
    async fn get(&self, url: &str, api_key: Option<&str>) -> Result<String, ClientError>;
}

/// reqwest-backed production transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, api_key: Option<&str>) -> Result<String, ClientError> {
        let mut request = self.client.get(url).header("Accept", "application/json");

        if let Some(key) = api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        debug!("GET {}", url);

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Transport {
                    message: format!("request timed out: {}", e),
                }
            } else {
                ClientError::Transport {
                    message: format!("request failed: {}", e),
                }
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ClientError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::Transport {
                message: format!("failed to read response: {}", e),
            })
    }
}

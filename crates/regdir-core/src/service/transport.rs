//! HTTP transport for registry indexes and component payloads

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::branding;
use crate::error::{FetchError, FetchResult};

/// Fetches a URL and decodes its body as JSON.
///
/// Only HTTP 200 counts as success; every other status is a
/// [`FetchError::Status`]. Each call carries its own timeout.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn get_json(&self, url: &str, timeout: Duration) -> FetchResult<Value>;
}

/// reqwest-backed transport used in production
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default HTTP client
    pub fn new() -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(branding::USER_AGENT)
            .build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn get_json(&self, url: &str, timeout: Duration) -> FetchResult<Value> {
        debug!(url = %url, timeout_ms = timeout.as_millis() as u64, "GET");

        let response = self
            .http_client
            .get(url)
            .header("Accept", "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Read the body first so a timeout mid-body is reported as such
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

//! Component detail fetcher
//!
//! Direct, uncached GET of a single component payload. Unlike index
//! resolution, failures are returned to the caller.

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::{JsonTransport, DEFAULT_PROBE_TIMEOUT};
use crate::error::FetchResult;

pub struct ComponentDetailsFetcher {
    transport: Arc<dyn JsonTransport>,
    timeout: Duration,
}

impl ComponentDetailsFetcher {
    pub fn new(transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            transport,
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the JSON payload at `component_url`, verbatim
    pub async fn fetch(&self, component_url: &str) -> FetchResult<Value> {
        info!(url = %component_url, "Fetching component details");
        self.transport.get_json(component_url, self.timeout).await
    }
}

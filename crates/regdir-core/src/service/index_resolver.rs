//! Registry index discovery
//!
//! Registries are heterogeneous static sites with no common discovery
//! protocol. The resolver probes a fixed, ordered list of conventional index
//! paths and takes the first one that serves a usable JSON array.
//!
//! Positive results are memoized per normalized base URL for the lifetime of
//! the [`IndexCache`]; negative results are never cached, so a later call
//! re-probes.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::JsonTransport;
use crate::domain::{normalize_base_url, IndexItem};

/// Candidate index paths, tried in this order
pub const INDEX_PATHS: [&str; 5] = [
    "/registry/index.json",
    "/index.json",
    "/registry.json",
    "/api/components",
    "/r/index.json",
];

/// Per-request bound for each candidate probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(3000);

/// A successfully discovered index
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredIndex {
    /// Candidate URL that served the index
    pub index_url: String,
    /// Never empty
    pub items: Vec<IndexItem>,
}

/// Resolved indexes keyed by normalized base URL.
///
/// Entries are never evicted. Two probes racing on the same uncached key both
/// insert; the last writer wins.
#[derive(Debug, Default)]
pub struct IndexCache {
    entries: RwLock<HashMap<String, Arc<Vec<IndexItem>>>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, base_url: &str) -> Option<Arc<Vec<IndexItem>>> {
        self.entries.read().await.get(base_url).cloned()
    }

    pub async fn insert(&self, base_url: String, items: Arc<Vec<IndexItem>>) {
        self.entries.write().await.insert(base_url, items);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

pub struct IndexResolver {
    transport: Arc<dyn JsonTransport>,
    cache: Arc<IndexCache>,
    timeout: Duration,
}

impl IndexResolver {
    /// Create a resolver with a fresh cache and the default probe timeout
    pub fn new(transport: Arc<dyn JsonTransport>) -> Self {
        Self {
            transport,
            cache: Arc::new(IndexCache::new()),
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Share an existing cache
    pub fn with_cache(mut self, cache: Arc<IndexCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn cache(&self) -> &Arc<IndexCache> {
        &self.cache
    }

    /// Component index for `registry_url`, or an empty list if none is discoverable.
    ///
    /// Never fails. A cache hit returns the shared cached list without any
    /// network access.
    pub async fn resolve(&self, registry_url: &str) -> Arc<Vec<IndexItem>> {
        let base_url = normalize_base_url(registry_url);

        if let Some(items) = self.cache.get(base_url).await {
            debug!(base_url = %base_url, count = items.len(), "Index cache hit");
            return items;
        }

        match self.discover(base_url).await {
            Some(found) => {
                let items = Arc::new(found.items);
                self.cache
                    .insert(base_url.to_string(), Arc::clone(&items))
                    .await;
                items
            }
            None => Arc::new(Vec::new()),
        }
    }

    /// Probe every candidate path in order, bypassing the cache.
    ///
    /// Returns the first candidate whose body is a JSON array with at least one
    /// entry carrying a non-empty string `name`.
    pub async fn discover(&self, registry_url: &str) -> Option<DiscoveredIndex> {
        let base_url = normalize_base_url(registry_url);

        for path in INDEX_PATHS {
            let index_url = format!("{}{}", base_url, path);
            if let Some(items) = self.try_candidate(&index_url).await {
                info!(
                    index_url = %index_url,
                    count = items.len(),
                    "Discovered registry index"
                );
                return Some(DiscoveredIndex { index_url, items });
            }
        }

        debug!(base_url = %base_url, "No registry index found");
        None
    }

    /// One candidate probe; every failure is reported as `None`
    async fn try_candidate(&self, index_url: &str) -> Option<Vec<IndexItem>> {
        let body = match self.transport.get_json(index_url, self.timeout).await {
            Ok(body) => body,
            Err(e) => {
                debug!(index_url = %index_url, error = %e, "Index candidate failed");
                return None;
            }
        };

        let Value::Array(entries) = body else {
            debug!(index_url = %index_url, "Index candidate is not a JSON array");
            return None;
        };

        let items: Vec<IndexItem> = entries.iter().filter_map(IndexItem::from_value).collect();
        if items.is_empty() {
            debug!(
                index_url = %index_url,
                entries = entries.len(),
                "Index candidate has no named entries"
            );
            return None;
        }

        Some(items)
    }
}

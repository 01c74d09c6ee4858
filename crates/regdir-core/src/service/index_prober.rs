//! Catalog-wide index probing
//!
//! Sweeps every catalog registry for a discoverable index and reports which
//! candidate URL served it. Used offline to refresh the catalog's
//! `has_public_index` flags and to seed the component snapshot.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{info, warn};

use super::IndexResolver;
use crate::catalog::CatalogStore;
use crate::domain::IndexItem;

/// Probe outcome for one registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub name: String,
    pub url: String,
    /// Candidate URL that served the index, `null` when none did
    pub index_url: Option<String>,
    pub components: Vec<IndexItem>,
}

impl ProbeReport {
    pub fn found(&self) -> bool {
        self.index_url.is_some()
    }
}

pub struct IndexProber {
    resolver: Arc<IndexResolver>,
}

impl IndexProber {
    pub fn new(resolver: Arc<IndexResolver>) -> Self {
        Self { resolver }
    }

    /// Probe every registry concurrently, bypassing the index cache.
    ///
    /// Reports come back in catalog order. A registry whose probe task fails
    /// is reported as not found.
    pub async fn probe_all(&self, catalog: &CatalogStore) -> Vec<ProbeReport> {
        let mut tasks = JoinSet::new();

        for (position, registry) in catalog.records().iter().enumerate() {
            let resolver = Arc::clone(&self.resolver);
            let url = registry.url.clone();
            tasks.spawn(async move { (position, resolver.discover(&url).await) });
        }

        let mut discovered = vec![None; catalog.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((position, found)) => discovered[position] = found,
                Err(e) => warn!(error = %e, "Probe task failed"),
            }
        }

        let reports: Vec<ProbeReport> = catalog
            .records()
            .iter()
            .zip(discovered)
            .map(|(registry, found)| {
                let (index_url, components) = match found {
                    Some(index) => (Some(index.index_url), index.items),
                    None => (None, Vec::new()),
                };
                ProbeReport {
                    name: registry.name.clone(),
                    url: registry.url.clone(),
                    index_url,
                    components,
                }
            })
            .collect();

        info!(
            registries = reports.len(),
            found = reports.iter().filter(|r| r.found()).count(),
            "Probe complete"
        );
        reports
    }
}

/// Write probe reports as a pretty-printed JSON array
pub async fn write_probe_reports(reports: &[ProbeReport], path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    tokio::fs::write(path, json).await?;
    info!(path = %path.display(), "Wrote probe report");
    Ok(())
}

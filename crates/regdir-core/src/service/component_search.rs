//! Component search across the snapshot and every registry's live index
//!
//! Phase 1 scans the bundled snapshot. Phase 2 resolves the index of every
//! catalog registry that produced no Phase-1 match, one task per registry.
//! A slow or broken registry only costs its own probe timeout and never
//! affects the others.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::IndexResolver;
use crate::catalog::{CatalogStore, ComponentSnapshot};
use crate::domain::{ComponentMatch, IndexItem, RegistryRecord};

pub struct ComponentSearchService {
    catalog: Arc<CatalogStore>,
    snapshot: Arc<ComponentSnapshot>,
    resolver: Arc<IndexResolver>,
}

impl ComponentSearchService {
    pub fn new(
        catalog: Arc<CatalogStore>,
        snapshot: Arc<ComponentSnapshot>,
        resolver: Arc<IndexResolver>,
    ) -> Self {
        Self {
            catalog,
            snapshot,
            resolver,
        }
    }

    pub fn resolver(&self) -> &Arc<IndexResolver> {
        &self.resolver
    }

    /// Case-insensitive substring search.
    ///
    /// Snapshot matches come first. A registry represented in the snapshot
    /// matches is not probed remotely.
    pub async fn search(&self, query: &str) -> Vec<ComponentMatch> {
        let query_lower = query.to_lowercase();

        let mut results = self.search_snapshot(&query_lower);
        let matched: HashSet<String> = results.iter().map(|m| m.registry_name.clone()).collect();

        let remote = self.search_remote(&query_lower, &matched).await;

        info!(
            query = %query,
            snapshot = results.len(),
            remote = remote.len(),
            "Component search complete"
        );

        results.extend(remote);
        results
    }

    fn search_snapshot(&self, query_lower: &str) -> Vec<ComponentMatch> {
        let mut seen = HashSet::new();

        self.snapshot
            .components()
            .iter()
            .filter(|c| c.matches(query_lower))
            .filter_map(|c| {
                let Some(registry) = self.catalog.get(&c.registry) else {
                    debug!(
                        registry = %c.registry,
                        component = %c.name,
                        "Snapshot component belongs to unknown registry"
                    );
                    return None;
                };
                Some(ComponentMatch {
                    registry_name: registry.name.clone(),
                    component_name: c.name.clone(),
                    description: c.description.clone().unwrap_or_default(),
                    url: registry.component_url(&c.name),
                })
            })
            .filter(|m| seen.insert((m.registry_name.clone(), m.component_name.clone())))
            .collect()
    }

    /// One spawned task per registry. Dropping the returned future detaches
    /// the tasks instead of aborting them, so in-flight index lookups still
    /// complete and fill the index cache.
    async fn search_remote(
        &self,
        query_lower: &str,
        skip: &HashSet<String>,
    ) -> Vec<ComponentMatch> {
        let handles: Vec<(usize, JoinHandle<Vec<ComponentMatch>>)> = self
            .catalog
            .records()
            .iter()
            .enumerate()
            .filter(|(_, registry)| !skip.contains(&registry.name))
            .map(|(position, registry)| {
                let resolver = Arc::clone(&self.resolver);
                let registry = registry.clone();
                let query_lower = query_lower.to_string();

                let handle = tokio::spawn(async move {
                    let items = resolver.resolve(&registry.url).await;
                    match_index(&registry, &items, &query_lower)
                });
                (position, handle)
            })
            .collect();

        // Awaited in catalog order, so results come out grouped per registry
        let mut results = Vec::new();
        for (position, handle) in handles {
            match handle.await {
                Ok(matches) => results.extend(matches),
                Err(e) => warn!(position, error = %e, "Registry search task failed"),
            }
        }
        results
    }
}

/// Matching items of one registry's index, duplicates collapsed
fn match_index(
    registry: &RegistryRecord,
    items: &[IndexItem],
    query_lower: &str,
) -> Vec<ComponentMatch> {
    let mut seen = HashSet::new();

    items
        .iter()
        .filter(|item| item.matches(query_lower))
        .filter(|item| seen.insert(item.name.as_str()))
        .map(|item| ComponentMatch {
            registry_name: registry.name.clone(),
            component_name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            url: registry.component_url(&item.name),
        })
        .collect()
}

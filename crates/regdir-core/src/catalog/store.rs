//! Registry catalog store
//!
//! Loaded from a JSON file when one is configured, otherwise from the catalog
//! compiled into the binary. Read-only for the rest of the process lifetime.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use super::SortKey;
use crate::domain::RegistryRecord;
use crate::error::CatalogError;

const BUNDLED_CATALOG: &str = include_str!("../../data/registries.json");

/// Distinct categories and tags across the catalog, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<RegistryRecord>,
}

impl CatalogStore {
    pub fn from_records(records: Vec<RegistryRecord>) -> Self {
        Self { records }
    }

    /// Parse a catalog from JSON text. `origin` names the source in errors.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, CatalogError> {
        let records: Vec<RegistryRecord> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self::from_records(records))
    }

    /// The catalog shipped with the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG, "bundled catalog")
    }

    /// Load a catalog file
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let store = Self::from_json_str(&content, &path.display().to_string())?;
        info!(
            path = %path.display(),
            count = store.len(),
            "Loaded registry catalog"
        );
        Ok(store)
    }

    /// Load `path` if given, otherwise the bundled catalog
    pub async fn load_or_bundled(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path).await,
            None => {
                let store = Self::bundled()?;
                info!(count = store.len(), "Using bundled registry catalog");
                Ok(store)
            }
        }
    }

    pub fn records(&self) -> &[RegistryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a registry by its (unique) name
    pub fn get(&self, name: &str) -> Option<&RegistryRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Case-insensitive substring search over name, description, tags and category
    pub fn search(&self, query: &str) -> Vec<RegistryRecord> {
        let query_lower = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.matches(&query_lower))
            .cloned()
            .collect()
    }

    /// Registries whose category equals `category` exactly
    pub fn filter_by_category(&self, category: &str) -> Vec<RegistryRecord> {
        self.records
            .iter()
            .filter(|r| r.category.as_deref() == Some(category))
            .cloned()
            .collect()
    }

    /// A copy of the catalog sorted descending by `key`
    pub fn sorted(&self, key: SortKey) -> Vec<RegistryRecord> {
        let mut records = self.records.clone();
        key.sort(&mut records);
        records
    }

    pub fn categories(&self) -> CategorySummary {
        let mut seen = HashSet::new();
        let categories = self
            .records
            .iter()
            .filter_map(|r| r.category.as_ref())
            .filter(|c| !c.is_empty() && seen.insert(c.as_str()))
            .cloned()
            .collect();

        let mut seen = HashSet::new();
        let tags = self
            .records
            .iter()
            .flat_map(|r| r.tags.iter())
            .filter(|t| seen.insert(t.as_str()))
            .cloned()
            .collect();

        CategorySummary { categories, tags }
    }
}

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::domain::SnapshotComponent;
use crate::error::CatalogError;

/// One top-level snapshot entry. Scraper output groups components under
/// their registry; hand-written snapshots list them flat.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotEntry {
    Grouped {
        #[serde(alias = "registryName")]
        registry: String,
        components: Vec<GroupedComponent>,
    },
    Flat(SnapshotComponent),
}

#[derive(Deserialize)]
struct GroupedComponent {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl SnapshotEntry {
    fn flatten_into(self, out: &mut Vec<SnapshotComponent>) {
        match self {
            SnapshotEntry::Flat(component) => out.push(component),
            SnapshotEntry::Grouped {
                registry,
                components,
            } => out.extend(components.into_iter().map(|c| SnapshotComponent {
                registry: registry.clone(),
                name: c.name,
                description: c.description.filter(|d| !d.is_empty()),
                tags: c.tags,
            })),
        }
    }
}

/// Pre-scraped components shipped alongside the catalog
#[derive(Debug, Clone, Default)]
pub struct ComponentSnapshot {
    components: Vec<SnapshotComponent>,
}

impl ComponentSnapshot {
    pub fn new(components: Vec<SnapshotComponent>) -> Self {
        Self { components }
    }

    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let entries: Vec<SnapshotEntry> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                origin: path.display().to_string(),
                source,
            })?;
        let mut components = Vec::with_capacity(entries.len());
        for entry in entries {
            entry.flatten_into(&mut components);
        }

        info!(
            path = %path.display(),
            count = components.len(),
            "Loaded component snapshot"
        );
        Ok(Self::new(components))
    }

    pub fn components(&self) -> &[SnapshotComponent] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

//! Service Container - holds all initialized services
//!
//! Services are created once at start-up and shared by every request.

use std::sync::Arc;

use anyhow::Context as _;
use tracing::info;

use regdir_core::{
    CatalogStore, ComponentDetailsFetcher, ComponentSearchService, ComponentSnapshot,
    IndexResolver, JsonTransport, ReqwestTransport,
};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct ServiceContainer {
    pub catalog: Arc<CatalogStore>,

    /// `None` when the deployment ships no snapshot
    pub snapshot: Option<Arc<ComponentSnapshot>>,

    /// Index resolver (owns the process-lifetime index cache)
    pub resolver: Arc<IndexResolver>,

    pub search: Arc<ComponentSearchService>,

    pub details: Arc<ComponentDetailsFetcher>,
}

impl ServiceContainer {
    /// Load the catalog and snapshot named by `config` and wire the
    /// production HTTP transport
    pub async fn initialize(config: &ServerConfig) -> anyhow::Result<Self> {
        let catalog = CatalogStore::load_or_bundled(config.catalog_path.as_deref())
            .await
            .context("Failed to load registry catalog")?;

        let snapshot = match config.snapshot_path.as_deref() {
            Some(path) => Some(
                ComponentSnapshot::load(path)
                    .await
                    .context("Failed to load component snapshot")?,
            ),
            None => None,
        };

        let transport: Arc<dyn JsonTransport> =
            Arc::new(ReqwestTransport::new().context("Failed to build HTTP client")?);

        Ok(Self::with_transport(catalog, snapshot, transport, config))
    }

    /// Wire services over an already-loaded catalog and a given transport
    pub fn with_transport(
        catalog: CatalogStore,
        snapshot: Option<ComponentSnapshot>,
        transport: Arc<dyn JsonTransport>,
        config: &ServerConfig,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let snapshot = snapshot.map(Arc::new);

        let resolver = Arc::new(
            IndexResolver::new(Arc::clone(&transport)).with_timeout(config.probe_timeout),
        );

        let search = Arc::new(ComponentSearchService::new(
            Arc::clone(&catalog),
            snapshot.clone().unwrap_or_default(),
            Arc::clone(&resolver),
        ));

        let details = Arc::new(
            ComponentDetailsFetcher::new(transport).with_timeout(config.details_timeout),
        );

        info!(
            registries = catalog.len(),
            snapshot = snapshot.as_ref().map(|s| s.len()).unwrap_or(0),
            "Services initialized"
        );

        Self {
            catalog,
            snapshot,
            resolver,
            search,
            details,
        }
    }
}

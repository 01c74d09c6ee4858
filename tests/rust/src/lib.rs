//! Shared test utilities and fixtures for Registry Directory integration tests.

pub use regdir_core::{
    CatalogStore, ComponentMatch, ComponentSnapshot, IndexItem, RegistryRecord, SnapshotComponent,
};

pub use mocks::{MockResponse, MockTransport};

/// Catalog and service fixtures
pub mod fixtures {
    use serde_json::{json, Value};
    use std::sync::Arc;

    use regdir_core::{
        CatalogStore, ComponentSnapshot, JsonTransport, RegistryRecord, SnapshotComponent,
    };
    use regdir_mcp::{ServerConfig, ServiceContainer, ToolDispatcher};

    pub const SHADCN_URL: &str = "https://ui.shadcn.com";
    pub const MAGIC_URL: &str = "https://magicui.design";
    pub const ACETERNITY_URL: &str = "https://ui.aceternity.com";
    pub const TREMOR_URL: &str = "https://tremor.so";

    /// Four registries in a fixed catalog order
    pub fn test_catalog() -> CatalogStore {
        CatalogStore::from_records(vec![
            RegistryRecord::new("shadcn/ui", SHADCN_URL)
                .with_description("Beautifully designed components")
                .with_category("base")
                .with_tags(["radix", "tailwind"]),
            RegistryRecord::new("Magic UI", MAGIC_URL)
                .with_description("Animated components for landing pages")
                .with_category("animation")
                .with_tags(["animation", "framer-motion"]),
            RegistryRecord::new("Aceternity UI", ACETERNITY_URL)
                .with_description("Trendy effects")
                .with_category("animation")
                .with_tags(["animation", "effects"]),
            RegistryRecord::new("Tremor", TREMOR_URL)
                .with_description("Dashboard charts")
                .with_category("charts")
                .with_tags(["charts", "dashboard"]),
        ])
    }

    pub fn test_snapshot() -> ComponentSnapshot {
        ComponentSnapshot::new(vec![
            SnapshotComponent::new("Magic UI", "marquee").with_description("Infinite scrolling"),
            SnapshotComponent::new("Magic UI", "animated-beam").with_tags(["animation"]),
        ])
    }

    /// An index body with one named entry per component
    pub fn index_body(names: &[&str]) -> Value {
        Value::Array(
            names
                .iter()
                .map(|name| json!({"name": name, "type": "registry:ui"}))
                .collect(),
        )
    }

    pub fn services(
        catalog: CatalogStore,
        snapshot: Option<ComponentSnapshot>,
        transport: Arc<dyn JsonTransport>,
    ) -> Arc<ServiceContainer> {
        Arc::new(ServiceContainer::with_transport(
            catalog,
            snapshot,
            transport,
            &ServerConfig::default(),
        ))
    }

    pub fn dispatcher(
        catalog: CatalogStore,
        snapshot: Option<ComponentSnapshot>,
        transport: Arc<dyn JsonTransport>,
    ) -> ToolDispatcher {
        ToolDispatcher::new(services(catalog, snapshot, transport))
    }
}

/// Install a test subscriber once; honours RUST_LOG
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

use regdir_core::branding;

/// A readable data resource as advertised by `resources/list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

pub(super) const REGISTRY_LIST: ResourceSpec = ResourceSpec {
    uri: branding::REGISTRY_LIST_URI,
    name: "Full Registry List",
    description: "Complete list of component registries with metadata, tags, and categories.",
    mime_type: "application/json",
};

pub(super) const COMPONENT_SNAPSHOT: ResourceSpec = ResourceSpec {
    uri: branding::SNAPSHOT_URI,
    name: "Component Snapshot",
    description: "Pre-scraped components across registries, searched before live indexes.",
    mime_type: "application/json",
};

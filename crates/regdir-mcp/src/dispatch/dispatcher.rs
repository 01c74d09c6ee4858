//! Tool Dispatcher
//!
//! Routes validated tool calls to the catalog and discovery services and
//! renders every result as pretty-printed JSON text.

use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

use regdir_core::{branding, rank_recommendations};

use super::resources::{COMPONENT_SNAPSHOT, REGISTRY_LIST};
use super::{DispatchError, ResourceSpec, ToolCall, ToolName, ToolSpec};
use crate::services::ServiceContainer;

/// Text returned by `get_registry_index` when no index is discoverable
pub const NO_INDEX_FOUND: &str = "No index found.";

/// Text payload of a tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    /// Set when the tool ran but its operation failed (e.g., a bad component URL)
    pub is_error: bool,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, DispatchError> {
        Ok(Self::text(serde_json::to_string_pretty(value)?))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            is_error: true,
        }
    }
}

#[derive(Clone)]
pub struct ToolDispatcher {
    services: Arc<ServiceContainer>,
}

impl ToolDispatcher {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        Self { services }
    }

    pub fn list_tools(&self) -> Vec<ToolSpec> {
        ToolName::ALL.iter().map(ToolName::spec).collect()
    }

    /// The snapshot resource is only listed when a snapshot is loaded
    pub fn list_resources(&self) -> Vec<ResourceSpec> {
        let mut resources = vec![REGISTRY_LIST];
        if self.services.snapshot.is_some() {
            resources.push(COMPONENT_SNAPSHOT);
        }
        resources
    }

    /// Full JSON payload of a resource
    pub fn read_resource(&self, uri: &str) -> Result<(ResourceSpec, String), DispatchError> {
        if uri == branding::REGISTRY_LIST_URI {
            let text = serde_json::to_string_pretty(self.services.catalog.records())?;
            return Ok((REGISTRY_LIST, text));
        }

        if uri == branding::SNAPSHOT_URI {
            if let Some(snapshot) = &self.services.snapshot {
                let text = serde_json::to_string_pretty(snapshot.components())?;
                return Ok((COMPONENT_SNAPSHOT, text));
            }
        }

        Err(DispatchError::ResourceNotFound(uri.to_string()))
    }

    /// Validate and run a tool by name
    pub async fn call(
        &self,
        name: &str,
        args: Option<&Map<String, Value>>,
    ) -> Result<ToolOutput, DispatchError> {
        let call = ToolCall::parse(name, args)?;
        self.execute(call).await
    }

    pub async fn execute(&self, call: ToolCall) -> Result<ToolOutput, DispatchError> {
        let services = &self.services;
        debug!(tool = call.tool().as_str(), "Executing tool call");

        match call {
            ToolCall::SearchRegistries { query } => {
                let results = services.catalog.search(&query);
                debug!(query = %query, count = results.len(), "search_registries");
                ToolOutput::json(&results)
            }
            ToolCall::SearchComponents { query } => {
                let results = services.search.search(&query).await;
                ToolOutput::json(&results)
            }
            ToolCall::GetRegistryIndex { registry_url } => {
                let items = services.resolver.resolve(&registry_url).await;
                if items.is_empty() {
                    Ok(ToolOutput::text(NO_INDEX_FOUND))
                } else {
                    ToolOutput::json(items.as_slice())
                }
            }
            ToolCall::FilterByCategory { category } => {
                ToolOutput::json(&services.catalog.filter_by_category(&category))
            }
            ToolCall::SortRegistries { sort_by } => {
                ToolOutput::json(&services.catalog.sorted(sort_by))
            }
            ToolCall::GetComponentDetails { component_url } => {
                match services.details.fetch(&component_url).await {
                    Ok(payload) => ToolOutput::json(&payload),
                    Err(e) => Ok(ToolOutput::error(format!("Error: {}", e))),
                }
            }
            ToolCall::GetCategories => ToolOutput::json(&services.catalog.categories()),
            ToolCall::RecommendBestComponents { requirement } => {
                let results = services.search.search(&requirement).await;
                ToolOutput::json(&rank_recommendations(&requirement, results))
            }
        }
    }
}

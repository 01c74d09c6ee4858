//! Declared tools, their input schemas, and argument validation

use serde_json::{json, Map, Value};
use std::str::FromStr;

use regdir_core::SortKey;

use super::DispatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    SearchRegistries,
    SearchComponents,
    GetRegistryIndex,
    FilterByCategory,
    SortRegistries,
    GetComponentDetails,
    GetCategories,
    RecommendBestComponents,
}

impl ToolName {
    /// Listing order for `tools/list`
    pub const ALL: [ToolName; 8] = [
        ToolName::SearchRegistries,
        ToolName::SearchComponents,
        ToolName::GetRegistryIndex,
        ToolName::FilterByCategory,
        ToolName::SortRegistries,
        ToolName::GetCategories,
        ToolName::RecommendBestComponents,
        ToolName::GetComponentDetails,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::SearchRegistries => "search_registries",
            ToolName::SearchComponents => "search_components",
            ToolName::GetRegistryIndex => "get_registry_index",
            ToolName::FilterByCategory => "filter_by_category",
            ToolName::SortRegistries => "sort_registries",
            ToolName::GetComponentDetails => "get_component_details",
            ToolName::GetCategories => "get_categories",
            ToolName::RecommendBestComponents => "recommend_best_components",
        }
    }

    pub fn spec(&self) -> ToolSpec {
        let (description, input_schema) = match self {
            ToolName::SearchRegistries => (
                "Search for registries by name, description, tags, or category.",
                string_arg_schema("query", "Search term (e.g., 'animation', 'blocks', 'magic')"),
            ),
            ToolName::SearchComponents => (
                "Deep search for components across all registries (Magic UI, Aceternity, etc.).",
                string_arg_schema(
                    "query",
                    "Component name or tag (e.g., 'marquee', 'text animation')",
                ),
            ),
            ToolName::GetRegistryIndex => (
                "Fetch the official component list from a registry URL.",
                string_arg_schema("registry_url", "Base URL of the registry"),
            ),
            ToolName::FilterByCategory => (
                "List registries in exactly the given category.",
                string_arg_schema("category", "Category name (e.g., 'animation', 'base')"),
            ),
            ToolName::SortRegistries => (
                "Sort all registries by popularity, recency, or component count (descending).",
                json!({
                    "type": "object",
                    "properties": {
                        "sort_by": {
                            "type": "string",
                            "enum": SortKey::ALL.iter().map(|k| k.as_str()).collect::<Vec<_>>(),
                            "description": "Field to sort by"
                        }
                    },
                    "required": ["sort_by"]
                }),
            ),
            ToolName::GetComponentDetails => (
                "Get full JSON/code for a component if the URL points to a .json file.",
                string_arg_schema("component_url", "URL to component .json"),
            ),
            ToolName::GetCategories => (
                "Get all available registry categories and tags.",
                json!({"type": "object", "properties": {}}),
            ),
            ToolName::RecommendBestComponents => (
                "Recommend the best components for a specific need.",
                string_arg_schema(
                    "requirement",
                    "Requirement (e.g., 'need an animated button for landing page')",
                ),
            ),
        };

        ToolSpec {
            name: *self,
            description,
            input_schema,
        }
    }
}

impl FromStr for ToolName {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| DispatchError::UnknownTool(s.to_string()))
    }
}

/// A declared tool as advertised by `tools/list`
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: ToolName,
    pub description: &'static str,
    /// JSON Schema object for the tool arguments
    pub input_schema: Value,
}

impl ToolSpec {
    /// The schema as a JSON object map
    pub fn schema_object(&self) -> Map<String, Value> {
        match &self.input_schema {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        }
    }
}

fn string_arg_schema(name: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            name: {
                "type": "string",
                "description": description
            }
        },
        "required": [name]
    })
}

/// A validated tool invocation
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    SearchRegistries { query: String },
    SearchComponents { query: String },
    GetRegistryIndex { registry_url: String },
    FilterByCategory { category: String },
    SortRegistries { sort_by: SortKey },
    GetComponentDetails { component_url: String },
    GetCategories,
    RecommendBestComponents { requirement: String },
}

impl ToolCall {
    /// Resolve the tool name and validate its arguments before any work is done
    pub fn parse(name: &str, args: Option<&Map<String, Value>>) -> Result<Self, DispatchError> {
        let tool: ToolName = name.parse()?;
        let empty = Map::new();
        let args = args.unwrap_or(&empty);

        let call = match tool {
            ToolName::SearchRegistries => ToolCall::SearchRegistries {
                query: required_string(args, "query")?,
            },
            ToolName::SearchComponents => ToolCall::SearchComponents {
                query: required_string(args, "query")?,
            },
            ToolName::GetRegistryIndex => ToolCall::GetRegistryIndex {
                registry_url: required_string(args, "registry_url")?,
            },
            ToolName::FilterByCategory => ToolCall::FilterByCategory {
                category: required_string(args, "category")?,
            },
            ToolName::SortRegistries => {
                let raw = required_string(args, "sort_by")?;
                let sort_by = raw
                    .parse::<SortKey>()
                    .map_err(|e| DispatchError::InvalidArgument {
                        name: "sort_by",
                        reason: e.to_string(),
                    })?;
                ToolCall::SortRegistries { sort_by }
            }
            ToolName::GetComponentDetails => ToolCall::GetComponentDetails {
                component_url: required_string(args, "component_url")?,
            },
            ToolName::GetCategories => ToolCall::GetCategories,
            ToolName::RecommendBestComponents => ToolCall::RecommendBestComponents {
                requirement: required_string(args, "requirement")?,
            },
        };

        Ok(call)
    }

    pub fn tool(&self) -> ToolName {
        match self {
            ToolCall::SearchRegistries { .. } => ToolName::SearchRegistries,
            ToolCall::SearchComponents { .. } => ToolName::SearchComponents,
            ToolCall::GetRegistryIndex { .. } => ToolName::GetRegistryIndex,
            ToolCall::FilterByCategory { .. } => ToolName::FilterByCategory,
            ToolCall::SortRegistries { .. } => ToolName::SortRegistries,
            ToolCall::GetComponentDetails { .. } => ToolName::GetComponentDetails,
            ToolCall::GetCategories => ToolName::GetCategories,
            ToolCall::RecommendBestComponents { .. } => ToolName::RecommendBestComponents,
        }
    }
}

fn required_string(args: &Map<String, Value>, name: &'static str) -> Result<String, DispatchError> {
    match args.get(name) {
        None | Some(Value::Null) => Err(DispatchError::MissingArgument(name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(DispatchError::InvalidArgument {
            name,
            reason: format!("expected a string, got {}", json_type(other)),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

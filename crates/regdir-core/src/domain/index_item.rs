use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One component descriptor from a registry's published index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexItem {
    /// Never empty
    pub name: String,

    /// Registry item type (e.g., "registry:ui", "registry:block")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl IndexItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            item_type: None,
            description: None,
            files: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Extract an item from an untrusted index entry.
    ///
    /// Returns `None` unless `name` is a non-empty string. Optional fields of
    /// the wrong shape are dropped instead of rejecting the entry. File entries
    /// may be plain paths or objects carrying a `path` (shadcn style).
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let name = obj.get("name")?.as_str().filter(|n| !n.is_empty())?;

        let as_string = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);

        let files = obj
            .get("files")
            .and_then(Value::as_array)
            .map(|files| {
                files
                    .iter()
                    .filter_map(|f| match f {
                        Value::String(path) => Some(path.clone()),
                        Value::Object(file) => {
                            file.get("path").and_then(Value::as_str).map(str::to_string)
                        }
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            name: name.to_string(),
            item_type: as_string("type"),
            description: as_string("description"),
            files,
        })
    }

    /// Case-insensitive substring match over name and description.
    ///
    /// `query_lower` must already be lowercased.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(query_lower))
    }
}

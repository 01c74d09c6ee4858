use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A third-party component registry listed in the catalog.
///
/// Identity is `name`; records are immutable once the catalog is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistryRecord {
    /// Display name, unique within the catalog (e.g., "shadcn/ui")
    pub name: String,

    pub description: String,

    /// Site root; index candidates are resolved relative to it
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,

    /// Popularity metric (GitHub stars of the backing repository)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,

    /// When the record's metrics were last scraped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<DateTime<Utc>>,

    /// Whether a machine-readable index was found at the last probe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_public_index: Option<bool>,
}

impl RegistryRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            url: url.into(),
            category: None,
            tags: Vec::new(),
            component_count: None,
            last_updated: None,
            stars: None,
            scraped_at: None,
            has_public_index: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_component_count(mut self, count: u64) -> Self {
        self.component_count = Some(count);
        self
    }

    pub fn with_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }

    pub fn with_stars(mut self, stars: u64) -> Self {
        self.stars = Some(stars);
        self
    }

    /// Site root with a single trailing slash removed
    pub fn base_url(&self) -> &str {
        normalize_base_url(&self.url)
    }

    /// Case-insensitive substring match over name, description, tags and category.
    ///
    /// `query_lower` must already be lowercased.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self
                .tags
                .iter()
                .any(|t| t.to_lowercase().contains(query_lower))
            || self
                .category
                .as_ref()
                .is_some_and(|c| c.to_lowercase().contains(query_lower))
    }

    /// URL of a single component's registry item
    pub fn component_url(&self, component_name: &str) -> String {
        format!("{}/r/{}.json", self.base_url(), component_name)
    }
}

/// Strip one trailing slash, the cache key form of a registry URL
pub fn normalize_base_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

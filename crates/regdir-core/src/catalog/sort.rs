use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::domain::RegistryRecord;

/// Declared sort keys for `sort_registries`. All sorts are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// By `stars`
    Popularity,
    /// By `last_updated`
    Recency,
    ComponentCount,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Popularity, SortKey::Recency, SortKey::ComponentCount];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Recency => "recency",
            SortKey::ComponentCount => "component_count",
        }
    }

    /// Stable descending sort; ties keep catalog order. Missing metrics sort
    /// as zero, a missing `last_updated` sorts after every timestamp.
    pub fn sort(&self, records: &mut [RegistryRecord]) {
        match self {
            SortKey::Popularity => records.sort_by_key(|r| Reverse(r.stars.unwrap_or(0))),
            SortKey::Recency => records.sort_by_key(|r| Reverse(r.last_updated)),
            SortKey::ComponentCount => {
                records.sort_by_key(|r| Reverse(r.component_count.unwrap_or(0)))
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort key '{}', expected one of: popularity, recency, component_count",
            self.0
        )
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

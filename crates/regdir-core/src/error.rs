//! Error types for catalog loading and outbound fetches

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading the catalog or the component snapshot
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// File path, or "bundled catalog" for the compiled-in data
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures of a single outbound GET
///
/// These are recovered locally by the resolver and surfaced verbatim only by
/// the component details fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("{url} returned a body that is not valid JSON: {reason}")]
    Decode { url: String, reason: String },
}

impl FetchError {
    /// Classify a reqwest error, separating timeouts from other transport failures
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

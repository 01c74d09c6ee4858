//! Server configuration
//!
//! Populated from `REGDIR_*` environment variables (a `.env` file is loaded
//! by the binary before this runs), then overridden by command-line flags.

use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

use regdir_core::{branding, DEFAULT_PROBE_TIMEOUT};

/// Environment variable names
pub mod keys {
    pub const CATALOG: &str = "REGDIR_CATALOG";
    pub const SNAPSHOT: &str = "REGDIR_SNAPSHOT";
    pub const PROBE_TIMEOUT_MS: &str = "REGDIR_PROBE_TIMEOUT_MS";
    pub const DETAILS_TIMEOUT_MS: &str = "REGDIR_DETAILS_TIMEOUT_MS";
    pub const LOG_DIR: &str = "REGDIR_LOG_DIR";
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Catalog JSON file; the bundled catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Pre-scraped component snapshot; Phase-1 search is empty when unset
    pub snapshot_path: Option<PathBuf>,
    /// Per-candidate bound for index probes
    pub probe_timeout: Duration,
    /// Bound for `get_component_details`
    pub details_timeout: Duration,
    pub log_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            snapshot_path: None,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            details_timeout: DEFAULT_PROBE_TIMEOUT,
            log_dir: default_data_dir().join("logs"),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each key
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty(keys::CATALOG) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(path) = non_empty(keys::SNAPSHOT) {
            config.snapshot_path = Some(PathBuf::from(path));
        }
        if let Some(dir) = non_empty(keys::LOG_DIR) {
            config.log_dir = PathBuf::from(dir);
        }
        let timeout = |key: &str| non_empty(key).and_then(|v| parse_millis(key, &v));
        if let Some(probe_timeout) = timeout(keys::PROBE_TIMEOUT_MS) {
            config.probe_timeout = probe_timeout;
        }
        if let Some(details_timeout) = timeout(keys::DETAILS_TIMEOUT_MS) {
            config.details_timeout = details_timeout;
        }

        config
    }
}

/// Positive millisecond count, or `None` with a warning
fn parse_millis(key: &str, value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Some(Duration::from_millis(ms)),
        _ => {
            warn!(
                key = %key,
                value = %value,
                "Ignoring invalid timeout, expected milliseconds > 0"
            );
            None
        }
    }
}

/// Platform data directory for this app
/// (e.g. ~/.local/share/registry-directory on Linux)
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(branding::DATA_DIR_NAME)
}

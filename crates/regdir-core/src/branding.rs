//! Centralized product naming
//!
//! Every user-visible identifier the server reports comes from here.

/// MCP server name reported during initialization
pub const SERVER_NAME: &str = "registry-directory-mcp";

/// Human-readable product name
pub const DISPLAY_NAME: &str = "Registry Directory";

/// Prefix for log files written by the binary
pub const LOG_PREFIX: &str = "regdir";

/// Directory name under the platform data directory
pub const DATA_DIR_NAME: &str = "registry-directory";

/// User agent sent with every outbound HTTP request
pub const USER_AGENT: &str = concat!("RegistryDirectory/", env!("CARGO_PKG_VERSION"));

/// Resource URI serving the full registry catalog
pub const REGISTRY_LIST_URI: &str = "registries://list";

/// Resource URI serving the pre-scraped component snapshot
pub const SNAPSHOT_URI: &str = "components://snapshot";

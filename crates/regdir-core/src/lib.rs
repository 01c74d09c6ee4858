//! # Registry Directory Core
//!
//! Catalog of third-party UI component registries and best-effort discovery
//! of the component indexes they publish.
//!
//! ## Modules
//!
//! - `branding` - Product naming and well-known resource URIs
//! - `domain` - Registry records, index items, snapshot components, matches
//! - `catalog` - Process-lifetime catalog and snapshot stores
//! - `service` - Index resolution, component search, detail fetching, probing
//! - `error` - Error types shared by the stores and the HTTP seam

pub mod branding;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod service;

// Re-export commonly used types
pub use catalog::*;
pub use domain::*;
pub use error::*;
pub use service::*;

//! # Registry Directory MCP Server
//!
//! Exposes the registry catalog and component discovery over the Model
//! Context Protocol.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  RegistryDirectoryHandler    │  rmcp ServerHandler (stdio)
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  ToolDispatcher              │  argument validation, JSON rendering
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  ServiceContainer            │  catalog, snapshot, resolver,
//! │                              │  search, details fetcher
//! └──────────────────────────────┘
//! ```

pub mod config;
pub mod dispatch;
pub mod logging;
pub mod mcp;
pub mod services;

pub use config::ServerConfig;
pub use dispatch::{DispatchError, ToolCall, ToolDispatcher, ToolName, ToolOutput};
pub use mcp::{serve_stdio, RegistryDirectoryHandler};
pub use services::ServiceContainer;

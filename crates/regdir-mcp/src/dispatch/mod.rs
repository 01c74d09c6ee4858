//! Tool and resource dispatch
//!
//! Transport-independent: the MCP handler converts these types to rmcp
//! models, and tests drive the dispatcher directly.

mod dispatcher;
mod error;
mod resources;
mod tools;

pub use dispatcher::{ToolDispatcher, ToolOutput, NO_INDEX_FOUND};
pub use error::DispatchError;
pub use resources::ResourceSpec;
pub use tools::{ToolCall, ToolName, ToolSpec};

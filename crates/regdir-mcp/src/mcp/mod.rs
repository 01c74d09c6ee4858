//! MCP Server Implementation
//!
//! - `handler`: implements rmcp's `ServerHandler`, delegating to the
//!   [`ToolDispatcher`](crate::dispatch::ToolDispatcher)
//! - `serve_stdio`: runs the handler over stdin/stdout until the client disconnects

pub mod handler;

pub use handler::RegistryDirectoryHandler;

use anyhow::Context as _;
use rmcp::ServiceExt;
use tracing::info;

/// Serve `handler` over stdio until the peer closes the connection
pub async fn serve_stdio(handler: RegistryDirectoryHandler) -> anyhow::Result<()> {
    info!("Serving MCP over stdio");

    let service = handler
        .serve(rmcp::transport::stdio())
        .await
        .context("Failed to initialize MCP session")?;

    let reason = service.waiting().await.context("MCP session task failed")?;
    info!(reason = ?reason, "MCP session closed");
    Ok(())
}

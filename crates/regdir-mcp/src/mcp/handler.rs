//! Registry Directory MCP Handler
//!
//! Implements the MCP ServerHandler trait: resources expose the catalog (and
//! snapshot, when loaded); tools expose search, discovery and catalog queries.

use rmcp::{
    model::*, service::RequestContext, ErrorData as McpError, RoleServer, ServerHandler,
};
use std::sync::Arc;
use tracing::{debug, Instrument};

use regdir_core::branding;

use crate::dispatch::{DispatchError, ResourceSpec, ToolDispatcher, ToolSpec};
use crate::logging::{RequestSpan, TraceContext};

#[derive(Clone)]
pub struct RegistryDirectoryHandler {
    pub dispatcher: Arc<ToolDispatcher>,
}

impl RegistryDirectoryHandler {
    pub fn new(dispatcher: Arc<ToolDispatcher>) -> Self {
        Self { dispatcher }
    }
}

/// Map request-level failures onto MCP error codes
fn to_mcp_error(err: DispatchError) -> McpError {
    match err {
        DispatchError::UnknownTool(_) => {
            McpError::new(ErrorCode::METHOD_NOT_FOUND, err.to_string(), None)
        }
        DispatchError::MissingArgument(_) | DispatchError::InvalidArgument { .. } => {
            McpError::invalid_params(err.to_string(), None)
        }
        DispatchError::ResourceNotFound(_) => McpError::resource_not_found(err.to_string(), None),
        DispatchError::Serialize(_) => McpError::internal_error(err.to_string(), None),
    }
}

fn to_mcp_tool(spec: &ToolSpec) -> Tool {
    Tool::new(
        spec.name.as_str(),
        spec.description,
        Arc::new(spec.schema_object()),
    )
}

/// Resources are built from JSON, the same shape they take on the wire
fn to_mcp_resource(spec: &ResourceSpec) -> Option<Resource> {
    serde_json::from_value(serde_json::json!({
        "uri": spec.uri,
        "name": spec.name,
        "description": spec.description,
        "mimeType": spec.mime_type,
    }))
    .ok()
}

fn to_resource_contents(spec: &ResourceSpec, text: String) -> Option<ResourceContents> {
    serde_json::from_value(serde_json::json!({
        "uri": spec.uri,
        "mimeType": spec.mime_type,
        "text": text,
    }))
    .ok()
}

impl ServerHandler for RegistryDirectoryHandler {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: branding::SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Directory of shadcn-style UI component registries. Use search_registries \
                 to find registries, search_components or recommend_best_components to find \
                 components, and get_component_details to fetch a component's JSON."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _params: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools: Vec<Tool> = self
            .dispatcher
            .list_tools()
            .iter()
            .map(to_mcp_tool)
            .collect();

        debug!(count = tools.len(), "list_tools");
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        params: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = TraceContext::new("tools/call", params.name.to_string());
        let span = RequestSpan::enter(&ctx);

        async {
            RequestSpan::log_entry(&ctx);

            let result = self
                .dispatcher
                .call(&params.name, params.arguments.as_ref())
                .await;

            match result {
                Ok(output) => {
                    if output.is_error {
                        RequestSpan::log_exit(&ctx, Err(output.text.as_str()));
                    } else {
                        RequestSpan::log_exit(&ctx, Ok(()));
                    }
                    let content = vec![Content::text(output.text)];
                    Ok(if output.is_error {
                        CallToolResult::error(content)
                    } else {
                        CallToolResult::success(content)
                    })
                }
                Err(e) => {
                    RequestSpan::log_exit(&ctx, Err(e.to_string().as_str()));
                    Err(to_mcp_error(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn list_resources(
        &self,
        _params: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let resources: Vec<Resource> = self
            .dispatcher
            .list_resources()
            .iter()
            .filter_map(to_mcp_resource)
            .collect();

        debug!(count = resources.len(), "list_resources");
        Ok(ListResourcesResult::with_all_items(resources))
    }

    async fn read_resource(
        &self,
        params: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let ctx = TraceContext::new("resources/read", params.uri.to_string());

        RequestSpan::enter(&ctx).in_scope(|| {
            RequestSpan::log_entry(&ctx);

            let (spec, text) = self.dispatcher.read_resource(&params.uri).map_err(|e| {
                RequestSpan::log_exit(&ctx, Err(e.to_string().as_str()));
                to_mcp_error(e)
            })?;

            let Some(contents) = to_resource_contents(&spec, text) else {
                RequestSpan::log_exit(&ctx, Err("unrepresentable resource contents"));
                return Err(McpError::internal_error(
                    format!("Failed to build contents for '{}'", params.uri),
                    None,
                ));
            };

            RequestSpan::log_exit(&ctx, Ok(()));
            Ok(ReadResourceResult {
                contents: vec![contents],
            })
        })
    }
}

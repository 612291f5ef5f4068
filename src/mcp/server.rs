use super::bridge::{to_call_result, to_rmcp_tools};
use crate::error::ToolError;
use crate::tools::{ToolContext, ToolRegistry, ToolResult};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ListToolsResult, PaginatedRequestParams,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::transport::stdio;
use rmcp::{ErrorData, RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

const INSTRUCTIONS: &str = "Pressroom content operations. Most tools take an org_id; \
call pressroom_list_orgs first. Generated content waits for pressroom_approve before \
pressroom_publish sends it.";

/// MCP face of the tool registry.
#[derive(Clone)]
pub struct PressroomServer {
    registry: Arc<ToolRegistry>,
    ctx: ToolContext,
}

impl PressroomServer {
    pub fn new(registry: Arc<ToolRegistry>, ctx: ToolContext) -> Self {
        Self { registry, ctx }
    }

    /// Run one invocation. Argument problems come back as
    /// `invalid_params`; everything else is a tool result.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<ToolResult, ErrorData> {
        if self.registry.get(name).is_none() {
            return Err(ErrorData::invalid_params(
                ToolError::NotFound {
                    name: name.to_string(),
                }
                .to_string(),
                None,
            ));
        }

        match self.registry.execute(name, args, &self.ctx).await {
            Ok(result) => Ok(result),
            Err(err) => match err.downcast_ref::<ToolError>() {
                Some(ToolError::InvalidArguments { .. }) => {
                    Err(ErrorData::invalid_params(err.to_string(), None))
                }
                _ => Err(ErrorData::internal_error(err.to_string(), None)),
            },
        }
    }
}

impl ServerHandler for PressroomServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(to_rmcp_tools(
            &self.registry.specs(),
        )))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = request.arguments.map_or(Value::Null, Value::Object);
        debug!(tool = %request.name, "mcp tool call");
        let result = self.dispatch(&request.name, args).await?;
        Ok(to_call_result(&result))
    }
}

/// Serve the registry over stdio until the client hangs up.
pub async fn serve_stdio(registry: Arc<ToolRegistry>, ctx: ToolContext) -> anyhow::Result<()> {
    info!(
        tools = registry.len(),
        backend = ctx.gateway.base_url(),
        "starting MCP server on stdio"
    );
    let running = PressroomServer::new(registry, ctx).serve(stdio()).await?;
    let reason = running.waiting().await?;
    info!(?reason, "MCP client disconnected");
    Ok(())
}

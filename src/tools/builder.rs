//! Declarative construction of gateway-backed tools.
//!
//! A tool is a name, a description, an input schema and a typed handler.
//! Handlers receive already-deserialized arguments and return the text shown
//! to the caller; transport faults are turned into failed results here.

use super::traits::{Tool, ToolContext, ToolFuture, ToolResult};
use crate::error::{GatewayError, PipelineError, ToolError};
use crate::gateway::GatewayClient;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::warn;

type HandlerFuture = Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send>>;
type Handler = Arc<dyn Fn(Arc<GatewayClient>, Value) -> HandlerFuture + Send + Sync>;

/// Argument type for tools that take none.
#[derive(Debug, Default, Deserialize)]
pub struct NoArgs {}

/// A tool whose work is one or more gateway calls.
pub struct GatewayTool {
    name: String,
    description: String,
    input_schema: Value,
    handler: Handler,
}

impl std::fmt::Debug for GatewayTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayTool")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Tool for GatewayTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters_schema(&self) -> Value {
        self.input_schema.clone()
    }

    fn execute<'a>(&'a self, args: Value, ctx: &'a ToolContext) -> ToolFuture<'a> {
        (self.handler)(Arc::clone(&ctx.gateway), args)
    }
}

pub struct ToolBuilder {
    name: String,
    description: String,
    input_schema: Value,
}

impl ToolBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn input_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }

    pub fn build<A, F, Fut>(self, handler: F) -> GatewayTool
    where
        A: DeserializeOwned + Send + 'static,
        F: Fn(Arc<GatewayClient>, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, GatewayError>> + Send + 'static,
    {
        self.assemble(handler, fault_result)
    }

    /// Like [`build`](Self::build) for multi-step workflows: a fault keeps
    /// the summary of the steps that completed before it.
    pub fn build_pipeline<A, F, Fut>(self, handler: F) -> GatewayTool
    where
        A: DeserializeOwned + Send + 'static,
        F: Fn(Arc<GatewayClient>, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, PipelineError>> + Send + 'static,
    {
        self.assemble(handler, pipeline_fault_result)
    }

    fn assemble<A, F, Fut, E>(self, handler: F, on_fault: fn(&E) -> ToolResult) -> GatewayTool
    where
        A: DeserializeOwned + Send + 'static,
        F: Fn(Arc<GatewayClient>, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let tool_name = self.name.clone();
        let handler: Handler = Arc::new(move |gateway: Arc<GatewayClient>, args: Value| -> HandlerFuture {
            let parsed = match parse_args::<A>(&tool_name, args) {
                Ok(parsed) => parsed,
                Err(err) => return Box::pin(async move { Err(err.into()) }),
            };
            let call = handler(gateway, parsed);
            let tool_name = tool_name.clone();
            Box::pin(async move {
                match call.await {
                    Ok(text) => Ok(ToolResult::text(text)),
                    Err(fault) => {
                        warn!(tool = %tool_name, error = %fault, "tool call did not reach the backend");
                        Ok(on_fault(&fault))
                    }
                }
            })
        });

        GatewayTool {
            name: self.name,
            description: self.description,
            input_schema: self.input_schema,
            handler,
        }
    }
}

/// Missing or `null` arguments read as an empty object.
fn parse_args<A: DeserializeOwned>(tool: &str, args: Value) -> Result<A, ToolError> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|err| ToolError::InvalidArguments {
        name: tool.to_string(),
        message: err.to_string(),
    })
}

pub fn fault_result(fault: &GatewayError) -> ToolResult {
    ToolResult::failed(format!("Error: backend unreachable: {fault}"))
}

pub fn pipeline_fault_result(fault: &PipelineError) -> ToolResult {
    match &fault.progress {
        Some(progress) => ToolResult::failed(format!(
            "{progress}\nError: backend unreachable: {}",
            fault.source
        )),
        None => fault_result(&fault.source),
    }
}

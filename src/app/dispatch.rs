use crate::app::smoke::run_smoke;
use crate::app::status::render_status;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::gateway::GatewayClient;
use crate::mcp;
use crate::tools::{ToolContext, ToolRegistry, default_registry, tool_descriptions};
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::sync::Arc;

/// Parse `--args`; absent means no arguments.
pub fn parse_call_args(raw: Option<&str>) -> Result<Value> {
    let Some(raw) = raw else {
        return Ok(Value::Null);
    };
    let args: Value = serde_json::from_str(raw).context("--args is not valid JSON")?;
    if !args.is_object() {
        bail!("--args must be a JSON object");
    }
    Ok(args)
}

async fn call(registry: &ToolRegistry, ctx: &ToolContext, tool: &str, raw: Option<&str>) -> Result<()> {
    if registry.get(tool).is_none() {
        bail!("unknown tool '{tool}' (see `pressroom-mcp tools`)");
    }
    let args = parse_call_args(raw)?;
    let result = registry.execute(tool, args, ctx).await?;
    println!("{}", result.display_text());
    if !result.success {
        bail!("{tool} did not complete");
    }
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let gateway = GatewayClient::new(&config.backend)?;
    let ctx = ToolContext::new(Arc::new(gateway));
    let registry = Arc::new(default_registry());

    match cli.command() {
        Commands::Serve => mcp::serve_stdio(registry, ctx).await,
        Commands::Tools => {
            let descriptions = tool_descriptions(&registry);
            let width = descriptions.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            for (name, description) in descriptions {
                println!("{name:<width$}  {description}");
            }
            Ok(())
        }
        Commands::Call { tool, args } => call(&registry, &ctx, &tool, args.as_deref()).await,
        Commands::Smoke { org } => {
            let report = run_smoke(&registry, &ctx, org).await;
            println!("{}", report.render());
            if report.failed() > 0 {
                bail!("smoke suite: {} case(s) failed", report.failed());
            }
            Ok(())
        }
        Commands::Status => {
            println!("{}", render_status(&config, registry.len()));
            Ok(())
        }
    }
}

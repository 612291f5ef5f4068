use crate::config::Config;

pub fn render_status(config: &Config, tool_count: usize) -> String {
    let config_path = config
        .config_path
        .as_ref()
        .map_or_else(|| "(defaults)".to_string(), |path| path.display().to_string());
    let org = config
        .backend
        .org_id
        .map_or_else(|| "(none)".to_string(), |org| org.to_string());

    [
        "◆ Pressroom MCP".to_string(),
        String::new(),
        format!("Version     {}", env!("CARGO_PKG_VERSION")),
        format!("Config      {config_path}"),
        String::new(),
        format!("Backend     {}", config.backend.url),
        format!("API key     {}", config.masked_api_key()),
        format!("Org         {org}"),
        format!("Timeout     {}s", config.backend.timeout_secs),
        format!("Log level   {}", config.log.level),
        format!("Tools       {tool_count}"),
    ]
    .join("\n")
}

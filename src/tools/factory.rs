use super::{
    GatewayTool, Tool, ToolRegistry, audit, content, core_pipeline, intel, onboarding, orgs,
    settings, signals, stories, studio, team, workspace,
};

/// Every Pressroom tool, grouped the way the backend groups its routes.
pub fn all_tools() -> Vec<Box<dyn Tool>> {
    let groups: [fn() -> Vec<GatewayTool>; 12] = [
        orgs::tools,
        core_pipeline::tools,
        content::tools,
        signals::tools,
        stories::tools,
        settings::tools,
        audit::tools,
        intel::tools,
        onboarding::tools,
        team::tools,
        studio::tools,
        workspace::tools,
    ];
    groups
        .iter()
        .flat_map(|group| group())
        .map(|tool| Box::new(tool) as Box<dyn Tool>)
        .collect()
}

/// Registry holding [`all_tools`].
pub fn default_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for tool in all_tools() {
        registry.register(tool);
    }
    registry
}

/// `(name, description)` pairs for every registered tool, sorted by name.
pub fn tool_descriptions(registry: &ToolRegistry) -> Vec<(String, String)> {
    registry
        .specs()
        .into_iter()
        .map(|spec| (spec.name, spec.description))
        .collect()
}

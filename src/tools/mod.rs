pub mod audit;
pub mod builder;
pub mod content;
pub mod core_pipeline;
pub mod factory;
pub mod format;
pub mod intel;
pub mod onboarding;
pub mod orgs;
pub mod registry;
pub mod schema;
pub mod settings;
pub mod signals;
pub mod stories;
pub mod studio;
pub mod team;
pub mod traits;
pub mod workspace;

pub use builder::{GatewayTool, NoArgs, ToolBuilder, fault_result, pipeline_fault_result};
pub use factory::{all_tools, default_registry, tool_descriptions};
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolContext, ToolFuture, ToolResult, ToolSpec};

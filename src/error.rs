use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for the Pressroom adapter.
///
/// Backend-reported problems are *not* errors at this level: they travel as
/// [`crate::gateway::ApiFailure`] values inside a successful result. Only
/// configuration problems, transport faults and tool-dispatch problems end up
/// here. Internal code continues to use `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum PressroomError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Gateway (transport faults) ───────────────────────────────────────
    #[error("gateway: {0}")]
    Gateway(#[from] GatewayError),

    // ── Tools ────────────────────────────────────────────────────────────
    #[error("tool: {0}")]
    Tool(#[from] ToolError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Gateway errors ──────────────────────────────────────────────────────────

/// A call that could not be completed or whose success body broke the
/// JSON contract. Distinct from a backend-reported failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid backend url '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend answered {path} with status {status} and a non-JSON body: {source}")]
    Decode {
        path: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

// ─── Pipeline errors ─────────────────────────────────────────────────────────

/// A transport fault that ended a multi-step workflow, together with a
/// summary of the steps that had already completed.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct PipelineError {
    pub progress: Option<String>,
    #[source]
    pub source: GatewayError,
}

// ─── Tool errors ─────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("tool {name} not found")]
    NotFound { name: String },

    #[error("tool {name} received invalid arguments: {message}")]
    InvalidArguments { name: String, message: String },
}

// ─── Result alias ────────────────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, PressroomError>;
